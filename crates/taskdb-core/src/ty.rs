use crate::{Dictionary, DictionaryCode, Result, Value};

/// The declared column type of a [`Field`](crate::Field).
///
/// The codes are stable: they are part of the wire vocabulary and must
/// round-trip through the display-name dictionary unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Auto-generated primary key or foreign key reference
    Key = 0,

    /// Calendar date
    Date = 1,

    /// Date and time
    DateTime = 2,

    /// Timestamp, stored the same way as `DateTime`
    TimeStamp = 3,

    /// Short variable-length text
    ShortText = 4,

    /// Medium variable-length text
    MediumText = 5,

    /// Long variable-length text
    LongText = 6,

    /// Tiny text blob
    TinyText = 7,

    /// Text blob
    Text = 8,

    Boolean = 9,

    UnsignedInt = 10,

    Int = 11,

    /// Size-like unsigned count
    Size = 12,

    Double = 13,
}

impl FieldType {
    pub const ALL: [Self; 14] = [
        Self::Key,
        Self::Date,
        Self::DateTime,
        Self::TimeStamp,
        Self::ShortText,
        Self::MediumText,
        Self::LongText,
        Self::TinyText,
        Self::Text,
        Self::Boolean,
        Self::UnsignedInt,
        Self::Int,
        Self::Size,
        Self::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::TimeStamp => "TimeStamp",
            Self::ShortText => "ShortText",
            Self::MediumText => "MediumText",
            Self::LongText => "LongText",
            Self::TinyText => "TinyText",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::UnsignedInt => "UnsignedInt",
            Self::Int => "Int",
            Self::Size => "Size",
            Self::Double => "Double",
        }
    }

    /// Builds the validated type-code to display-name translation table.
    ///
    /// Constructed explicitly by whichever component needs name lookups
    /// rather than held as process-wide state.
    pub fn dictionary() -> Result<Dictionary<Self>> {
        Dictionary::new(Self::ALL.into_iter().map(|ty| (ty, ty.name())))
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::ShortText | Self::MediumText | Self::LongText | Self::TinyText | Self::Text
        )
    }

    /// Whether a value's active variant matches the kind this type stores.
    pub fn expects(self, value: &Value) -> bool {
        match self {
            Self::Key | Self::Size => matches!(value, Value::U64(_)),
            Self::Date => matches!(value, Value::Date(_)),
            Self::DateTime | Self::TimeStamp => matches!(value, Value::DateTime(_)),
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::UnsignedInt => matches!(value, Value::U32(_)),
            Self::Int => matches!(value, Value::I32(_)),
            Self::Double => matches!(value, Value::F64(_)),
            _ => value.is_string(),
        }
    }
}

impl DictionaryCode for FieldType {
    fn code(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_contiguous() {
        for (expected, ty) in FieldType::ALL.into_iter().enumerate() {
            assert_eq!(ty.code(), expected);
        }
    }

    #[test]
    fn display_names_round_trip() {
        let dictionary = FieldType::dictionary().unwrap();

        for ty in FieldType::ALL {
            let name = dictionary.name(ty).unwrap();
            assert_eq!(name, ty.name());
            assert_eq!(dictionary.code(name).unwrap(), ty);
        }
    }

    #[test]
    fn expected_value_kinds() {
        assert!(FieldType::Key.expects(&Value::U64(1)));
        assert!(!FieldType::Key.expects(&Value::I32(1)));
        assert!(FieldType::ShortText.expects(&Value::from("x")));
        assert!(FieldType::TimeStamp.expects(&Value::DateTime(Default::default())));
        assert!(!FieldType::Boolean.expects(&Value::U32(1)));
    }
}
