use std::sync::Arc;

/// An error that can occur in taskdb.
///
/// Business-rule failures (missing required fields, record not found) do not
/// use this type; mapper operations report those through their error buffer
/// and a `false` return. `Error` is reserved for conditions that indicate a
/// code or schema defect, plus failures bridged from the driver.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    /// Bridge for driver and other external failures.
    Anyhow(anyhow::Error),

    /// A column name was requested that the record's schema does not declare.
    FieldNotFound { model: String, column: String },

    /// A dictionary definition list failed validation at construction.
    InvalidDictionary(String),

    /// A dictionary lookup failed in either direction.
    DictionaryLookup(String),
}

impl Error {
    pub fn field_not_found(model: impl Into<String>, column: impl Into<String>) -> Self {
        Self::from(ErrorKind::FieldNotFound {
            model: model.into(),
            column: column.into(),
        })
    }

    pub fn invalid_dictionary(report: impl Into<String>) -> Self {
        Self::from(ErrorKind::InvalidDictionary(report.into()))
    }

    pub fn dictionary_lookup(message: impl Into<String>) -> Self {
        Self::from(ErrorKind::DictionaryLookup(message.into()))
    }

    pub fn is_field_not_found(&self) -> bool {
        matches!(&*self.inner, ErrorKind::FieldNotFound { .. })
    }

    pub fn is_invalid_dictionary(&self) -> bool {
        matches!(&*self.inner, ErrorKind::InvalidDictionary(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.inner {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &*self.inner {
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::FieldNotFound { model, column } => {
                write!(f, "internal error in {model}: field not found: {column}")
            }
            ErrorKind::InvalidDictionary(report) => {
                write!(f, "invalid dictionary definitions: {report}")
            }
            ErrorKind::DictionaryLookup(message) => core::fmt::Display::fmt(message, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_not_found_display() {
        let err = Error::field_not_found("UserModel", "LastNmae");
        assert!(err.is_field_not_found());
        assert_eq!(
            err.to_string(),
            "internal error in UserModel: field not found: LastNmae"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
        assert!(!err.is_field_not_found());
    }

    #[test]
    fn invalid_dictionary_display() {
        let err = Error::invalid_dictionary("missing code value: 2");
        assert!(err.is_invalid_dictionary());
        assert!(err.to_string().contains("missing code value: 2"));
    }
}
