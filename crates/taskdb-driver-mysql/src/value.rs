use chrono::{NaiveDate, NaiveDateTime};
use taskdb_core::{Result, SqlValue};

/// Converts one wire cell into the driver-neutral scalar form.
///
/// `DATE` columns come back with a zeroed time component; those map to the
/// calendar-date kind, everything else with a date payload maps to the
/// datetime kind.
pub(crate) fn from_mysql(value: mysql_async::Value) -> Result<SqlValue> {
    use mysql_async::Value::*;

    Ok(match value {
        NULL => SqlValue::Null,
        Int(v) => SqlValue::Int(v),
        UInt(v) => SqlValue::UInt(v),
        Float(v) => SqlValue::Double(f64::from(v)),
        Double(v) => SqlValue::Double(v),
        Bytes(bytes) => SqlValue::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Date(year, month, day, 0, 0, 0, 0) => SqlValue::Date(naive_date(year, month, day)?),
        Date(year, month, day, hour, minute, second, micro) => {
            let date = naive_date(year, month, day)?;
            let time = chrono::NaiveTime::from_hms_micro_opt(
                u32::from(hour),
                u32::from(minute),
                u32::from(second),
                micro,
            )
            .ok_or_else(|| {
                taskdb_core::Error::from(anyhow::anyhow!(
                    "invalid time from server: {hour:02}:{minute:02}:{second:02}.{micro}"
                ))
            })?;
            SqlValue::DateTime(NaiveDateTime::new(date, time))
        }
        Time(..) => {
            return Err(anyhow::anyhow!("TIME columns are not supported").into());
        }
    })
}

fn naive_date(year: u16, month: u8, day: u8) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day)).ok_or_else(|| {
        taskdb_core::Error::from(anyhow::anyhow!(
            "invalid date from server: {year:04}-{month:02}-{day:02}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_mapping() {
        assert_eq!(from_mysql(mysql_async::Value::NULL).unwrap(), SqlValue::Null);
        assert_eq!(
            from_mysql(mysql_async::Value::Int(-3)).unwrap(),
            SqlValue::Int(-3)
        );
        assert_eq!(
            from_mysql(mysql_async::Value::Bytes(b"Jane".to_vec())).unwrap(),
            SqlValue::Text("Jane".to_string())
        );
    }

    #[test]
    fn zero_time_maps_to_date() {
        let value = from_mysql(mysql_async::Value::Date(2026, 3, 9, 0, 0, 0, 0)).unwrap();
        assert_eq!(
            value,
            SqlValue::Date(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap())
        );
    }

    #[test]
    fn nonzero_time_maps_to_datetime() {
        let value = from_mysql(mysql_async::Value::Date(2026, 3, 9, 14, 5, 0, 0)).unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(value, SqlValue::DateTime(expected));
    }

    #[test]
    fn invalid_date_is_an_error() {
        assert!(from_mysql(mysql_async::Value::Date(2026, 13, 1, 0, 0, 0, 0)).is_err());
    }
}
