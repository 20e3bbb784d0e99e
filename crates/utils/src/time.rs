use chrono::{DateTime, Utc};

/// Timestamp layout used in generated `pom.properties` headers
pub const PROPERTIES_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

pub fn properties_timestamp(at: DateTime<Utc>) -> String {
    at.format(PROPERTIES_TIMESTAMP_FORMAT).to_string()
}

pub fn properties_timestamp_now() -> String {
    properties_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_properties_timestamp() {
        let at = Utc.with_ymd_and_hms(2013, 3, 7, 14, 5, 9).unwrap();
        assert_eq!(properties_timestamp(at), "Thu Mar 07 14:05:09 UTC 2013");
    }
}
