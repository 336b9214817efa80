use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A temporal constraint attached to a data source.
///
/// Open-ended intervals are allowed: a missing bound means unbounded on that
/// side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimeInterval {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Encode the interval as a `start/end` request parameter value.
    ///
    /// Unbounded sides are encoded as an empty segment, matching the
    /// interval syntax of time-enabled image services.
    pub fn encode_param(&self) -> String {
        let encode = |bound: &Option<DateTime<Utc>>| {
            bound
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default()
        };
        format!("{}/{}", encode(&self.start), encode(&self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_closed_interval() {
        let interval = TimeInterval::new(
            Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            Some(Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap()),
        );
        assert_eq!(
            interval.encode_param(),
            "2021-01-01T00:00:00Z/2021-12-31T23:59:59Z"
        );
    }

    #[test]
    fn test_encode_open_end() {
        let interval = TimeInterval::new(
            Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            None,
        );
        assert_eq!(interval.encode_param(), "2021-01-01T00:00:00Z/");
    }

    #[test]
    fn test_declaration_shape() {
        let interval: TimeInterval =
            serde_json::from_str(r#"{ "start": "2020-06-01T00:00:00Z" }"#).unwrap();
        assert!(interval.start.is_some());
        assert!(interval.end.is_none());
    }
}
