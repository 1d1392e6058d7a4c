use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Lifecycle state of a scheduled live stream
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StreamStatus {
    Upcoming,
    Live,
    Ended,
}

impl StreamStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_trips_through_storage_strings() {
        assert_eq!(StreamStatus::Upcoming.as_str(), "upcoming");
        assert_eq!(StreamStatus::from_str("live").unwrap(), StreamStatus::Live);
        assert!(StreamStatus::from_str("archived").is_err());
    }

    #[test]
    fn deserializes_lowercase_json() {
        let status: StreamStatus = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(status, StreamStatus::Ended);
    }
}
