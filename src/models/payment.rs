//! Payout request model

use serde::{Deserialize, Serialize, Serializer};
use chrono::{DateTime, SecondsFormat, Utc};

/// A request to cash out a user's whole balance; never mutated once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    pub id: String,
    pub chat_id: i64,
    pub montant: u64,
    #[serde(serialize_with = "serialize_millis")]
    pub date: DateTime<Utc>,
}

/// `2024-05-01T10:00:00.000Z`, the format existing documents use
fn serialize_millis<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reads_millisecond_timestamps() {
        let request: PayoutRequest = serde_json::from_str(
            r#"{"id":"p1","chatId":42,"montant":150,"date":"2024-05-01T10:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(request.chat_id, 42);
        assert_eq!(request.montant, 150);
        assert_eq!(request.date, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_writes_millisecond_timestamps() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap() + chrono::Duration::nanoseconds(599_859_732);
        let request = PayoutRequest {
            id: "p1".to_string(),
            chat_id: 42,
            montant: 150,
            date,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["date"], "2024-05-01T10:00:00.599Z");
    }
}
