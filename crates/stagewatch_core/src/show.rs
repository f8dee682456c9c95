//! The scraped show record.

use serde::{Deserialize, Serialize};

/// One show listing as scraped from the schedule table.
///
/// The raw date-cell text is the natural unique key: the site never lists
/// two shows on the same date row, and the text is stable across scrapes.
/// Optional fields are omitted from the serialized form when absent and
/// tolerated as missing on read, so old state files stay loadable.
///
/// # Examples
///
/// ```
/// use stagewatch_core::ShowRecord;
///
/// let show = ShowRecord::new(
///     "12/31/24".to_string(),
///     "Tue".to_string(),
///     "Main Hall".to_string(),
///     "21:00".to_string(),
///     Some("https://tickets.example.com/123".to_string()),
///     Some("Buy tickets".to_string()),
/// );
///
/// assert_eq!(show.date, "12/31/24");
/// assert!(show.ticket_url().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ShowRecord {
    /// Raw date-cell text; unique within one extraction
    pub date: String,
    /// Day-of-week cell text
    pub day: String,
    /// Venue cell text
    pub location: String,
    /// Start-time cell text
    pub time: String,
    /// Ticket purchase URL, when the site offers one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Display text of the tickets cell; fallback label when no usable link exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl ShowRecord {
    /// The ticket link, but only when it is an absolute `http(s)` URL.
    ///
    /// Sold-out shows carry relative fragments or nothing at all in the
    /// tickets cell; those are not links anyone can follow.
    pub fn ticket_url(&self) -> Option<&str> {
        self.link
            .as_deref()
            .filter(|l| l.starts_with("http://") || l.starts_with("https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(link: Option<&str>) -> ShowRecord {
        ShowRecord::new(
            "1/2/25".to_string(),
            "Thu".to_string(),
            "Hall".to_string(),
            "20:00".to_string(),
            link.map(String::from),
            None,
        )
    }

    #[test]
    fn absolute_links_are_ticket_urls() {
        let show = record(Some("https://tickets.example.com/1"));
        assert_eq!(show.ticket_url(), Some("https://tickets.example.com/1"));
    }

    #[test]
    fn relative_links_are_not_ticket_urls() {
        assert!(record(Some("show.php?id=52")).ticket_url().is_none());
        assert!(record(None).ticket_url().is_none());
    }

    #[test]
    fn absent_optional_fields_round_trip() {
        let show = record(None);
        let json = serde_json::to_string(&show).unwrap();
        assert!(!json.contains("link"));
        let back: ShowRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(show, back);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let json = r#"{"date":"1/2/25","day":"Thu","location":"Hall","time":"20:00","venue_id":7}"#;
        let show: ShowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(show.date, "1/2/25");
        assert!(show.link.is_none());
    }
}
