//! Announcement text for a newly discovered show.

use stagewatch_core::ShowRecord;

/// Build the announcement body for one show.
///
/// A headline line followed by the labelled schedule fields, one per line.
/// The tickets line is appended separately by the announcer after link
/// enrichment, so this function never touches the network.
///
/// # Examples
///
/// ```
/// use stagewatch_core::ShowRecord;
/// use stagewatch_telegram::format_announcement;
///
/// let show = ShowRecord::new(
///     "12/31/24".to_string(),
///     "Tue".to_string(),
///     "Main Hall".to_string(),
///     "21:00".to_string(),
///     None,
///     None,
/// );
///
/// let text = format_announcement("New show announced", &show);
/// assert!(text.starts_with("New show announced\n"));
/// assert!(text.contains("Venue: Main Hall"));
/// ```
pub fn format_announcement(headline: &str, show: &ShowRecord) -> String {
    [
        headline.to_string(),
        format!("Date: {}", show.date),
        format!("Day: {}", show.day),
        format!("Time: {}", show.time),
        format!("Venue: {}", show.location),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_fields_in_announcement_order() {
        let show = ShowRecord::new(
            "1/2/25".to_string(),
            "Thu".to_string(),
            "Club Stage".to_string(),
            "20:30".to_string(),
            Some("https://tickets.example.com/9".to_string()),
            Some("Buy".to_string()),
        );

        let text = format_announcement("Heads up", &show);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Heads up",
                "Date: 1/2/25",
                "Day: Thu",
                "Time: 20:30",
                "Venue: Club Stage",
            ]
        );
    }
}
