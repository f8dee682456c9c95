//! HTML table parsing for the appearances schedule.

use scraper::{ElementRef, Html, Selector};
use stagewatch_core::{Extraction, ShowRecord};
use stagewatch_error::{ExtractError, ExtractErrorKind, StagewatchResult};
use tracing::warn;

/// Row selector for the appearances table.
const ROW_SELECTOR: &str = ".show_appearances_list tr";

// The table interleaves presentation rows with data rows: the first three
// rows are headers, data rows sit at even indices from four up, and data
// cells alternate with spacer cells (0 date, 2 day, 4 venue, 6 time, 8
// tickets anchor).
const HEADER_ROWS: usize = 3;
const DATE_CELL: usize = 0;
const DAY_CELL: usize = 2;
const LOCATION_CELL: usize = 4;
const TIME_CELL: usize = 6;
const TICKETS_CELL: usize = 8;

/// Parse the schedule page body into an ordered extraction.
///
/// A body where the row selector matches nothing at all means the page
/// failed to render or its layout changed; that is an error and the cycle
/// aborts. A table whose data rows all filter out parses to an empty
/// extraction, which is not an error.
pub fn extract_shows(html: &str) -> StagewatchResult<Extraction> {
    let rows = Selector::parse(ROW_SELECTOR)
        .map_err(|e| ExtractError::new(ExtractErrorKind::Selector(e.to_string())))?;
    let cells = Selector::parse("td")
        .map_err(|e| ExtractError::new(ExtractErrorKind::Selector(e.to_string())))?;
    let anchors = Selector::parse("a")
        .map_err(|e| ExtractError::new(ExtractErrorKind::Selector(e.to_string())))?;

    let document = Html::parse_document(html);
    let mut extraction = Extraction::new();
    let mut matched = 0usize;

    for (index, row) in document.select(&rows).enumerate() {
        matched += 1;
        if index < HEADER_ROWS || index % 2 == 1 {
            continue;
        }

        match parse_row(&row, &cells, &anchors) {
            Some(record) => {
                if !extraction.insert(record) {
                    warn!(row = index, "Duplicate date row in schedule table, keeping first");
                }
            }
            None => warn!(row = index, "Dropping malformed schedule row"),
        }
    }

    if matched == 0 {
        return Err(ExtractError::new(ExtractErrorKind::EmptySchedule(
            ROW_SELECTOR.to_string(),
        ))
        .into());
    }

    Ok(extraction)
}

/// Parse one data row, or `None` when a required cell is missing or empty.
fn parse_row(row: &ElementRef, cells: &Selector, anchors: &Selector) -> Option<ShowRecord> {
    let cells: Vec<ElementRef> = row.select(cells).collect();

    let date = text_of(cells.get(DATE_CELL)?)?;
    let day = text_of(cells.get(DAY_CELL)?)?;
    let location = text_of(cells.get(LOCATION_CELL)?)?;
    let time = text_of(cells.get(TIME_CELL)?)?;

    let tickets = cells.get(TICKETS_CELL);
    let anchor = tickets.and_then(|cell| cell.select(anchors).next());
    let link = anchor
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);
    let link_text = match anchor {
        Some(a) => text_of(&a),
        None => tickets.and_then(text_of),
    };

    Some(ShowRecord::new(date, day, location, time, link, link_text))
}

fn text_of(element: &ElementRef) -> Option<String> {
    let text = element.text().collect::<String>().trim().to_string();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "<tr><td>Upcoming shows</td></tr>";
    const SPACER: &str = "<tr><td></td></tr>";

    fn data_row(date: &str, day: &str, location: &str, time: &str, tickets: &str) -> String {
        format!(
            "<tr><td>{date}</td><td></td><td>{day}</td><td></td><td>{location}</td>\
             <td></td><td>{time}</td><td></td><td>{tickets}</td></tr>"
        )
    }

    fn page(data_rows: &[String]) -> String {
        let mut rows = vec![HEADER.to_string(), HEADER.to_string(), HEADER.to_string()];
        for row in data_rows {
            rows.push(SPACER.to_string());
            rows.push(row.clone());
        }
        format!(
            "<html><body><table class=\"show_appearances_list\">{}</table></body></html>",
            rows.join("")
        )
    }

    #[test]
    fn extracts_rows_in_page_order() {
        let html = page(&[
            data_row(
                "12/31/24",
                "Tue",
                "Main Hall",
                "21:00",
                "<a href=\"https://tickets.example.com/1\">Buy</a>",
            ),
            data_row("1/2/25", "Thu", "Club Stage", "20:30", "Sold out"),
        ]);

        let extraction = extract_shows(&html).unwrap();
        assert_eq!(extraction.len(), 2);

        let shows: Vec<&ShowRecord> = extraction.iter().map(|(_, record)| record).collect();
        assert_eq!(shows[0].date, "12/31/24");
        assert_eq!(shows[0].day, "Tue");
        assert_eq!(shows[0].location, "Main Hall");
        assert_eq!(shows[0].time, "21:00");
        assert_eq!(shows[0].link.as_deref(), Some("https://tickets.example.com/1"));
        assert_eq!(shows[0].link_text.as_deref(), Some("Buy"));
        assert_eq!(shows[1].date, "1/2/25");
    }

    #[test]
    fn sold_out_rows_have_no_link() {
        let html = page(&[data_row("1/2/25", "Thu", "Club Stage", "20:30", "Sold out")]);

        let extraction = extract_shows(&html).unwrap();
        let (_, show) = extraction.iter().next().unwrap();

        assert!(show.link.is_none());
        assert_eq!(show.link_text.as_deref(), Some("Sold out"));
    }

    #[test]
    fn rows_missing_required_cells_are_dropped() {
        let short_row = "<tr><td>1/2/25</td><td></td><td>Thu</td></tr>".to_string();
        let html = page(&[
            short_row,
            data_row("2/2/25", "Fri", "Main Hall", "22:00", ""),
        ]);

        let extraction = extract_shows(&html).unwrap();
        assert_eq!(extraction.len(), 1);
        assert!(extraction.contains("2/2/25"));
    }

    #[test]
    fn duplicate_dates_keep_the_first_row() {
        let html = page(&[
            data_row("1/2/25", "Thu", "First", "20:30", ""),
            data_row("1/2/25", "Thu", "Second", "20:30", ""),
        ]);

        let extraction = extract_shows(&html).unwrap();
        assert_eq!(extraction.len(), 1);
        let (_, show) = extraction.iter().next().unwrap();
        assert_eq!(show.location, "First");
    }

    #[test]
    fn headers_only_table_is_an_empty_extraction() {
        let extraction = extract_shows(&page(&[])).unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = extract_shows("<html><body><p>Down for maintenance</p></body></html>")
            .unwrap_err();
        assert!(format!("{}", err).contains("matched no rows"));
    }
}
