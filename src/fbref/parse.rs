//! HTML table parsing

use crate::{storage::PlayerRecord, Result, StatsError};
use scraper::{ElementRef, Html, Selector};

/// Rows with fewer cells than this are dropped.
pub const MIN_COLUMNS: usize = 7;

const PLAYER_COL: usize = 0;
const TEAM_COL: usize = 1;
const GOALS_COL: usize = 5;
const ASSISTS_COL: usize = 6;

/// Records pulled out of the table, plus what the policies discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<PlayerRecord>,
    /// Rows dropped for having fewer than `MIN_COLUMNS` cells.
    pub short_rows_skipped: usize,
    /// Goals/assists cells that were not integer literals and became 0.
    pub cells_normalized: usize,
}

/// Count policy: a non-empty run of ASCII digits is parsed as a count.
/// Anything else (blank, signs, decimals) is 0.
///
/// Counts are `u32`; a digit run above `u32::MAX` is treated like any other
/// unusable cell and also becomes 0, so a stored count is never truncated.
pub fn parse_count(text: &str) -> u32 {
    parse_strict_count(text).unwrap_or(0)
}

fn parse_strict_count(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Locate the table with id `table_id` and turn its data rows into records.
///
/// The first `<tr>` is the header and is skipped. Only `<td>` cells count as
/// columns.
pub fn extract_player_records(html: &str, table_id: &str) -> Result<Extraction> {
    let table_selector = table_selector(table_id)?;
    let row_selector = Selector::parse("tr").map_err(|_| invalid_selector("tr"))?;
    let cell_selector = Selector::parse("td").map_err(|_| invalid_selector("td"))?;

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| StatsError::Parse {
            table_id: table_id.to_string(),
        })?;

    let mut extraction = Extraction::default();
    for (index, row) in table.select(&row_selector).enumerate().skip(1) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < MIN_COLUMNS {
            tracing::debug!(row = index, columns = cells.len(), "skipping short row");
            extraction.short_rows_skipped += 1;
            continue;
        }

        let goals = cell_text(&cells[GOALS_COL]);
        let assists = cell_text(&cells[ASSISTS_COL]);
        let record = PlayerRecord {
            player: cell_text(&cells[PLAYER_COL]),
            team: cell_text(&cells[TEAM_COL]),
            goals: extraction.count(&goals),
            assists: extraction.count(&assists),
        };
        extraction.records.push(record);
    }

    Ok(extraction)
}

impl Extraction {
    fn count(&mut self, text: &str) -> u32 {
        match parse_strict_count(text) {
            Some(value) => value,
            None => {
                tracing::debug!(cell = text, "non-numeric count normalized to 0");
                self.cells_normalized += 1;
                0
            }
        }
    }
}

/// Selector for `<table id="...">`; the id is quoted so any string is accepted.
pub(crate) fn table_selector(table_id: &str) -> Result<Selector> {
    let escaped = table_id.replace('\\', "\\\\").replace('"', "\\\"");
    let selector = format!("table[id=\"{escaped}\"]");
    Selector::parse(&selector).map_err(|_| invalid_selector(&selector))
}

fn invalid_selector(selector: &str) -> StatsError {
    StatsError::InvalidSelector {
        selector: selector.to_string(),
    }
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
