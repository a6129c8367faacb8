// src/card.rs
//
// Card input: one CardRecord per CSV data row.

use crate::config::consts::HOLO_TRUTHY;
use crate::csv::parse_rows;

/// One card as typed by the user. Trimmed; absent columns are empty / false.
///
/// `Eq + Hash` cover every field, so a record doubles as the memo-cache key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CardRecord {
    pub name: String,
    pub set: String,
    pub number: String,
    pub edition: String,
    pub holo: bool,
    pub condition: String,
}

impl CardRecord {
    /// Short human label for status lines: `name set #number`.
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = [&self.name, &self.set]
            .into_iter()
            .filter(|f| !f.is_empty())
            .cloned()
            .collect();
        if !self.number.is_empty() {
            parts.push(format!("#{}", self.number));
        }
        if parts.is_empty() { s!("(unnamed card)") } else { parts.join(" ") }
    }
}

pub fn parse_holo(cell: &str) -> bool {
    let v = cell.trim().to_ascii_lowercase();
    HOLO_TRUTHY.contains(&v.as_str())
}

fn cell(row: &[String], ix: Option<usize>) -> &str {
    ix.and_then(|i| row.get(i)).map(|s| s.trim()).unwrap_or("")
}

/// Column positions resolved from the header row.
#[derive(Default)]
struct Columns {
    name: Option<usize>,
    set: Option<usize>,
    number: Option<usize>,
    edition: Option<usize>,
    holo: Option<usize>,
    condition: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Self {
        let mut cols = Columns::default();
        for (ix, h) in header.iter().enumerate() {
            let slot = match h.trim().to_ascii_lowercase().as_str() {
                "name" => &mut cols.name,
                "set" => &mut cols.set,
                "number" => &mut cols.number,
                "edition" => &mut cols.edition,
                "holo" => &mut cols.holo,
                "condition" => &mut cols.condition,
                _ => continue,
            };
            // Last occurrence wins on duplicated headers
            *slot = Some(ix);
        }
        cols
    }

    fn record(&self, row: &[String]) -> CardRecord {
        CardRecord {
            name: s!(cell(row, self.name)),
            set: s!(cell(row, self.set)),
            number: s!(cell(row, self.number)),
            edition: s!(cell(row, self.edition)),
            holo: parse_holo(cell(row, self.holo)),
            condition: s!(cell(row, self.condition)),
        }
    }
}

/// Parse header + rows CSV text into cards, in input order.
///
/// Empty input gives no cards. Unknown columns are ignored, missing ones
/// default. Short rows default their missing cells; extra cells are ignored.
pub fn parse_cards(text: &str) -> Vec<CardRecord> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let mut rows = parse_rows(text, ',').into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let cols = Columns::from_header(&header);
    rows.map(|row| cols.record(&row)).collect()
}
