// CSV tokenization of the published sheet export
use crate::model::{ParseError, RawRow};
use csv::ReaderBuilder;

pub trait Parser {
    fn parse(&self, text: &str) -> Result<Vec<RawRow>, ParseError>;
}

pub struct SheetParser;

impl SheetParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for SheetParser {
    /// First line is the header row; every following non-empty line becomes
    /// one `RawRow` keyed by the raw header labels. Truly empty lines are
    /// skipped by the reader itself; rows whose cells are merely blank pass
    /// through, the selection filter drops them later. Ragged records are
    /// tolerated (short rows just lack the trailing fields).
    fn parse(&self, text: &str) -> Result<Vec<RawRow>, ParseError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = RawRow::with_capacity(headers.len());
            for (i, cell) in record.iter().enumerate() {
                if let Some(label) = headers.get(i) {
                    row.insert(label.to_string(), cell.to_string());
                }
            }
            rows.push(row);
        }

        Ok(rows)
    }
}
