use crate::fields::{normalize_value, parse_date_loose};
use crate::model::{FieldKeys, NormalizedRow};
use chrono::NaiveDate;

/// Trait defining the interface for the offer selector.
pub trait Selector {
    fn select_open_offerings(
        &self,
        rows: &[NormalizedRow],
        reference_date: NaiveDate,
    ) -> Vec<NormalizedRow>;
}

pub struct SelectorImpl {
    keys: FieldKeys,
    open_token: String,
}

impl SelectorImpl {
    pub fn new(keys: FieldKeys, open_token: &str) -> Self {
        Self {
            keys,
            open_token: normalize_value(open_token),
        }
    }

    fn field<'a>(&self, row: &'a NormalizedRow, key: &str) -> &'a str {
        row.get(key).map(String::as_str).unwrap_or("")
    }
}

impl Selector for SelectorImpl {
    /// Keeps a row iff its closing date parses, the closing date is on or
    /// after the reference date, and its offer type equals the open token
    /// (exact match after trim + lowercase; the conservative policy). Output
    /// is sorted ascending by closing date; ties keep their input order.
    /// Rows without a parseable closing date are excluded outright, never
    /// reported as an error.
    fn select_open_offerings(
        &self,
        rows: &[NormalizedRow],
        reference_date: NaiveDate,
    ) -> Vec<NormalizedRow> {
        let mut kept: Vec<(NaiveDate, NormalizedRow)> = Vec::new();

        for row in rows {
            let Some(closing) = parse_date_loose(self.field(row, &self.keys.fecha_cierre)) else {
                continue;
            };
            if closing < reference_date {
                continue;
            }
            if normalize_value(self.field(row, &self.keys.tipo_oferta)) != self.open_token {
                continue;
            }
            kept.push((closing, row.clone()));
        }

        // sort_by_key is stable, so same-day offerings keep their feed order
        kept.sort_by_key(|(closing, _)| *closing);
        kept.into_iter().map(|(_, row)| row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> SelectorImpl {
        SelectorImpl::new(FieldKeys::from_sheet_labels(), "Abierta")
    }

    fn row(cierre: &str, tipo: &str, ficha: &str) -> NormalizedRow {
        let keys = FieldKeys::from_sheet_labels();
        let mut r = NormalizedRow::new();
        r.insert(keys.fecha_cierre, cierre.to_string());
        r.insert(keys.tipo_oferta, tipo.to_string());
        r.insert(keys.ficha, ficha.to_string());
        r
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn keeps_only_open_future_parseable_rows() {
        let rows = vec![
            row("01/01/2099", "Abierta", "a"),
            row("01/01/2020", "Abierta", "b"),
            row("01/01/2099", "Cerrada", "c"),
            row("bad", "Abierta", "d"),
        ];

        let keys = FieldKeys::from_sheet_labels();
        let selected = selector().select_open_offerings(&rows, reference());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0][&keys.ficha], "a");
    }

    #[test]
    fn closing_on_reference_date_is_still_open() {
        let rows = vec![row("01/06/2024", "Abierta", "a")];
        assert_eq!(selector().select_open_offerings(&rows, reference()).len(), 1);
    }

    #[test]
    fn open_token_match_is_case_insensitive_and_exact() {
        let rows = vec![
            row("01/01/2099", "  ABIERTA ", "a"),
            row("01/01/2099", "abierta presencial", "b"),
        ];

        let keys = FieldKeys::from_sheet_labels();
        let selected = selector().select_open_offerings(&rows, reference());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0][&keys.ficha], "a");
    }

    #[test]
    fn missing_columns_exclude_the_row() {
        let selected = selector().select_open_offerings(&[NormalizedRow::new()], reference());
        assert!(selected.is_empty());
    }

    #[test]
    fn sorts_ascending_by_closing_date() {
        let rows = vec![
            row("10/08/2024", "Abierta", "late"),
            row("05/07/2024", "Abierta", "early"),
            row("01/08/2024", "Abierta", "mid"),
        ];

        let keys = FieldKeys::from_sheet_labels();
        let selected = selector().select_open_offerings(&rows, reference());
        let fichas: Vec<&str> = selected.iter().map(|r| r[&keys.ficha].as_str()).collect();
        assert_eq!(fichas, ["early", "mid", "late"]);
    }

    #[test]
    fn equal_closing_dates_keep_input_order() {
        let rows = vec![
            row("05/07/2024", "Abierta", "first"),
            row("05/07/2024", "Abierta", "second"),
            row("05/07/2024", "Abierta", "third"),
        ];

        let keys = FieldKeys::from_sheet_labels();
        let selected = selector().select_open_offerings(&rows, reference());
        let fichas: Vec<&str> = selected.iter().map(|r| r[&keys.ficha].as_str()).collect();
        assert_eq!(fichas, ["first", "second", "third"]);
    }

    #[test]
    fn selection_is_idempotent() {
        let rows = vec![
            row("10/08/2024", "Abierta", "late"),
            row("bad", "Abierta", "x"),
            row("05/07/2024", "Abierta", "early"),
        ];

        let once = selector().select_open_offerings(&rows, reference());
        let twice = selector().select_open_offerings(&rows, reference());
        assert_eq!(once, twice);
    }

    #[test]
    fn input_rows_are_not_mutated() {
        let rows = vec![row("01/01/2020", "Abierta", "a")];
        let before = rows.clone();
        let _ = selector().select_open_offerings(&rows, reference());
        assert_eq!(rows, before);
    }
}
