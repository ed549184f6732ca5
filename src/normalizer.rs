use crate::model::{NormalizedRow, RawRow};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical form of a column label: trimmed, lowercased, accents stripped,
/// whitespace runs collapsed to a single space. Labels differing only in
/// case, diacritics or spacing map to the same key ("Número" == "numero").
pub fn normalize_header(label: &str) -> String {
    let stripped: String = label
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Re-keys one row by the canonical form of each label. If two labels
/// collide after normalization the later entry wins silently; the published
/// sheets have no such collisions in practice.
pub fn normalize_row(row: &RawRow) -> NormalizedRow {
    let mut out = NormalizedRow::with_capacity(row.len());
    for (label, value) in row {
        out.insert(normalize_header(label), value.clone());
    }
    out
}

/// Normalizes a whole fetched batch. Never drops a row.
pub fn normalize_all(rows: &[RawRow]) -> Vec<NormalizedRow> {
    rows.iter().map(normalize_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_case_accent_and_whitespace_insensitive() {
        let canonical = normalize_header("Número de ficha");
        assert_eq!(normalize_header("numero de ficha"), canonical);
        assert_eq!(normalize_header("  NUMERO   DE  FICHA "), canonical);
        assert_eq!(normalize_header("NÚMERO DE FICHA"), canonical);
        assert_eq!(canonical, "numero de ficha");
    }

    #[test]
    fn header_handles_empty_and_blank() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn header_strips_spanish_diacritics() {
        assert_eq!(
            normalize_header("Fecha de cierre inscripción"),
            "fecha de cierre inscripcion"
        );
        assert_eq!(
            normalize_header("FECHA DE FINALIZACIÓN DE LA FORMACIÓN"),
            "fecha de finalizacion de la formacion"
        );
    }

    #[test]
    fn row_normalization_preserves_values_and_cardinality() {
        let mut row = RawRow::new();
        row.insert("Tipo de oferta".into(), "Abierta".into());
        row.insert("NÚMERO DE FICHA".into(), "12345".into());

        let normalized = normalize_row(&row);
        assert_eq!(normalized.len(), row.len());
        assert_eq!(normalized["tipo de oferta"], "Abierta");
        assert_eq!(normalized["numero de ficha"], "12345");
    }

    #[test]
    fn colliding_labels_merge_to_one_key() {
        let mut row = RawRow::new();
        row.insert("Número de ficha".into(), "1".into());
        row.insert("numero   DE ficha".into(), "2".into());

        let normalized = normalize_row(&row);
        assert_eq!(normalized.len(), 1);
        assert!(normalized.contains_key("numero de ficha"));
    }

    #[test]
    fn batch_normalization_never_drops_rows() {
        let mut row = RawRow::new();
        row.insert("Tipo de oferta".into(), "Abierta".into());
        let rows = vec![row.clone(), row.clone(), row];
        assert_eq!(normalize_all(&rows).len(), 3);
    }
}
