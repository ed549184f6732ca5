// Core types: feed rows, lookup keys, display cards
use crate::normalizer::normalize_header;
use std::collections::HashMap;
use thiserror::Error;

/// One data line of the sheet, keyed by the human-authored column label.
pub type RawRow = HashMap<String, String>;

/// Same row, keyed by the canonical form of each label.
pub type NormalizedRow = HashMap<String, String>;

/// The fixed set of canonical keys the pipeline looks up. Computed through
/// `normalize_header` from the sheet's actual labels, so lookups match the
/// keys produced for the data rows regardless of casing or accents.
#[derive(Debug, Clone)]
pub struct FieldKeys {
    pub nombre_programa: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub ficha: String,
    pub fecha_cierre: String,
    pub tipo_oferta: String,
    pub hora_inicio: String,
    pub hora_final: String,
    pub ambiente: String,
    pub horario: String,
}

impl FieldKeys {
    pub fn from_sheet_labels() -> Self {
        Self {
            nombre_programa: normalize_header("NOMBRE DEL PROGRAMA DE FORMACIÓN"),
            fecha_inicio: normalize_header("FECHA DE INICIO DE LA FORMACIÓN"),
            fecha_fin: normalize_header("FECHA DE FINALIZACIÓN DE LA FORMACIÓN"),
            ficha: normalize_header("Número de ficha"),
            fecha_cierre: normalize_header("Fecha de cierre inscripción"),
            tipo_oferta: normalize_header("Tipo de oferta"),
            hora_inicio: normalize_header("HORARIO DE INICIO"),
            hora_final: normalize_header("HORA FINAL"),
            ambiente: normalize_header("AMBIENTE DE FORMACIÓN"),
            // trailing space is present in the published sheet
            horario: normalize_header("LUNES, MIERCOLES, VIERNES "),
        }
    }
}

/// Display projection of one selected offering.
#[derive(Debug, Clone)]
pub struct OfferingCard {
    pub titulo: String,
    pub ficha: String,
    pub inicio: String,
    pub fin: String,
    pub cierre: String,
    pub observacion: String,
    pub link: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing sheet CSV url: set sheet_csv_url in config.json or the SHEET_CSV_URL variable")]
    MissingSheetUrl,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    BadStatus(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
