// Projects selected rows into display cards and renders the text board.
use crate::fields::{date_only, left_of_double_dash, safe_text, safe_text_or, to_sentence_case};
use crate::model::{FieldKeys, NormalizedRow, OfferingCard};

const UNNAMED_PROGRAM: &str = "PROGRAMA SIN NOMBRE";

pub struct BoardView {
    keys: FieldKeys,
    link_template: String,
}

impl BoardView {
    pub fn new(keys: FieldKeys, link_template: &str) -> Self {
        Self {
            keys,
            link_template: link_template.to_string(),
        }
    }

    fn field<'a>(&self, row: &'a NormalizedRow, key: &str) -> &'a str {
        row.get(key).map(String::as_str).unwrap_or("")
    }

    /// Maps one selected offering to its display fields. Every field
    /// degrades to the placeholder on its own; a malformed cell never drops
    /// the card.
    pub fn card_for(&self, row: &NormalizedRow) -> OfferingCard {
        let titulo = safe_text_or(
            &left_of_double_dash(self.field(row, &self.keys.nombre_programa)),
            UNNAMED_PROGRAM,
        )
        .to_uppercase();

        let ficha = safe_text(self.field(row, &self.keys.ficha));

        // e.g. "Horario: Lunes, Miercoles, Viernes 8:00 a 12:00. Ambiente: Sala 2."
        let observacion = format!(
            "Horario: {} {} a {}. Ambiente: {}.",
            safe_text(&to_sentence_case(self.field(row, &self.keys.horario))),
            safe_text(self.field(row, &self.keys.hora_inicio)),
            safe_text(self.field(row, &self.keys.hora_final)),
            safe_text(&to_sentence_case(self.field(row, &self.keys.ambiente))),
        );

        // Outbound link is plain string interpolation, presentation-side only.
        let link = self.link_template.replace("{ficha}", &ficha);

        OfferingCard {
            titulo,
            ficha,
            inicio: safe_text(&date_only(self.field(row, &self.keys.fecha_inicio))),
            fin: safe_text(&date_only(self.field(row, &self.keys.fecha_fin))),
            cierre: safe_text(&date_only(self.field(row, &self.keys.fecha_cierre))),
            observacion,
            link,
        }
    }

    /// Renders the whole board as text: a count line, then one block per
    /// offering in the order the selector produced.
    pub fn render_board(&self, rows: &[NormalizedRow]) -> String {
        if rows.is_empty() {
            return "No hay fichas vigentes.\n".to_string();
        }

        let mut out = format!("Oferta en inscripción — {} resultados\n", rows.len());
        for row in rows {
            let card = self.card_for(row);
            out.push_str(&format!(
                "\n{}\n  Inicio: {}  Finalización: {}\n  Cierre inscripción: {}\n  Ficha: {} ({})\n  {}\n",
                card.titulo, card.inicio, card.fin, card.cierre, card.ficha, card.link, card.observacion,
            ));
        }
        out
    }
}
