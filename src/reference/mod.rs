//! Built-in reference guide: which GRUPO and PLANO FINANCEIRO each insumo
//! belongs to.

mod catalog;

pub use catalog::SECTIONS;

use crate::table::{ParsedTable, Record};

/// Column names of every reference table.
pub const COLUMNS: [&str; 3] = ["INSUMO", "GRUPO DE INSUMO", "PLANO FINANCEIRO"];

pub const TITLE: &str = "Tabela de Referência e Uso";

/// Closing advice shown after the tables.
pub const TIP: &str = "Sempre que houver dúvida, priorize a fidelidade do plano financeiro ao \
                       evento econômico. Em locações, não esqueça de iniciar o insumo por LOCAÇÃO.";

const INTRO_ID: &str = "intro";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub insumo: &'static str,
    pub grupo: &'static str,
    pub plano: &'static str,
}

impl Row {
    pub fn to_record(&self) -> Record {
        COLUMNS
            .iter()
            .copied()
            .zip([self.insumo, self.grupo, self.plano])
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefTable {
    pub subtitle: Option<&'static str>,
    pub caption: Option<&'static str>,
    pub rows: &'static [Row],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Anchor id, e.g. `"locacoes"`.
    pub id: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub notes: &'static [&'static str],
    pub tables: &'static [RefTable],
    /// Printed after the last table of the section.
    pub footer: Option<&'static str>,
}

impl Section {
    pub fn is_intro(&self) -> bool {
        self.id == INTRO_ID
    }

    pub fn rows(&self) -> impl Iterator<Item = &'static Row> {
        let tables: &'static [RefTable] = self.tables;
        tables.iter().flat_map(|t| t.rows.iter())
    }
}

/// `(id, title)` of every section after the intro, in page order.
pub fn table_of_contents() -> Vec<(&'static str, &'static str)> {
    SECTIONS
        .iter()
        .filter(|s| !s.is_intro())
        .map(|s| (s.id, s.title))
        .collect()
}

pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Every reference row as one table, so the regular filter applies to it.
pub fn catalog_table() -> ParsedTable {
    ParsedTable {
        header: COLUMNS.iter().map(|c| c.to_string()).collect(),
        records: SECTIONS
            .iter()
            .flat_map(Section::rows)
            .map(Row::to_record)
            .collect(),
    }
}
