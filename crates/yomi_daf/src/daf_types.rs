//! Types for Daf Yomi results and display configuration.

use std::fmt::{Display, Formatter};

use yomi_time::CivilDate;

use crate::masechta::Masechta;

/// A page reference: tractate and 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Daf {
    /// The tractate.
    pub masechta: Masechta,
    /// Page within the tractate, `1..=masechta.pages()`.
    pub page: u32,
}

impl Daf {
    /// 0-based volume index of the tractate.
    pub fn volume_index(&self) -> usize {
        self.masechta.index()
    }

    /// Label in the configured script, e.g. "Berachos 1" or "ברכות 1".
    pub fn label(&self, config: &DafConfig) -> String {
        let name = match config.script {
            NameScript::Transliterated => self.masechta.name(),
            NameScript::Hebrew => self.masechta.hebrew_name(),
        };
        format!("{name} {}", self.page)
    }
}

impl Display for Daf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.masechta.name(), self.page)
    }
}

/// Position of a date within its study cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOrigin {
    /// 1-based cycle number (cycle 1 starts at the epoch).
    pub cycle: u32,
    /// First day of the cycle.
    pub start: CivilDate,
    /// First day of the following cycle.
    pub next_start: CivilDate,
    /// Reading-days elapsed since `start`, excluded days not counted.
    pub offset: u32,
}

/// One day of a study schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayReading {
    /// The date.
    pub date: CivilDate,
    /// Assigned page, or `None` on a day without a reading.
    pub daf: Option<Daf>,
}

/// Script used for tractate names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameScript {
    /// Latin transliteration ("Berachos").
    #[default]
    Transliterated,
    /// Hebrew ("ברכות").
    Hebrew,
}

/// Display configuration for Daf Yomi results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DafConfig {
    /// Script for tractate names.
    pub script: NameScript,
}

impl DafConfig {
    /// Create a config with the given name script.
    pub fn new(script: NameScript) -> Self {
        Self { script }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_transliterated() {
        let daf = Daf {
            masechta: Masechta::Shabbos,
            page: 19,
        };
        assert_eq!(daf.to_string(), "Shabbos 19");
        assert_eq!(daf.label(&DafConfig::default()), "Shabbos 19");
        assert_eq!(daf.volume_index(), 11);
    }

    #[test]
    fn label_hebrew() {
        let daf = Daf {
            masechta: Masechta::Berachos,
            page: 1,
        };
        assert_eq!(daf.label(&DafConfig::new(NameScript::Hebrew)), "ברכות 1");
    }
}
