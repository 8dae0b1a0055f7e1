use log::warn;

use crate::estimate::{estimate, CompetitionLevel, Estimate, EstimateInput};
use crate::input::{parse_count, EstimateError, Field};

/// Raw calculator fields as the visitor typed them.
///
/// Edits only store text; nothing is computed until [`EstimateForm::submit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateForm {
    pub keywords: String,
    pub pages: String,
    pub competition: CompetitionLevel,
}

impl EstimateForm {
    pub fn set_keywords(&mut self, value: impl Into<String>) {
        self.keywords = value.into();
    }

    pub fn set_pages(&mut self, value: impl Into<String>) {
        self.pages = value.into();
    }

    /// Applies a `<select>` value. Unknown values leave the level unchanged.
    pub fn set_competition_str(&mut self, value: &str) {
        match value.parse() {
            Ok(level) => self.competition = level,
            Err(e) => warn!("Ignoring competition selection: {}", e),
        }
    }

    pub fn input(&self) -> Result<EstimateInput, EstimateError> {
        Ok(EstimateInput {
            keyword_count: parse_count(Field::Keywords, &self.keywords)?,
            page_count: parse_count(Field::Pages, &self.pages)?,
            competition: self.competition,
        })
    }

    pub fn submit(&self) -> Result<Estimate, EstimateError> {
        let input = self.input()?;
        Ok(estimate(&input))
    }
}
