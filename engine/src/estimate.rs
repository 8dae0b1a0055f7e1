//! Monthly SEO investment estimate.
//!
//! The figure is `1000 * keyword_multiplier * page_multiplier * competition`,
//! where each multiplier is floored at 1.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::input::EstimateError;

/// Dollars per month for the smallest engagement.
pub const BASE_RATE: f64 = 1000.0;
/// Keywords covered by one unit of the keyword multiplier.
pub const KEYWORDS_PER_UNIT: f64 = 10.0;
/// Pages covered by one unit of the page multiplier.
pub const PAGES_PER_UNIT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompetitionLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl CompetitionLevel {
    pub const ALL: [CompetitionLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn factor(&self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.5,
            Self::High => 2.0,
        }
    }

    /// Value used by the `<option>` elements.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Competition",
            Self::Medium => "Medium Competition",
            Self::High => "High Competition",
        }
    }
}

impl FromStr for CompetitionLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(EstimateError::UnknownCompetition(other.to_string())),
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateInput {
    pub keyword_count: u32,
    pub page_count: u32,
    pub competition: CompetitionLevel,
}

/// Estimated monthly investment in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Estimate(u64);

impl Estimate {
    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

fn multiplier(count: u32, per_unit: f64) -> f64 {
    (f64::from(count) / per_unit).max(1.0)
}

/// Computes the estimate. Pure: identical inputs always give identical output.
pub fn estimate(input: &EstimateInput) -> Estimate {
    let keyword_multiplier = multiplier(input.keyword_count, KEYWORDS_PER_UNIT);
    let page_multiplier = multiplier(input.page_count, PAGES_PER_UNIT);
    let competition_factor = input.competition.factor();

    debug!(
        "keyword multiplier {}, page multiplier {}, competition {} ({})",
        keyword_multiplier, page_multiplier, input.competition, competition_factor
    );

    let cost = BASE_RATE * keyword_multiplier * page_multiplier * competition_factor;
    // Inputs are bounded by MAX_COUNT, so the product stays far below u64::MAX.
    Estimate(cost.round() as u64)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn input(keyword_count: u32, page_count: u32, competition: CompetitionLevel) -> EstimateInput {
        EstimateInput {
            keyword_count,
            page_count,
            competition,
        }
    }

    #[test]
    fn baseline_is_base_rate() {
        let result = estimate(&input(10, 5, CompetitionLevel::Low));

        assert_eq!(result.amount(), 1000);
    }

    #[test]
    fn medium_competition_scales_by_one_and_a_half() {
        let result = estimate(&input(20, 10, CompetitionLevel::Medium));

        assert_eq!(result.amount(), 6000);
    }

    #[test]
    fn small_counts_floor_to_one() {
        let result = estimate(&input(5, 2, CompetitionLevel::High));

        assert_eq!(result.amount(), 2000);
    }

    #[test]
    fn zero_counts_floor_to_one() {
        let result = estimate(&input(0, 0, CompetitionLevel::Low));

        assert_eq!(result.amount(), 1000);
    }

    #[test]
    fn fractional_multipliers_are_kept_before_rounding() {
        // 1000 * 1.5 * 1.2 * 1.5 = 2700
        let result = estimate(&input(15, 6, CompetitionLevel::Medium));

        assert_eq!(result.amount(), 2700);
    }

    #[test]
    fn result_is_rounded_to_whole_dollars() {
        let result = estimate(&input(13, 7, CompetitionLevel::Medium));

        assert_eq!(result.amount(), 2730);
    }

    #[test]
    fn only_one_floored_multiplier() {
        // keyword multiplier floors, page multiplier is 4
        let result = estimate(&input(3, 20, CompetitionLevel::High));

        assert_eq!(result.amount(), 8000);
    }

    #[test]
    fn same_input_gives_same_estimate() {
        let i = input(42, 17, CompetitionLevel::High);

        assert_eq!(estimate(&i), estimate(&i));
    }

    #[test]
    fn displays_as_plain_dollars() {
        let result = estimate(&input(20, 10, CompetitionLevel::Medium));

        assert_eq!(result.to_string(), "$6000");
    }

    #[test]
    fn competition_factors() {
        let factors: Vec<f64> = CompetitionLevel::ALL.iter().map(|c| c.factor()).collect();

        assert_eq!(factors, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn competition_defaults_to_medium() {
        assert_eq!(CompetitionLevel::default(), CompetitionLevel::Medium);
    }

    #[test]
    fn competition_parses_option_values() {
        for level in CompetitionLevel::ALL {
            assert_eq!(level.as_str().parse::<CompetitionLevel>().unwrap(), level);
        }
    }

    #[test]
    fn competition_rejects_unknown_value() {
        let err = "extreme".parse::<CompetitionLevel>().unwrap_err();

        assert_eq!(err, EstimateError::UnknownCompetition("extreme".to_string()));
    }
}
