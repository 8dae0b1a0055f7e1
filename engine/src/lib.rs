//! Estimate engine and static content for the SEO cost calculator page.
//!
//! The frontend crate owns rendering; everything here is plain Rust so it can
//! be tested without a browser.

pub mod content;
pub mod estimate;
pub mod form;
pub mod input;

pub use estimate::{estimate, CompetitionLevel, Estimate, EstimateInput};
pub use form::EstimateForm;
pub use input::{parse_count, EstimateError, Field, MAX_COUNT};
