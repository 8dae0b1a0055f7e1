use pretty_assertions::assert_eq;
use seo_engine::{estimate, CompetitionLevel, EstimateError, EstimateForm, EstimateInput, Field};

fn submit(keywords: &str, pages: &str, competition: &str) -> Result<u64, EstimateError> {
    let mut form = EstimateForm::default();
    form.set_keywords(keywords);
    form.set_pages(pages);
    form.set_competition_str(competition);
    form.submit().map(|e| e.amount())
}

#[test]
fn ten_keywords_five_pages_low() {
    assert_eq!(submit("10", "5", "low"), Ok(1000));
}

#[test]
fn twenty_keywords_ten_pages_medium() {
    assert_eq!(submit("20", "10", "medium"), Ok(6000));
}

#[test]
fn small_site_high_competition_floors_multipliers() {
    assert_eq!(submit("5", "2", "high"), Ok(2000));
}

#[test]
fn empty_keywords_are_rejected_not_rendered() {
    assert_eq!(
        submit("", "5", "medium"),
        Err(EstimateError::Empty { field: Field::Keywords })
    );
}

#[test]
fn low_competition_above_floors_is_linear_in_both_counts() {
    for keyword_count in [10, 11, 25, 40, 137] {
        for page_count in [5, 6, 12, 50] {
            let input = EstimateInput {
                keyword_count,
                page_count,
                competition: CompetitionLevel::Low,
            };
            let expected =
                (1000.0 * (keyword_count as f64 / 10.0) * (page_count as f64 / 5.0)).round() as u64;

            assert_eq!(estimate(&input).amount(), expected);
        }
    }
}

#[test]
fn repeated_submission_is_idempotent() {
    let mut form = EstimateForm::default();
    form.set_keywords("33");
    form.set_pages("9");
    form.set_competition_str("high");

    let first = form.submit();
    let second = form.submit();

    assert_eq!(first, second);
    assert_eq!(form.keywords, "33");
}

#[test]
fn default_competition_is_used_when_select_untouched() {
    let mut form = EstimateForm::default();
    form.set_keywords("10");
    form.set_pages("5");

    assert_eq!(form.submit().map(|e| e.to_string()), Ok("$1500".to_string()));
}
