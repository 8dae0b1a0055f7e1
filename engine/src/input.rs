use std::fmt;

use thiserror::Error;

/// Largest keyword or page count the calculator accepts.
pub const MAX_COUNT: u32 = 100_000;

/// Calculator text field a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Keywords,
    Pages,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Keywords => "Number of Target Keywords",
            Field::Pages => "Number of Pages to Optimize",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("{field} is required")]
    Empty { field: Field },

    #[error("{field} must be a whole number, got \"{value}\"")]
    NotANumber { field: Field, value: String },

    #[error("{field} can't be negative")]
    Negative { field: Field },

    #[error("{field} can be at most {max}")]
    OutOfRange { field: Field, max: u32 },

    #[error("unknown competition level \"{0}\"")]
    UnknownCompetition(String),
}

impl EstimateError {
    /// Field the error belongs to, if it came from a text field.
    pub fn field(&self) -> Option<Field> {
        match self {
            EstimateError::Empty { field }
            | EstimateError::NotANumber { field, .. }
            | EstimateError::Negative { field }
            | EstimateError::OutOfRange { field, .. } => Some(*field),
            EstimateError::UnknownCompetition(_) => None,
        }
    }
}

/// Parses a numeric text field into a count.
///
/// Whitespace is trimmed and a fractional part is dropped (`"12.7"` is 12),
/// so anything a number input can hold that names a non-negative amount up to
/// [`MAX_COUNT`] is accepted.
pub fn parse_count(field: Field, raw: &str) -> Result<u32, EstimateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::Empty { field });
    }

    let not_a_number = || EstimateError::NotANumber {
        field,
        value: trimmed.to_string(),
    };

    let unsigned = match trimmed.strip_prefix('-') {
        Some(rest) if is_decimal(rest) => return Err(EstimateError::Negative { field }),
        Some(_) => return Err(not_a_number()),
        None => trimmed.strip_prefix('+').unwrap_or(trimmed),
    };
    if !is_decimal(unsigned) {
        return Err(not_a_number());
    }

    let whole = unsigned.split('.').next().unwrap_or_default();
    if whole.is_empty() {
        // ".5" truncates to zero
        return Ok(0);
    }

    // Digits only at this point, so a parse failure can only mean overflow.
    let count = whole
        .parse::<u32>()
        .map_err(|_| EstimateError::OutOfRange { field, max: MAX_COUNT })?;
    if count > MAX_COUNT {
        return Err(EstimateError::OutOfRange { field, max: MAX_COUNT });
    }
    Ok(count)
}

/// `digits[.digits]`, at least one digit overall.
fn is_decimal(s: &str) -> bool {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (s, ""),
    };
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_count(Field::Keywords, "25"), Ok(25));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_count(Field::Pages, "  8 \n"), Ok(8));
    }

    #[test]
    fn accepts_explicit_plus_sign() {
        assert_eq!(parse_count(Field::Pages, "+8"), Ok(8));
    }

    #[test]
    fn truncates_fraction() {
        assert_eq!(parse_count(Field::Keywords, "12.7"), Ok(12));
        assert_eq!(parse_count(Field::Keywords, "3."), Ok(3));
        assert_eq!(parse_count(Field::Keywords, ".9"), Ok(0));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            parse_count(Field::Keywords, "   "),
            Err(EstimateError::Empty { field: Field::Keywords })
        );
    }

    #[test]
    fn words_are_rejected() {
        assert_eq!(
            parse_count(Field::Pages, "ten"),
            Err(EstimateError::NotANumber {
                field: Field::Pages,
                value: "ten".to_string(),
            })
        );
    }

    #[test]
    fn lone_dot_is_rejected() {
        assert!(matches!(
            parse_count(Field::Pages, "."),
            Err(EstimateError::NotANumber { .. })
        ));
    }

    #[test]
    fn exponent_notation_is_rejected() {
        assert!(matches!(
            parse_count(Field::Keywords, "1e3"),
            Err(EstimateError::NotANumber { .. })
        ));
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(
            parse_count(Field::Keywords, "-4"),
            Err(EstimateError::Negative { field: Field::Keywords })
        );
    }

    #[test]
    fn minus_without_number_is_not_a_number() {
        assert!(matches!(
            parse_count(Field::Keywords, "-"),
            Err(EstimateError::NotANumber { .. })
        ));
    }

    #[test]
    fn max_count_is_accepted() {
        assert_eq!(parse_count(Field::Pages, "100000"), Ok(MAX_COUNT));
    }

    #[test]
    fn above_max_count_is_rejected() {
        assert_eq!(
            parse_count(Field::Pages, "100001"),
            Err(EstimateError::OutOfRange {
                field: Field::Pages,
                max: MAX_COUNT,
            })
        );
    }

    #[test]
    fn overflowing_u32_is_out_of_range() {
        assert_eq!(
            parse_count(Field::Keywords, "99999999999999999999"),
            Err(EstimateError::OutOfRange {
                field: Field::Keywords,
                max: MAX_COUNT,
            })
        );
    }

    #[test]
    fn messages_name_the_field() {
        let err = parse_count(Field::Keywords, "").unwrap_err();

        assert_eq!(err.to_string(), "Number of Target Keywords is required");
        assert_eq!(err.field(), Some(Field::Keywords));
    }

    #[test]
    fn range_message_mentions_limit() {
        let err = parse_count(Field::Pages, "200000").unwrap_err();

        assert_eq!(err.to_string(), "Number of Pages to Optimize can be at most 100000");
    }
}
