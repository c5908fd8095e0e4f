use serde::{Serialize, Serializer};

/// Substituted for the grid when the result field is invalid, so the
/// indicator row always renders. Display only; never written back into
/// the field.
pub const DEFAULT_RESULT: &str = "000000000000";

/// A result needs at least five two-digit groups.
pub const MIN_RESULT_DIGITS: usize = 10;

/// Field-scoped validation failure. These are messages shown next to
/// the input, not errors that abort anything; invalid fields still
/// render the grid (from [`DEFAULT_RESULT`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Invalid,
    BetTooLong,
}

impl FieldError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "Required field",
            Self::Invalid => "Invalid value",
            Self::BetTooLong => "Bet longer than informed result!",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// JSON output carries the user-facing message, not the variant name.
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// A result is valid when it is all ASCII digits, of even length, and
/// at least [`MIN_RESULT_DIGITS`] long (five or more two-digit groups).
pub fn validate_result(s: &str) -> Result<(), FieldError> {
    if s.is_empty() {
        return Err(FieldError::Required);
    }
    let all_digits = s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits || s.len() % 2 != 0 || s.len() < MIN_RESULT_DIGITS {
        return Err(FieldError::Invalid);
    }
    Ok(())
}

/// A bet is valid when non-empty and no longer than the informed result.
/// The length rule is checked against whatever is currently in the result
/// field, valid or not. Bet content is not digit-checked; only the
/// length rule applies.
pub fn validate_bet(bet: &str, result_len: usize) -> Result<(), FieldError> {
    if bet.is_empty() {
        return Err(FieldError::Required);
    }
    if bet.chars().count() > result_len {
        return Err(FieldError::BetTooLong);
    }
    Ok(())
}
