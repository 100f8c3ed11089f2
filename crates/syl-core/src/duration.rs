//! Duration parsing.

use crate::errors::PlanError;

/// Parse a duration string into a positive number of days.
///
/// Surrounding whitespace is ignored. The remainder must be a base-10
/// integer greater than zero; trailing text such as `"3 days"` is rejected.
///
/// # Errors
///
/// Returns [`PlanError::InvalidDuration`] for anything that is not a
/// positive integer, including `0` and negative numbers.
pub fn parse_duration(raw: &str) -> Result<u32, PlanError> {
    let invalid = || PlanError::InvalidDuration {
        raw: raw.to_string(),
    };

    let days = raw.trim().parse::<u32>().map_err(|_| invalid())?;
    if days == 0 {
        return Err(invalid());
    }
    Ok(days)
}
