//! Whole-number percentage helpers.

use cosmwasm_std::{StdError, StdResult, Uint128};

/// Denominator for whole percentages (100 = 100%)
pub const PERCENT_DENOMINATOR: u128 = 100;

/// `total * percentage / 100`, truncating.
///
/// Goes through a 256-bit intermediate so large supplies cannot overflow.
pub fn percent_of(total: Uint128, percentage: u8) -> Uint128 {
    total.multiply_ratio(percentage as u128, PERCENT_DENOMINATOR)
}

/// Percentages must lie in `[1, 100]`.
pub fn validate_percentage(name: &str, percentage: u8) -> StdResult<()> {
    if percentage == 0 || percentage as u128 > PERCENT_DENOMINATOR {
        return Err(StdError::generic_err(format!(
            "{} must be between 1 and 100, got {}",
            name, percentage
        )));
    }
    Ok(())
}
