//! Rug-Pull Guard
//!
//! Pure decision over the lock record, the thresholds and the guarded token's
//! total supply. No storage access and no side effects: the query layer loads
//! state and the current supply, this module only decides.
//!
//! ## Decision Table
//!
//! | Condition                                  | Result                                   |
//! |--------------------------------------------|------------------------------------------|
//! | locked amount is zero                      | deny "No liquidity locked"               |
//! | lock active, amount > max sell             | deny "Sell amount exceeds maximum"       |
//! | lock active, locked < min liquidity        | deny "Insufficient liquidity locked"     |
//! | lock active, otherwise                     | allow                                    |
//! | lock expired                               | allow (no cap)                           |

use cosmwasm_std::{Timestamp, Uint128};

use crate::state::{LockConfig, LockedLiquidity};
use common::percent_of;

pub const REASON_NO_LIQUIDITY: &str = "No liquidity locked";
pub const REASON_EXCEEDS_MAX_SELL: &str = "Sell amount exceeds maximum";
pub const REASON_INSUFFICIENT_LIQUIDITY: &str = "Insufficient liquidity locked";

/// Outcome of a sell check. A denial carries the reason instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellDecision {
    pub allowed: bool,
    pub reason: String,
}

impl SellDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: String::new(),
        }
    }

    fn deny(reason: &str) -> Self {
        Self {
            allowed: false,
            reason: reason.to_string(),
        }
    }
}

/// Largest sell permitted while the lock is active.
pub fn max_sell_amount(config: &LockConfig, total_supply: Uint128) -> Uint128 {
    percent_of(total_supply, config.max_sell_percentage)
}

/// Smallest locked amount that keeps sells open while the lock is active.
pub fn min_liquidity_amount(config: &LockConfig, total_supply: Uint128) -> Uint128 {
    percent_of(total_supply, config.min_liquidity_percentage)
}

pub fn is_lock_active(locked: &LockedLiquidity, now: Timestamp) -> bool {
    now < locked.unlock_time
}

/// Decide whether a sell of `amount` may proceed.
pub fn evaluate_sell(
    locked: &LockedLiquidity,
    config: &LockConfig,
    total_supply: Uint128,
    now: Timestamp,
    amount: Uint128,
) -> SellDecision {
    if locked.amount.is_zero() {
        return SellDecision::deny(REASON_NO_LIQUIDITY);
    }

    if !is_lock_active(locked, now) {
        return SellDecision::allow();
    }

    if amount > max_sell_amount(config, total_supply) {
        return SellDecision::deny(REASON_EXCEEDS_MAX_SELL);
    }

    if locked.amount < min_liquidity_amount(config, total_supply) {
        return SellDecision::deny(REASON_INSUFFICIENT_LIQUIDITY);
    }

    SellDecision::allow()
}
