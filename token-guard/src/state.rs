//! State definitions for the Token Guard contract
//!
//! This module defines all storage structures and state maps for the bridge
//! nonce ledger, the liquidity lock and the restriction registry.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::validate_percentage;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner for contract management (None once ownership is renounced)
    pub owner: Option<Addr>,
    /// Guarded CW20 token (this contract is its minter)
    pub token: Addr,
    /// CW20 liquidity-provider token held in custody by the lock
    pub lp_token: Addr,
}

/// Pending owner change proposal
#[cw_serde]
pub struct PendingOwner {
    /// Proposed new owner address
    pub new_owner: Addr,
    /// Block time when the change can be accepted
    pub execute_after: Timestamp,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Number of egress transfers (tokens burned here)
    pub total_outgoing_txs: u64,
    /// Number of settled ingress transfers (tokens minted here)
    pub total_incoming_txs: u64,
    /// Total amount burned for egress
    pub total_bridged_out: Uint128,
    /// Total amount minted on ingress
    pub total_bridged_in: Uint128,
}

// ============================================================================
// Liquidity Lock Structures
// ============================================================================

/// Tunable rug-pull thresholds
#[cw_serde]
pub struct LockConfig {
    /// Minimum lock duration in seconds
    pub lock_duration: u64,
    /// Locked LP amount must stay at or above this share of total supply
    pub min_liquidity_percentage: u8,
    /// Largest sell allowed while the lock is active, as a share of total supply
    pub max_sell_percentage: u8,
    /// Once set, the record is frozen forever
    pub ownership_renounced: bool,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            lock_duration: DEFAULT_LOCK_DURATION,
            min_liquidity_percentage: DEFAULT_MIN_LIQUIDITY_PERCENTAGE,
            max_sell_percentage: DEFAULT_MAX_SELL_PERCENTAGE,
            ownership_renounced: false,
        }
    }
}

impl LockConfig {
    /// Check that all bounds hold simultaneously
    pub fn validate(&self) -> StdResult<()> {
        if self.lock_duration == 0 {
            return Err(cosmwasm_std::StdError::generic_err(
                "lock_duration must be greater than zero",
            ));
        }
        validate_percentage("min_liquidity_percentage", self.min_liquidity_percentage)?;
        validate_percentage("max_sell_percentage", self.max_sell_percentage)?;
        Ok(())
    }
}

/// LP tokens held in custody
#[cw_serde]
pub struct LockedLiquidity {
    /// Custodied LP amount, as set by the latest lock
    pub amount: Uint128,
    /// Lock expiry
    pub unlock_time: Timestamp,
    /// Mirrors the config flag once ownership is renounced
    pub ownership_renounced: bool,
}

impl Default for LockedLiquidity {
    fn default() -> Self {
        Self {
            amount: Uint128::zero(),
            unlock_time: Timestamp::from_seconds(0),
            ownership_renounced: false,
        }
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-guard";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for owner change timelock
pub const OWNER_TIMELOCK_DURATION: u64 = 604_800;

/// Default minimum lock duration (365 days)
pub const DEFAULT_LOCK_DURATION: u64 = 31_536_000;

/// Default minimum locked liquidity (50% of supply)
pub const DEFAULT_MIN_LIQUIDITY_PERCENTAGE: u8 = 50;

/// Default maximum sell while locked (1% of supply)
pub const DEFAULT_MAX_SELL_PERCENTAGE: u8 = 1;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending owner proposal (if any)
pub const PENDING_OWNER: Item<PendingOwner> = Item::new("pending_owner");

/// This deployment's chain ID, written once at instantiate
pub const CHAIN_ID: Item<u64> = Item::new("chain_id");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

// ============================================================================
// Bridge State
// ============================================================================

/// Addresses allowed to settle ingress mints
/// Key: bridge address, Value: always true (absence means not authorized)
pub const BRIDGES: Map<&Addr, bool> = Map::new("bridges");

/// Settled ingress nonces
/// Key: nonce, Value: true once settled (never reset)
pub const PROCESSED_NONCES: Map<u64, bool> = Map::new("processed_nonces");

// ============================================================================
// Liquidity Lock State
// ============================================================================

/// Rug-pull thresholds
pub const LOCK_CONFIG: Item<LockConfig> = Item::new("lock_config");

/// Custodied LP tokens and their unlock time
pub const LOCKED_LIQUIDITY: Item<LockedLiquidity> = Item::new("locked_liquidity");

// ============================================================================
// Restriction Registry State
// ============================================================================

/// Accounts marked safe
/// Key: (owner, token_id), Value: true (cleared flags are removed)
pub const SAFE_ACCOUNTS: Map<(&Addr, u64), bool> = Map::new("safe_accounts");

/// Restricted functions per account
/// Key: (owner, token_id, 4-byte selector), Value: true (cleared flags are removed)
pub const FUNCTION_RESTRICTIONS: Map<(&Addr, u64, &[u8]), bool> =
    Map::new("function_restrictions");
