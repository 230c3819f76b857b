//! Message types for the Token Guard contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Rug-pull thresholds as supplied by the owner
#[cw_serde]
pub struct LockConfigMsg {
    /// Minimum lock duration in seconds (> 0)
    pub lock_duration: u64,
    /// Minimum locked liquidity as a share of total supply (1-100)
    pub min_liquidity_percentage: u8,
    /// Maximum sell while locked as a share of total supply (1-100)
    pub max_sell_percentage: u8,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for contract management
    pub owner: String,
    /// Guarded CW20 token; this contract must be its minter
    pub token: String,
    /// CW20 liquidity-provider token to lock
    pub lp_token: String,
    /// This deployment's chain ID (non-zero, immutable)
    pub chain_id: u64,
    /// Initial bridge addresses allowed to settle ingress mints
    #[serde(default)]
    pub bridges: Vec<String>,
    /// Rug-pull thresholds (defaults: 365 days, 50%, 1%)
    pub lock_config: Option<LockConfigMsg>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Bridge (Egress / Ingress)
    // ========================================================================
    /// Burn tokens here so they can be minted on `target_chain_id`
    ///
    /// Authorization: Any holder (must have granted this contract an allowance)
    BridgeTokens {
        /// Recipient on the target chain
        to: String,
        amount: Uint128,
        nonce: u64,
        target_chain_id: u64,
    },

    /// Egress via CW20 `Send` (no allowance needed)
    /// Implements CW20 Receiver interface
    Receive(cw20::Cw20ReceiveMsg),

    /// Mint tokens bridged in from `from_chain_id`
    ///
    /// Authorization: Registered bridge only
    MintBridgedTokens {
        to: String,
        amount: Uint128,
        nonce: u64,
        from_chain_id: u64,
    },

    // ========================================================================
    // Bridge Registry
    // ========================================================================
    /// Authorization: Owner only
    AddBridge { address: String },

    /// Authorization: Owner only
    RemoveBridge { address: String },

    // ========================================================================
    // Liquidity Lock
    // ========================================================================
    /// Pull LP tokens into custody and (re)set the unlock time.
    /// Overwrites any previous lock record.
    ///
    /// Authorization: Owner only
    LockLiquidity { amount: Uint128, duration: u64 },

    /// Replace the rug-pull thresholds
    ///
    /// Authorization: Owner only, before renouncement
    UpdateLockConfig(LockConfigMsg),

    /// Freeze the lock configuration and give up ownership for good
    ///
    /// Authorization: Owner only
    RenounceOwnership {},

    // ========================================================================
    // Restriction Registry
    // ========================================================================
    /// Mark the caller's `token_id` account as safe (or not)
    SetSafe { token_id: u64, safe: bool },

    /// Restrict (or release) a function for the caller's `token_id` account
    SetFunctionRestriction {
        token_id: u64,
        /// 4-byte function selector
        function_sig: Binary,
        restricted: bool,
    },

    // ========================================================================
    // Ownership Transfer
    // ========================================================================
    /// Propose a new owner (starts timelock)
    ProposeOwner { new_owner: String },

    /// Accept pending ownership (after timelock)
    AcceptOwner {},

    /// Cancel pending owner proposal
    CancelOwnerProposal {},
}

/// CW20 receive hook payload
#[cw_serde]
pub enum ReceiveMsg {
    /// Burn the received tokens for egress to `target_chain_id`
    BridgeTokens {
        to: String,
        nonce: u64,
        target_chain_id: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Core Queries
    // ========================================================================
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ChainIdResponse)]
    ChainId {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(Option<PendingOwnerResponse>)]
    PendingOwner {},

    // ========================================================================
    // Bridge Queries
    // ========================================================================
    #[returns(IsBridgeResponse)]
    IsBridge { address: String },

    /// List registered bridges (paginated)
    #[returns(BridgesResponse)]
    Bridges {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(ProcessedNonceResponse)]
    ProcessedNonce { nonce: u64 },

    // ========================================================================
    // Liquidity Lock Queries
    // ========================================================================
    #[returns(LockConfigResponse)]
    LockConfig {},

    #[returns(LockedLiquidityResponse)]
    LockedLiquidity {},

    #[returns(IsRenouncedResponse)]
    IsRenounced {},

    /// Current maximum sell amount derived from total supply
    #[returns(MaxSellAmountResponse)]
    MaxSellAmount {},

    /// May `seller` sell `amount` right now
    #[returns(CanSellResponse)]
    CanSell { seller: String, amount: Uint128 },

    // ========================================================================
    // Restriction Registry Queries
    // ========================================================================
    #[returns(IsSafeResponse)]
    IsSafe { owner: String, token_id: u64 },

    #[returns(IsFunctionRestrictedResponse)]
    IsFunctionRestricted {
        owner: String,
        token_id: u64,
        function_sig: Binary,
    },

    /// List selectors restricted for one account (paginated)
    #[returns(RestrictedFunctionsResponse)]
    RestrictedFunctions {
        owner: String,
        token_id: u64,
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    /// Compute the 4-byte selector of a function signature
    #[returns(FunctionSelectorResponse)]
    FunctionSelector { signature: String },
}

// ============================================================================
// Response Types - Core
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Option<Addr>,
    pub token: Addr,
    pub lp_token: Addr,
    pub chain_id: u64,
}

#[cw_serde]
pub struct ChainIdResponse {
    pub chain_id: u64,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_outgoing_txs: u64,
    pub total_incoming_txs: u64,
    pub total_bridged_out: Uint128,
    pub total_bridged_in: Uint128,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub new_owner: Addr,
    pub execute_after: Timestamp,
}

// ============================================================================
// Response Types - Bridge
// ============================================================================

#[cw_serde]
pub struct IsBridgeResponse {
    pub address: Addr,
    pub is_bridge: bool,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<Addr>,
}

#[cw_serde]
pub struct ProcessedNonceResponse {
    pub nonce: u64,
    pub processed: bool,
}

// ============================================================================
// Response Types - Liquidity Lock
// ============================================================================

#[cw_serde]
pub struct LockConfigResponse {
    pub lock_duration: u64,
    pub min_liquidity_percentage: u8,
    pub max_sell_percentage: u8,
    pub ownership_renounced: bool,
}

#[cw_serde]
pub struct LockedLiquidityResponse {
    pub amount: Uint128,
    pub unlock_time: Timestamp,
    pub ownership_renounced: bool,
    /// Whether `unlock_time` is still in the future
    pub active: bool,
}

#[cw_serde]
pub struct IsRenouncedResponse {
    pub renounced: bool,
}

#[cw_serde]
pub struct MaxSellAmountResponse {
    pub total_supply: Uint128,
    pub max_sell_percentage: u8,
    pub max_sell_amount: Uint128,
}

#[cw_serde]
pub struct CanSellResponse {
    pub allowed: bool,
    /// Empty when allowed
    pub reason: String,
}

// ============================================================================
// Response Types - Restriction Registry
// ============================================================================

#[cw_serde]
pub struct IsSafeResponse {
    pub owner: Addr,
    pub token_id: u64,
    pub is_safe: bool,
}

#[cw_serde]
pub struct IsFunctionRestrictedResponse {
    pub owner: Addr,
    pub token_id: u64,
    pub function_sig: Binary,
    pub is_restricted: bool,
}

#[cw_serde]
pub struct RestrictedFunctionsResponse {
    pub owner: Addr,
    pub token_id: u64,
    pub function_sigs: Vec<Binary>,
}

#[cw_serde]
pub struct FunctionSelectorResponse {
    pub signature: String,
    pub selector: Binary,
    /// `0x`-prefixed hex form of `selector`
    pub selector_hex: String,
}
