//! Query handlers for the Token Guard contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};
use cw_storage_plus::Bound;

use crate::guard::{evaluate_sell, is_lock_active, max_sell_amount};
use crate::msg::{
    BridgesResponse, CanSellResponse, ChainIdResponse, ConfigResponse, FunctionSelectorResponse,
    IsBridgeResponse, IsFunctionRestrictedResponse, IsRenouncedResponse, IsSafeResponse,
    LockConfigResponse, LockedLiquidityResponse, MaxSellAmountResponse, PendingOwnerResponse,
    ProcessedNonceResponse, RestrictedFunctionsResponse, StatsResponse,
};
use crate::selector::{function_selector, parse_selector, selector_to_hex};
use crate::state::{
    BRIDGES, CHAIN_ID, CONFIG, FUNCTION_RESTRICTIONS, LOCKED_LIQUIDITY, LOCK_CONFIG,
    PENDING_OWNER, PROCESSED_NONCES, SAFE_ACCOUNTS, STATS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let chain_id = CHAIN_ID.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token: config.token,
        lp_token: config.lp_token,
        chain_id,
    })
}

pub fn query_chain_id(deps: Deps) -> StdResult<ChainIdResponse> {
    Ok(ChainIdResponse {
        chain_id: CHAIN_ID.load(deps.storage)?,
    })
}

/// Query bridge statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_outgoing_txs: stats.total_outgoing_txs,
        total_incoming_txs: stats.total_incoming_txs,
        total_bridged_out: stats.total_bridged_out,
        total_bridged_in: stats.total_bridged_in,
    })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<Option<PendingOwnerResponse>> {
    let pending = PENDING_OWNER.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingOwnerResponse {
        new_owner: p.new_owner,
        execute_after: p.execute_after,
    }))
}

// ============================================================================
// Bridge Queries
// ============================================================================

pub fn query_is_bridge(deps: Deps, address: String) -> StdResult<IsBridgeResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let is_bridge = BRIDGES.has(deps.storage, &addr);
    Ok(IsBridgeResponse {
        address: addr,
        is_bridge,
    })
}

/// Query paginated list of bridges.
pub fn query_bridges(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BridgesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let bridges = BRIDGES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BridgesResponse { bridges })
}

pub fn query_processed_nonce(deps: Deps, nonce: u64) -> StdResult<ProcessedNonceResponse> {
    Ok(ProcessedNonceResponse {
        nonce,
        processed: PROCESSED_NONCES.has(deps.storage, nonce),
    })
}

// ============================================================================
// Liquidity Lock Queries
// ============================================================================

pub fn query_lock_config(deps: Deps) -> StdResult<LockConfigResponse> {
    let lock_config = LOCK_CONFIG.load(deps.storage)?;
    Ok(LockConfigResponse {
        lock_duration: lock_config.lock_duration,
        min_liquidity_percentage: lock_config.min_liquidity_percentage,
        max_sell_percentage: lock_config.max_sell_percentage,
        ownership_renounced: lock_config.ownership_renounced,
    })
}

pub fn query_locked_liquidity(deps: Deps, env: Env) -> StdResult<LockedLiquidityResponse> {
    let locked = LOCKED_LIQUIDITY.load(deps.storage)?;
    Ok(LockedLiquidityResponse {
        active: is_lock_active(&locked, env.block.time),
        amount: locked.amount,
        unlock_time: locked.unlock_time,
        ownership_renounced: locked.ownership_renounced,
    })
}

pub fn query_is_renounced(deps: Deps) -> StdResult<IsRenouncedResponse> {
    let lock_config = LOCK_CONFIG.load(deps.storage)?;
    Ok(IsRenouncedResponse {
        renounced: lock_config.ownership_renounced,
    })
}

pub fn query_max_sell_amount(deps: Deps) -> StdResult<MaxSellAmountResponse> {
    let lock_config = LOCK_CONFIG.load(deps.storage)?;
    let total_supply = query_total_supply(deps)?;
    Ok(MaxSellAmountResponse {
        total_supply,
        max_sell_percentage: lock_config.max_sell_percentage,
        max_sell_amount: max_sell_amount(&lock_config, total_supply),
    })
}

/// Rug-pull check. A denied sell is a normal response, not an error.
pub fn query_can_sell(
    deps: Deps,
    env: Env,
    seller: String,
    amount: Uint128,
) -> StdResult<CanSellResponse> {
    // Reserved for per-seller policy; the decision is seller-independent
    deps.api.addr_validate(&seller)?;

    let locked = LOCKED_LIQUIDITY.load(deps.storage)?;
    let lock_config = LOCK_CONFIG.load(deps.storage)?;
    let total_supply = query_total_supply(deps)?;

    let decision = evaluate_sell(&locked, &lock_config, total_supply, env.block.time, amount);
    Ok(CanSellResponse {
        allowed: decision.allowed,
        reason: decision.reason,
    })
}

// ============================================================================
// Restriction Registry Queries
// ============================================================================

pub fn query_is_safe(deps: Deps, owner: String, token_id: u64) -> StdResult<IsSafeResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let is_safe = SAFE_ACCOUNTS
        .may_load(deps.storage, (&owner, token_id))?
        .unwrap_or(false);
    Ok(IsSafeResponse {
        owner,
        token_id,
        is_safe,
    })
}

pub fn query_is_function_restricted(
    deps: Deps,
    owner: String,
    token_id: u64,
    function_sig: Binary,
) -> StdResult<IsFunctionRestrictedResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let selector = parse_selector(function_sig.as_slice()).map_err(StdError::generic_err)?;
    let is_restricted = FUNCTION_RESTRICTIONS
        .may_load(deps.storage, (&owner, token_id, selector.as_slice()))?
        .unwrap_or(false);
    Ok(IsFunctionRestrictedResponse {
        owner,
        token_id,
        function_sig,
        is_restricted,
    })
}

/// Query paginated list of restricted selectors for one account.
pub fn query_restricted_functions(
    deps: Deps,
    owner: String,
    token_id: u64,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<RestrictedFunctionsResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<&[u8]>> = start_after
        .as_ref()
        .map(|sig| Bound::exclusive(sig.as_slice()));

    let function_sigs = FUNCTION_RESTRICTIONS
        .prefix((&owner, token_id))
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(Binary::from))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RestrictedFunctionsResponse {
        owner,
        token_id,
        function_sigs,
    })
}

pub fn query_function_selector(signature: String) -> StdResult<FunctionSelectorResponse> {
    if signature.trim().is_empty() {
        return Err(StdError::generic_err("signature must not be empty"));
    }
    let selector = function_selector(&signature);
    Ok(FunctionSelectorResponse {
        signature,
        selector: Binary::from(selector.to_vec()),
        selector_hex: selector_to_hex(&selector),
    })
}

// ============================================================================
// External Ledger Queries
// ============================================================================

/// Total supply of the guarded token.
fn query_total_supply(deps: Deps) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(config.token, &Cw20QueryMsg::TokenInfo {})?;
    Ok(info.total_supply)
}
