//! Token Guard Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `guard` - Pure rug-pull decision

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult, SubMsgResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_add_bridge, execute_bridge_tokens,
    execute_cancel_owner_proposal, execute_lock_liquidity, execute_mint_bridged_tokens,
    execute_propose_owner, execute_receive, execute_remove_bridge, execute_renounce_ownership,
    execute_set_function_restriction, execute_set_safe, execute_update_lock_config,
    lock_config_from_msg, REPLY_BURN, REPLY_LP_TRANSFER, REPLY_MINT,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_bridges, query_can_sell, query_chain_id, query_config, query_function_selector,
    query_is_bridge, query_is_function_restricted, query_is_renounced, query_is_safe,
    query_lock_config, query_locked_liquidity, query_max_sell_amount, query_pending_owner,
    query_processed_nonce, query_restricted_functions, query_stats,
};
use crate::state::{
    Config, LockConfig, LockedLiquidity, Stats, BRIDGES, CHAIN_ID, CONFIG, CONTRACT_NAME,
    CONTRACT_VERSION, LOCKED_LIQUIDITY, LOCK_CONFIG, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = validate_addr(&deps, "owner", &msg.owner)?;
    let token = validate_addr(&deps, "token", &msg.token)?;
    let lp_token = validate_addr(&deps, "lp_token", &msg.lp_token)?;

    if msg.chain_id == 0 {
        return Err(ContractError::invalid("chain_id must be non-zero"));
    }
    CHAIN_ID.save(deps.storage, &msg.chain_id)?;

    let config = Config {
        owner: Some(owner.clone()),
        token,
        lp_token,
    };
    CONFIG.save(deps.storage, &config)?;

    let lock_config = match msg.lock_config {
        Some(lock_msg) => lock_config_from_msg(lock_msg)?,
        None => LockConfig::default(),
    };
    LOCK_CONFIG.save(deps.storage, &lock_config)?;
    LOCKED_LIQUIDITY.save(deps.storage, &LockedLiquidity::default())?;

    for bridge in &msg.bridges {
        let bridge = validate_addr(&deps, "bridge", bridge)?;
        BRIDGES.save(deps.storage, &bridge, &true)?;
    }

    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("chain_id", msg.chain_id.to_string())
        .add_attribute("bridge_count", msg.bridges.len().to_string())
        .add_attribute("lock_duration", lock_config.lock_duration.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Bridge
        ExecuteMsg::BridgeTokens {
            to,
            amount,
            nonce,
            target_chain_id,
        } => execute_bridge_tokens(deps, info, to, amount, nonce, target_chain_id),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::MintBridgedTokens {
            to,
            amount,
            nonce,
            from_chain_id,
        } => execute_mint_bridged_tokens(deps, info, to, amount, nonce, from_chain_id),
        ExecuteMsg::AddBridge { address } => execute_add_bridge(deps, info, address),
        ExecuteMsg::RemoveBridge { address } => execute_remove_bridge(deps, info, address),

        // Liquidity lock
        ExecuteMsg::LockLiquidity { amount, duration } => {
            execute_lock_liquidity(deps, env, info, amount, duration)
        }
        ExecuteMsg::UpdateLockConfig(lock_msg) => {
            execute_update_lock_config(deps, info, lock_msg)
        }
        ExecuteMsg::RenounceOwnership {} => execute_renounce_ownership(deps, info),

        // Restriction registry
        ExecuteMsg::SetSafe { token_id, safe } => execute_set_safe(deps, info, token_id, safe),
        ExecuteMsg::SetFunctionRestriction {
            token_id,
            function_sig,
            restricted,
        } => execute_set_function_restriction(deps, info, token_id, function_sig, restricted),

        // Ownership transfer
        ExecuteMsg::ProposeOwner { new_owner } => {
            execute_propose_owner(deps, env, info, new_owner)
        }
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, env, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, info),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// External ledger calls are dispatched with `reply_on_error`. Turning the
/// failure into `TransferFailed` reverts the whole transaction, including
/// the nonce or custody record written before dispatch.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let call = match msg.id {
        REPLY_LP_TRANSFER => "lp token transfer",
        REPLY_BURN => "burn",
        REPLY_MINT => "mint",
        id => {
            return Err(ContractError::Std(StdError::generic_err(format!(
                "unknown reply id: {}",
                id
            ))))
        }
    };

    match msg.result {
        SubMsgResult::Err(err) => Err(ContractError::TransferFailed {
            reason: format!("{}: {}", call, err),
        }),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ChainId {} => to_json_binary(&query_chain_id(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),

        // Bridge queries
        QueryMsg::IsBridge { address } => to_json_binary(&query_is_bridge(deps, address)?),
        QueryMsg::Bridges { start_after, limit } => {
            to_json_binary(&query_bridges(deps, start_after, limit)?)
        }
        QueryMsg::ProcessedNonce { nonce } => {
            to_json_binary(&query_processed_nonce(deps, nonce)?)
        }

        // Liquidity lock queries
        QueryMsg::LockConfig {} => to_json_binary(&query_lock_config(deps)?),
        QueryMsg::LockedLiquidity {} => to_json_binary(&query_locked_liquidity(deps, env)?),
        QueryMsg::IsRenounced {} => to_json_binary(&query_is_renounced(deps)?),
        QueryMsg::MaxSellAmount {} => to_json_binary(&query_max_sell_amount(deps)?),
        QueryMsg::CanSell { seller, amount } => {
            to_json_binary(&query_can_sell(deps, env, seller, amount)?)
        }

        // Restriction registry queries
        QueryMsg::IsSafe { owner, token_id } => {
            to_json_binary(&query_is_safe(deps, owner, token_id)?)
        }
        QueryMsg::IsFunctionRestricted {
            owner,
            token_id,
            function_sig,
        } => to_json_binary(&query_is_function_restricted(
            deps,
            owner,
            token_id,
            function_sig,
        )?),
        QueryMsg::RestrictedFunctions {
            owner,
            token_id,
            start_after,
            limit,
        } => to_json_binary(&query_restricted_functions(
            deps,
            owner,
            token_id,
            start_after,
            limit,
        )?),
        QueryMsg::FunctionSelector { signature } => {
            to_json_binary(&query_function_selector(signature)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn validate_addr(deps: &DepsMut, field: &str, addr: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(addr)
        .map_err(|e| ContractError::invalid(format!("{}: {}", field, e)))
}
