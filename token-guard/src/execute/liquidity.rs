//! Liquidity lock handlers.
//!
//! This module handles:
//! - Locking LP tokens into custody
//! - Rug-pull threshold updates
//! - Ownership renouncement (freezes the lock for good)

use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Response, SubMsg, Timestamp, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use super::admin::assert_owner;
use super::REPLY_LP_TRANSFER;
use crate::error::ContractError;
use crate::msg::LockConfigMsg;
use crate::state::{
    LockConfig, LockedLiquidity, CONFIG, LOCKED_LIQUIDITY, LOCK_CONFIG, PENDING_OWNER,
};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

// ============================================================================
// Lock
// ============================================================================

/// Pull `amount` LP tokens from the owner and lock them for `duration` seconds.
///
/// The record is overwritten, not accumulated: LP tokens custodied by an
/// earlier lock stay in this contract but are no longer tracked. The event
/// reports `previous_amount` so the overwrite is visible.
pub fn execute_lock_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    duration: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let lock_config = LOCK_CONFIG.load(deps.storage)?;
    if lock_config.ownership_renounced {
        return Err(ContractError::OwnershipRenounced);
    }

    if amount.is_zero() {
        return Err(ContractError::invalid("amount must be greater than zero"));
    }
    if duration < lock_config.lock_duration {
        return Err(ContractError::invalid(format!(
            "duration {} is below the minimum lock duration {}",
            duration, lock_config.lock_duration
        )));
    }

    let unlock_time = unlock_time_after(env.block.time, duration)
        .ok_or_else(|| ContractError::invalid("duration overflows the unlock time"))?;

    let previous = LOCKED_LIQUIDITY.load(deps.storage)?;
    let locked = LockedLiquidity {
        amount,
        unlock_time,
        ownership_renounced: previous.ownership_renounced,
    };
    // Custody record is written before the LP transfer is dispatched
    LOCKED_LIQUIDITY.save(deps.storage, &locked)?;

    let pull = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: config.lp_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount,
            })?,
            funds: vec![],
        },
        REPLY_LP_TRANSFER,
    );

    Ok(Response::new()
        .add_submessage(pull)
        .add_attribute("method", "lock_liquidity")
        .add_event(
            Event::new("liquidity_locked")
                .add_attribute("owner", info.sender)
                .add_attribute("amount", amount.to_string())
                .add_attribute("duration", duration.to_string())
                .add_attribute("unlock_time", unlock_time.seconds().to_string())
                .add_attribute("previous_amount", previous.amount.to_string()),
        ))
}

// ============================================================================
// Lock Config
// ============================================================================

/// Replace the rug-pull thresholds wholesale.
pub fn execute_update_lock_config(
    deps: DepsMut,
    info: MessageInfo,
    msg: LockConfigMsg,
) -> Result<Response, ContractError> {
    let current = LOCK_CONFIG.load(deps.storage)?;
    if current.ownership_renounced {
        return Err(ContractError::OwnershipRenounced);
    }

    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let lock_config = lock_config_from_msg(msg)?;
    LOCK_CONFIG.save(deps.storage, &lock_config)?;

    Ok(Response::new()
        .add_attribute("method", "update_lock_config")
        .add_event(
            Event::new("lock_config_updated")
                .add_attribute("lock_duration", lock_config.lock_duration.to_string())
                .add_attribute(
                    "min_liquidity_percentage",
                    lock_config.min_liquidity_percentage.to_string(),
                )
                .add_attribute(
                    "max_sell_percentage",
                    lock_config.max_sell_percentage.to_string(),
                ),
        ))
}

// ============================================================================
// Renounce
// ============================================================================

/// Freeze the lock and drop the owner. Terminal.
pub fn execute_renounce_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let mut lock_config = LOCK_CONFIG.load(deps.storage)?;
    lock_config.ownership_renounced = true;
    LOCK_CONFIG.save(deps.storage, &lock_config)?;

    let mut locked = LOCKED_LIQUIDITY.load(deps.storage)?;
    locked.ownership_renounced = true;
    LOCKED_LIQUIDITY.save(deps.storage, &locked)?;

    let renounced_event = Event::new("ownership_renounced")
        .add_attribute("previous_owner", info.sender.as_str())
        .add_attribute("locked_amount", locked.amount.to_string())
        .add_attribute("unlock_time", locked.unlock_time.seconds().to_string());

    config.owner = None;
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "renounce_ownership")
        .add_event(renounced_event))
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Validate an owner-supplied config. Never carries the renounced flag.
pub fn lock_config_from_msg(msg: LockConfigMsg) -> Result<LockConfig, ContractError> {
    let lock_config = LockConfig {
        lock_duration: msg.lock_duration,
        min_liquidity_percentage: msg.min_liquidity_percentage,
        max_sell_percentage: msg.max_sell_percentage,
        ownership_renounced: false,
    };
    lock_config
        .validate()
        .map_err(|e| ContractError::invalid(e.to_string()))?;
    Ok(lock_config)
}

/// `now + duration`, or `None` if it does not fit in a timestamp.
fn unlock_time_after(now: Timestamp, duration: u64) -> Option<Timestamp> {
    duration
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|nanos| now.nanos().checked_add(nanos))
        .map(Timestamp::from_nanos)
}
