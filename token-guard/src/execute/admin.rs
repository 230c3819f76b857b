//! Ownership handlers.
//!
//! This module handles:
//! - The owner check every privileged handler goes through
//! - Owner transfer (propose/accept/cancel)

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Config, PendingOwner, CONFIG, OWNER_TIMELOCK_DURATION, PENDING_OWNER};
use common::{check_authority, Authority};

/// Fails with `OwnershipRenounced` once no owner is left, `Unauthorized` for
/// anyone but the owner.
pub fn assert_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    match check_authority(sender, config.owner.as_ref()) {
        Authority::Granted => Ok(()),
        Authority::Denied => Err(ContractError::Unauthorized),
        Authority::Renounced => Err(ContractError::OwnershipRenounced),
    }
}

// ============================================================================
// Owner Transfer
// ============================================================================

/// Propose a new owner (starts timelock).
pub fn execute_propose_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let new_owner_addr = deps
        .api
        .addr_validate(&new_owner)
        .map_err(|e| ContractError::invalid(format!("new_owner: {}", e)))?;
    let pending = PendingOwner {
        new_owner: new_owner_addr.clone(),
        execute_after: env.block.time.plus_seconds(OWNER_TIMELOCK_DURATION),
    };
    PENDING_OWNER.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("method", "propose_owner")
        .add_attribute("new_owner", new_owner_addr)
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending ownership (after timelock).
pub fn execute_accept_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner.is_none() {
        return Err(ContractError::OwnershipRenounced);
    }

    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending.new_owner {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let previous_owner = config.owner.replace(pending.new_owner.clone());
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    let mut response = Response::new()
        .add_attribute("method", "accept_owner")
        .add_attribute("new_owner", pending.new_owner);
    if let Some(previous) = previous_owner {
        response = response.add_attribute("previous_owner", previous);
    }
    Ok(response)
}

/// Cancel pending owner proposal.
pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_owner_proposal"))
}
