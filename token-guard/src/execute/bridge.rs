//! Bridge handlers (egress, ingress and bridge registry).
//!
//! Egress burns tokens on this chain and emits `tokens_bridged`, the only
//! durable record a relayer observes. Ingress mints on this chain once a
//! registered bridge presents a nonce that has never been settled.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, Event, MessageInfo, Response, Storage, SubMsg,
    Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use super::admin::assert_owner;
use super::{REPLY_BURN, REPLY_MINT};
use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{BRIDGES, CHAIN_ID, CONFIG, PROCESSED_NONCES, STATS};

// ============================================================================
// Egress
// ============================================================================

/// Burn `amount` from the caller (via allowance) for bridging to `target_chain_id`.
pub fn execute_bridge_tokens(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
    nonce: u64,
    target_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let chain_id = CHAIN_ID.load(deps.storage)?;
    validate_egress(&to, amount, chain_id, target_chain_id)?;

    record_egress(deps.storage, amount)?;

    let burn = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
                owner: info.sender.to_string(),
                amount,
            })?,
            funds: vec![],
        },
        REPLY_BURN,
    );

    Ok(Response::new()
        .add_submessage(burn)
        .add_attribute("method", "bridge_tokens")
        .add_attribute("nonce", nonce.to_string())
        .add_event(tokens_bridged_event(
            info.sender.as_str(),
            &to,
            amount,
            nonce,
            chain_id,
            target_chain_id,
        )))
}

/// Execute handler for CW20 tokens sent to this contract for egress
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Only the guarded token can be bridged
    if info.sender != config.token {
        return Err(ContractError::Unauthorized);
    }

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let amount = cw20_msg.amount;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::BridgeTokens {
            to,
            nonce,
            target_chain_id,
        } => {
            let chain_id = CHAIN_ID.load(deps.storage)?;
            validate_egress(&to, amount, chain_id, target_chain_id)?;

            record_egress(deps.storage, amount)?;

            // Tokens already sit in this contract's balance
            let burn = SubMsg::reply_on_error(
                WasmMsg::Execute {
                    contract_addr: config.token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
                    funds: vec![],
                },
                REPLY_BURN,
            );

            Ok(Response::new()
                .add_submessage(burn)
                .add_attribute("method", "bridge_tokens_cw20")
                .add_attribute("nonce", nonce.to_string())
                .add_event(tokens_bridged_event(
                    sender.as_str(),
                    &to,
                    amount,
                    nonce,
                    chain_id,
                    target_chain_id,
                )))
        }
    }
}

// ============================================================================
// Ingress
// ============================================================================

/// Settle an ingress transfer: mark `nonce` processed, then mint to `to`.
pub fn execute_mint_bridged_tokens(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
    nonce: u64,
    from_chain_id: u64,
) -> Result<Response, ContractError> {
    if !BRIDGES.has(deps.storage, &info.sender) {
        return Err(ContractError::Unauthorized);
    }

    if PROCESSED_NONCES.has(deps.storage, nonce) {
        return Err(ContractError::NonceAlreadyProcessed { nonce });
    }

    if amount.is_zero() {
        return Err(ContractError::invalid("amount must be greater than zero"));
    }

    let chain_id = CHAIN_ID.load(deps.storage)?;
    if from_chain_id == chain_id {
        return Err(ContractError::invalid(format!(
            "from_chain_id {} is this chain",
            from_chain_id
        )));
    }

    let recipient = deps
        .api
        .addr_validate(&to)
        .map_err(|e| ContractError::invalid(format!("recipient: {}", e)))?;

    // Settle before the mint is dispatched
    PROCESSED_NONCES.save(deps.storage, nonce, &true)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_incoming_txs += 1;
    stats.total_bridged_in += amount;
    STATS.save(deps.storage, &stats)?;

    let config = CONFIG.load(deps.storage)?;
    let mint = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        },
        REPLY_MINT,
    );

    Ok(Response::new()
        .add_submessage(mint)
        .add_attribute("method", "mint_bridged_tokens")
        .add_attribute("nonce", nonce.to_string())
        .add_event(tokens_bridged_event(
            info.sender.as_str(),
            recipient.as_str(),
            amount,
            nonce,
            from_chain_id,
            chain_id,
        )))
}

// ============================================================================
// Bridge Registry
// ============================================================================

/// Authorize a bridge. Adding a present address is a no-op.
pub fn execute_add_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let bridge = validate_bridge(&deps, &address)?;
    let changed = !BRIDGES.has(deps.storage, &bridge);
    BRIDGES.save(deps.storage, &bridge, &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_bridge")
        .add_event(bridge_updated_event(&bridge, true, changed)))
}

/// Revoke a bridge. Removing an absent address is a no-op.
pub fn execute_remove_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let bridge = validate_bridge(&deps, &address)?;
    let changed = BRIDGES.has(deps.storage, &bridge);
    BRIDGES.remove(deps.storage, &bridge);

    Ok(Response::new()
        .add_attribute("method", "remove_bridge")
        .add_event(bridge_updated_event(&bridge, false, changed)))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn validate_bridge(deps: &DepsMut, address: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(address)
        .map_err(|e| ContractError::invalid(format!("bridge address: {}", e)))
}

fn validate_egress(
    to: &str,
    amount: Uint128,
    chain_id: u64,
    target_chain_id: u64,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::invalid("amount must be greater than zero"));
    }
    if to.trim().is_empty() {
        return Err(ContractError::invalid("recipient must not be empty"));
    }
    if target_chain_id == chain_id {
        return Err(ContractError::invalid(format!(
            "target_chain_id {} is this chain",
            target_chain_id
        )));
    }
    Ok(())
}

fn record_egress(storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
    let mut stats = STATS.load(storage)?;
    stats.total_outgoing_txs += 1;
    stats.total_bridged_out += amount;
    STATS.save(storage, &stats)?;
    Ok(())
}

fn tokens_bridged_event(
    from: &str,
    to: &str,
    amount: Uint128,
    nonce: u64,
    from_chain_id: u64,
    to_chain_id: u64,
) -> Event {
    Event::new("tokens_bridged")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("from_chain_id", from_chain_id.to_string())
        .add_attribute("to_chain_id", to_chain_id.to_string())
}

fn bridge_updated_event(bridge: &Addr, authorized: bool, changed: bool) -> Event {
    Event::new("bridge_updated")
        .add_attribute("bridge", bridge.as_str())
        .add_attribute("authorized", authorized.to_string())
        .add_attribute("changed", changed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_egress() {
        assert!(validate_egress("0xabc", Uint128::one(), 1, 56).is_ok());

        let err = validate_egress("0xabc", Uint128::zero(), 1, 56).unwrap_err();
        assert!(err.to_string().contains("amount"));

        let err = validate_egress("  ", Uint128::one(), 1, 56).unwrap_err();
        assert!(err.to_string().contains("recipient"));

        let err = validate_egress("0xabc", Uint128::one(), 1, 1).unwrap_err();
        assert!(err.to_string().contains("this chain"));
    }

    #[test]
    fn test_tokens_bridged_event_fields() {
        let event = tokens_bridged_event("alice", "0xbob", Uint128::new(5), 9, 1, 56);
        assert_eq!(event.ty, "tokens_bridged");
        let keys: Vec<_> = event.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["from", "to", "amount", "nonce", "from_chain_id", "to_chain_id"]
        );
    }
}
