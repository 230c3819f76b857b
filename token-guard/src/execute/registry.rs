//! Account safety and function restriction handlers.
//!
//! Every flag is keyed by the caller, so an owner only ever writes policy
//! for their own token-id accounts. Clearing a flag removes the entry.

use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::selector::{parse_selector, selector_to_hex};
use crate::state::{FUNCTION_RESTRICTIONS, SAFE_ACCOUNTS};

pub fn execute_set_safe(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
    safe: bool,
) -> Result<Response, ContractError> {
    let key = (&info.sender, token_id);
    if safe {
        SAFE_ACCOUNTS.save(deps.storage, key, &true)?;
    } else {
        SAFE_ACCOUNTS.remove(deps.storage, key);
    }

    Ok(Response::new()
        .add_attribute("method", "set_safe")
        .add_event(
            Event::new("safe_updated")
                .add_attribute("owner", info.sender.as_str())
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("is_safe", safe.to_string()),
        ))
}

pub fn execute_set_function_restriction(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
    function_sig: Binary,
    restricted: bool,
) -> Result<Response, ContractError> {
    let selector = parse_selector(function_sig.as_slice()).map_err(ContractError::invalid)?;

    let key = (&info.sender, token_id, selector.as_slice());
    if restricted {
        FUNCTION_RESTRICTIONS.save(deps.storage, key, &true)?;
    } else {
        FUNCTION_RESTRICTIONS.remove(deps.storage, key);
    }

    Ok(Response::new()
        .add_attribute("method", "set_function_restriction")
        .add_event(
            Event::new("function_restriction_updated")
                .add_attribute("owner", info.sender.as_str())
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("function_sig", selector_to_hex(&selector))
                .add_attribute("is_restricted", restricted.to_string()),
        ))
}
