//! Two-step ownership transfer with timelock.

mod setup;

use setup::{err_string, setup};
use token_guard::msg::{ConfigResponse, ExecuteMsg, PendingOwnerResponse, QueryMsg};
use token_guard::ContractError;

const OWNER_TIMELOCK: u64 = 7 * 24 * 60 * 60;

#[test]
fn test_propose_and_accept_owner() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let other = suite.other.clone();

    suite
        .execute(
            &owner,
            &ExecuteMsg::ProposeOwner {
                new_owner: other.to_string(),
            },
        )
        .unwrap();

    let pending: Option<PendingOwnerResponse> = suite.query(&QueryMsg::PendingOwner {});
    let pending = pending.unwrap();
    assert_eq!(pending.new_owner, other);
    assert_eq!(pending.execute_after, suite.now().plus_seconds(OWNER_TIMELOCK));

    // Too early
    let res = suite.execute(&other, &ExecuteMsg::AcceptOwner {});
    assert_eq!(
        err_string(res),
        ContractError::TimelockNotExpired {
            remaining_seconds: OWNER_TIMELOCK
        }
        .to_string()
    );

    suite.advance_seconds(OWNER_TIMELOCK);
    suite.execute(&other, &ExecuteMsg::AcceptOwner {}).unwrap();

    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.owner, Some(other.clone()));
    let pending: Option<PendingOwnerResponse> = suite.query(&QueryMsg::PendingOwner {});
    assert!(pending.is_none());

    // Previous owner lost its privileges
    let res = suite.execute(
        &owner,
        &ExecuteMsg::AddBridge {
            address: owner.to_string(),
        },
    );
    assert_eq!(err_string(res), ContractError::Unauthorized.to_string());

    suite
        .execute(
            &other,
            &ExecuteMsg::AddBridge {
                address: owner.to_string(),
            },
        )
        .unwrap();
}

#[test]
fn test_accept_owner_wrong_sender() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let other = suite.other.clone();
    let user = suite.user.clone();

    suite
        .execute(
            &owner,
            &ExecuteMsg::ProposeOwner {
                new_owner: other.to_string(),
            },
        )
        .unwrap();
    suite.advance_seconds(OWNER_TIMELOCK);

    let res = suite.execute(&user, &ExecuteMsg::AcceptOwner {});
    assert_eq!(
        err_string(res),
        ContractError::UnauthorizedPendingOwner.to_string()
    );
}

#[test]
fn test_propose_owner_only() {
    let mut suite = setup();
    let user = suite.user.clone();

    let res = suite.execute(
        &user,
        &ExecuteMsg::ProposeOwner {
            new_owner: user.to_string(),
        },
    );
    assert_eq!(err_string(res), ContractError::Unauthorized.to_string());

    let res = suite.execute(&user, &ExecuteMsg::AcceptOwner {});
    assert_eq!(err_string(res), ContractError::NoPendingOwner.to_string());
}

#[test]
fn test_cancel_owner_proposal() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let other = suite.other.clone();

    suite
        .execute(
            &owner,
            &ExecuteMsg::ProposeOwner {
                new_owner: other.to_string(),
            },
        )
        .unwrap();

    let res = suite.execute(&other, &ExecuteMsg::CancelOwnerProposal {});
    assert_eq!(err_string(res), ContractError::Unauthorized.to_string());

    suite
        .execute(&owner, &ExecuteMsg::CancelOwnerProposal {})
        .unwrap();
    let pending: Option<PendingOwnerResponse> = suite.query(&QueryMsg::PendingOwner {});
    assert!(pending.is_none());

    suite.advance_seconds(OWNER_TIMELOCK);
    let res = suite.execute(&other, &ExecuteMsg::AcceptOwner {});
    assert_eq!(err_string(res), ContractError::NoPendingOwner.to_string());
}

#[test]
fn test_renounce_drops_pending_owner() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let other = suite.other.clone();

    suite
        .execute(
            &owner,
            &ExecuteMsg::ProposeOwner {
                new_owner: other.to_string(),
            },
        )
        .unwrap();
    suite
        .execute(&owner, &ExecuteMsg::RenounceOwnership {})
        .unwrap();

    let pending: Option<PendingOwnerResponse> = suite.query(&QueryMsg::PendingOwner {});
    assert!(pending.is_none());

    suite.advance_seconds(OWNER_TIMELOCK);
    let res = suite.execute(&other, &ExecuteMsg::AcceptOwner {});
    assert_eq!(err_string(res), ContractError::OwnershipRenounced.to_string());

    let res = suite.execute(&owner, &ExecuteMsg::CancelOwnerProposal {});
    assert_eq!(err_string(res), ContractError::OwnershipRenounced.to_string());
}
