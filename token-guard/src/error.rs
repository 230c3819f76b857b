//! Error types for the Token Guard contract
//!
//! Every variant is a precondition failure that aborts the whole transaction.
//! A sell rejected by the rug-pull guard is not an error: `CanSell` reports it
//! as `allowed = false` with a reason so callers can branch on it.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[error("Ownership renounced: contract configuration is frozen")]
    OwnershipRenounced,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // ========================================================================
    // Bridge Errors
    // ========================================================================

    #[error("Nonce already processed: {nonce}")]
    NonceAlreadyProcessed { nonce: u64 },

    // ========================================================================
    // External Ledger Errors
    // ========================================================================

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },
}

impl ContractError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ContractError::InvalidArgument {
            reason: reason.into(),
        }
    }
}
