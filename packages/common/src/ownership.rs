//! Authority checks over a stored, renounceable owner.
//!
//! The owner is kept as `Option<Addr>` inside the contract's own config
//! record. `None` means ownership was renounced and no caller can ever pass
//! the check again.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

/// Outcome of comparing a caller against the stored authority.
#[cw_serde]
pub enum Authority {
    /// Caller is the stored owner
    Granted,
    /// An owner exists but the caller is someone else
    Denied,
    /// Ownership has been renounced
    Renounced,
}

impl Authority {
    pub fn is_granted(&self) -> bool {
        matches!(self, Authority::Granted)
    }
}

/// Pure predicate over (caller, stored authority).
pub fn check_authority(caller: &Addr, owner: Option<&Addr>) -> Authority {
    match owner {
        None => Authority::Renounced,
        Some(owner) if owner == caller => Authority::Granted,
        Some(_) => Authority::Denied,
    }
}
