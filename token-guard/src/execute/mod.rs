//! Execute handlers for the Token Guard contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `bridge` - Egress burns, ingress mints, bridge registry
//! - `liquidity` - LP lock, lock config, ownership renouncement
//! - `registry` - Account safety flags and function restrictions
//! - `admin` - Owner check and two-step ownership transfer

mod admin;
mod bridge;
mod liquidity;
mod registry;

pub use admin::*;
pub use bridge::*;
pub use liquidity::*;
pub use registry::*;

/// Reply ID for the LP-token custody transfer
pub const REPLY_LP_TRANSFER: u64 = 1;

/// Reply ID for the egress burn
pub const REPLY_BURN: u64 = 2;

/// Reply ID for the ingress mint
pub const REPLY_MINT: u64 = 3;
