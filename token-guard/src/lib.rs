//! Token Guard Contract - Security Layer for a Cross-Chain Token
//!
//! Three independent guards share one contract:
//!
//! # Bridge (Replay Protection)
//! 1. A holder burns tokens here with `BridgeTokens` (or a CW20 `Send`)
//! 2. A relayer observes the `tokens_bridged` event
//! 3. A registered bridge calls `MintBridgedTokens` on the destination chain
//! 4. Each nonce settles at most once; it is marked before the mint is dispatched
//!
//! # Liquidity Lock (Rug-Pull Guard)
//! - Owner locks LP tokens for at least the configured duration
//! - While locked, `CanSell` caps sells at a share of total supply and requires
//!   enough liquidity to stay locked
//! - Renouncing ownership freezes the configuration forever
//!
//! # Restriction Registry
//! - Per (owner, token id) "safe" flag
//! - Per (owner, token id, selector) function restriction flag
//! - Declarative only: privileged entry points elsewhere consult it

pub mod contract;
pub mod error;
mod execute;
pub mod guard;
pub mod msg;
mod query;
pub mod selector;
pub mod state;

pub use crate::error::ContractError;
pub use crate::guard::{evaluate_sell, SellDecision};
pub use crate::selector::function_selector;
