//! Common - Shared Types and Utilities for Token Guard Contracts
//!
//! This package provides the authority check and percentage helpers
//! shared by the guard contract and the token contracts that consult it.

pub mod ownership;
pub mod percent;

pub use ownership::{check_authority, Authority};
pub use percent::{percent_of, validate_percentage, PERCENT_DENOMINATOR};
