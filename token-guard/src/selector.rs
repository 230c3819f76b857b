//! Function selector encoding.
//!
//! Restrictions are keyed by 4-byte selectors computed the same way EVM
//! contracts compute them: the first four bytes of `keccak256(signature)`.
//! Using one encoding on every chain lets a token's privileged entry points
//! and off-chain tooling agree on which function a restriction names.
//!
//! # Example
//! ```text
//! transfer(address,uint256) -> 0xa9059cbb
//! ```

use tiny_keccak::{Hasher, Keccak};

/// Selector width in bytes
pub const SELECTOR_LEN: usize = 4;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Selector of a canonical function signature, e.g. `transfer(address,uint256)`.
pub fn function_selector(signature: &str) -> [u8; SELECTOR_LEN] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Parse a raw selector, rejecting anything that is not exactly 4 bytes.
pub fn parse_selector(raw: &[u8]) -> Result<[u8; SELECTOR_LEN], String> {
    raw.try_into().map_err(|_| {
        format!(
            "function selector must be {} bytes, got {}",
            SELECTOR_LEN,
            raw.len()
        )
    })
}

/// Render a selector as `0x`-prefixed hex (for attributes/logging)
pub fn selector_to_hex(selector: &[u8]) -> String {
    format!("0x{}", hex::encode(selector))
}
