//! Address rendering for review screens

use alloy_primitives::{address, Address};

/// Placeholder many zappers use for native ether
pub const NATIVE_PLACEHOLDER: Address = address!("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// EIP-55 checksummed hex
pub fn format_address(address: &Address) -> String {
    address.to_checksum(None)
}

/// Whether a zapper input token stands for native ether
pub fn is_native(address: &Address) -> bool {
    address.is_zero() || *address == NATIVE_PLACEHOLDER
}
