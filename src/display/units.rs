//! Token amount formatting: raw integer to decimal string

use alloy_primitives::U256;

/// Marker appended to amounts whose token could not be resolved
pub const UNKNOWN_TOKEN: &str = "(unknown token)";

/// Scale `value` down by `10^decimals`
///
/// Trailing fractional zeros are trimmed. Returns `None` when `10^decimals`
/// does not fit in 256 bits.
pub fn format_units(value: U256, decimals: u8) -> Option<String> {
    if decimals == 0 {
        return Some(value.to_string());
    }
    let scale = U256::from(10u8).checked_pow(U256::from(decimals))?;
    let whole = value / scale;
    let remainder = value % scale;
    if remainder.is_zero() {
        return Some(whole.to_string());
    }
    let fraction = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
    Some(format!("{}.{}", whole, fraction.trim_end_matches('0')))
}

/// Scaled amount followed by its symbol, e.g. "1.5 DAI"
pub fn format_amount(value: U256, decimals: u8, symbol: &str) -> Option<String> {
    format_units(value, decimals).map(|amount| format!("{} {}", amount, symbol))
}

/// Raw integer with the unknown token marker
pub fn format_unscaled(value: U256) -> String {
    format!("{} {}", value, UNKNOWN_TOKEN)
}

/// Basis points as a percentage, e.g. 1 -> "0.01%"
pub fn format_basis_points(bps: U256) -> String {
    match format_units(bps, 2) {
        Some(percent) => format!("{}%", percent),
        None => format!("{} bps", bps),
    }
}
