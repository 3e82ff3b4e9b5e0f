//! Screen formatter - turns a completed decode into review fields

pub mod address;
pub mod units;

use alloy_primitives::{Address, U256};
use serde::Serialize;

use crate::core::DecodeContext;
use crate::domain::{
    Denomination, Operation, ParameterSlot, VaultDefinition, VaultFamily, VaultRegistry,
};

use self::address::{format_address, is_native};
use self::units::{format_amount, format_basis_points, format_unscaled};

pub const MAX_LABEL_LEN: usize = 32;
pub const MAX_VALUE_LEN: usize = 100;

/// Iron Bank market tokens carry 8 decimals regardless of the underlying
pub const LENDING_SHARE_DECIMALS: u8 = 8;

const NATIVE_SYMBOL: &str = "ETH";
const NATIVE_DECIMALS: u8 = 18;

/// One (label, value) review screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
}

impl DisplayField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: truncate(label.into(), MAX_LABEL_LEN),
            value: truncate(value.into(), MAX_VALUE_LEN),
        }
    }
}

fn truncate(mut text: String, max: usize) -> String {
    if text.len() <= max {
        return text;
    }
    let mut end = max - 3;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text.push_str("...");
    text
}

/// Contract the review refers to, and its registry entry if known
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVault {
    pub address: Address,
    pub definition: Option<&'static VaultDefinition>,
}

impl ResolvedVault {
    pub fn resolve(ctx: &DecodeContext, operation: Operation) -> Self {
        let (address, registry) = match operation.family() {
            VaultFamily::Vault | VaultFamily::Rewards => (ctx.destination(), VaultRegistry::yearn()),
            VaultFamily::Zap => (
                ctx.address(ParameterSlot::ZapVault).unwrap_or(ctx.destination()),
                VaultRegistry::yearn(),
            ),
            VaultFamily::Lending => (ctx.destination(), VaultRegistry::iron_bank()),
        };
        Self {
            address,
            definition: registry.lookup(&address),
        }
    }

    /// Share symbol, or the raw address when the vault is unknown
    fn display(&self) -> String {
        match self.definition {
            Some(vault) => vault.share.to_string(),
            None => format_address(&self.address),
        }
    }
}

/// Symbol and precision an amount is rendered with
struct Unit<'a> {
    symbol: &'a str,
    decimals: u8,
}

fn render(value: U256, unit: Option<Unit<'_>>) -> String {
    unit.and_then(|unit| format_amount(value, unit.decimals, unit.symbol))
        .unwrap_or_else(|| format_unscaled(value))
}

fn amount_unit<'a>(
    ctx: &'a DecodeContext,
    operation: Operation,
    vault: &ResolvedVault,
) -> Option<Unit<'a>> {
    match operation.denomination() {
        Denomination::Underlying => vault.definition.map(|v| Unit {
            symbol: v.underlying,
            decimals: v.decimals,
        }),
        Denomination::Share => vault.definition.map(|v| Unit {
            symbol: v.share,
            decimals: if operation.family() == VaultFamily::Lending {
                LENDING_SHARE_DECIMALS
            } else {
                v.decimals
            },
        }),
        Denomination::InputToken => {
            let token = ctx.address(ParameterSlot::ZapToken)?;
            if is_native(&token) {
                return Some(Unit {
                    symbol: NATIVE_SYMBOL,
                    decimals: NATIVE_DECIMALS,
                });
            }
            ctx.token_info().map(|info| Unit {
                symbol: info.ticker.as_str(),
                decimals: info.decimals,
            })
        }
    }
}

fn vault_label(family: VaultFamily) -> &'static str {
    match family {
        VaultFamily::Vault | VaultFamily::Zap => "Vault",
        VaultFamily::Lending => "Market",
        VaultFamily::Rewards => "Contract",
    }
}

/// Token the host should look up before the screens are shown
pub fn token_lookup(ctx: &DecodeContext) -> Option<Address> {
    let operation = ctx.operation()?;
    if operation.denomination() != Denomination::InputToken {
        return None;
    }
    ctx.address(ParameterSlot::ZapToken)
        .filter(|token| !is_native(token))
}

/// Build the ordered review fields
///
/// Operation name first, then the amount, then the remaining decoded slots
/// in schema order, then the vault.
pub fn build_fields(ctx: &DecodeContext) -> Vec<DisplayField> {
    let Some(operation) = ctx.operation() else {
        return Vec::new();
    };
    let vault = ResolvedVault::resolve(ctx, operation);

    let mut fields = vec![DisplayField::new("Operation", operation.display_name())];

    if let Some(amount) = ctx.amount(ParameterSlot::Amount) {
        let unit = amount_unit(ctx, operation, &vault);
        fields.push(DisplayField::new("Amount", render(amount, unit)));
    }

    for slot in operation.schema() {
        match slot {
            ParameterSlot::Recipient => {
                if let Some(recipient) = ctx.address(*slot) {
                    fields.push(DisplayField::new("Recipient", format_address(&recipient)));
                }
            }
            ParameterSlot::ZapToken => {
                if let Some(token) = ctx.address(*slot) {
                    fields.push(DisplayField::new("Token", format_address(&token)));
                }
            }
            ParameterSlot::Slippage => {
                if let Some(bps) = ctx.amount(*slot) {
                    fields.push(DisplayField::new("Max Loss", format_basis_points(bps)));
                }
            }
            ParameterSlot::MinimumOutput => {
                if let Some(minimum) = ctx.amount(*slot) {
                    let unit = vault.definition.map(|v| Unit {
                        symbol: v.share,
                        decimals: v.decimals,
                    });
                    fields.push(DisplayField::new("Min Received", render(minimum, unit)));
                }
            }
            ParameterSlot::Amount | ParameterSlot::ZapVault | ParameterSlot::Unused => {}
        }
    }

    fields.push(DisplayField::new(vault_label(operation.family()), vault.display()));
    fields
}
