//! Per-operation parameter schemas
//!
//! Each operation declares which ABI argument position carries which
//! semantic field. The decoder walks these tables one word at a time.

use serde::Serialize;

use super::selector::Operation;

/// What an incoming calldata word represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParameterSlot {
    /// Token amount, unsigned 256-bit integer
    Amount,
    /// Address receiving the shares or assets
    Recipient,
    /// Token fed into the zapper
    ZapToken,
    /// Vault the zapper deposits into
    ZapVault,
    /// Lower bound on shares received
    MinimumOutput,
    /// Maximum tolerated loss in basis points
    Slippage,
    /// Argument irrelevant to the review
    Unused,
}

impl ParameterSlot {
    /// Number of slots that can hold a value
    pub const STORED: usize = 6;

    /// Index into the context's slot store, `None` for [`ParameterSlot::Unused`]
    pub fn store_index(self) -> Option<usize> {
        match self {
            Self::Amount => Some(0),
            Self::Recipient => Some(1),
            Self::ZapToken => Some(2),
            Self::ZapVault => Some(3),
            Self::MinimumOutput => Some(4),
            Self::Slippage => Some(5),
            Self::Unused => None,
        }
    }

    pub fn is_address(self) -> bool {
        matches!(self, Self::Recipient | Self::ZapToken | Self::ZapVault)
    }
}

use ParameterSlot::*;

const NONE: &[ParameterSlot] = &[];
const AMOUNT_ONLY: &[ParameterSlot] = &[Amount];
const AMOUNT_TO: &[ParameterSlot] = &[Amount, Recipient];
const AMOUNT_TO_MAX_LOSS: &[ParameterSlot] = &[Amount, Recipient, Slippage];

// ZapIn(fromToken, amountIn, toVault, superVault, isAaveUnderlying, minYVTokens, ...)
const ZAP_IN: &[ParameterSlot] = &[ZapToken, Amount, ZapVault, Unused, Unused, MinimumOutput];

// ZapIn(fromToken, amountIn, toPJar, minPJarTokens, ...)
const ZAP_IN_VIA_INTERMEDIARY: &[ParameterSlot] = &[ZapToken, Amount, ZapVault, MinimumOutput];

pub(crate) fn schema_for(operation: Operation) -> &'static [ParameterSlot] {
    match operation {
        Operation::DepositAll
        | Operation::WithdrawAll
        | Operation::ClaimRewards
        | Operation::Exit
        | Operation::GetRewards => NONE,
        Operation::Deposit
        | Operation::Withdraw
        | Operation::LendingMint
        | Operation::LendingRedeem
        | Operation::LendingRedeemUnderlying
        | Operation::LendingBorrow
        | Operation::LendingRepay => AMOUNT_ONLY,
        Operation::DepositTo | Operation::WithdrawTo => AMOUNT_TO,
        Operation::WithdrawToWithSlippage => AMOUNT_TO_MAX_LOSS,
        Operation::ZapIn => ZAP_IN,
        Operation::ZapInViaIntermediary => ZAP_IN_VIA_INTERMEDIARY,
    }
}
