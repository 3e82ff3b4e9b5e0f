//! Selector registry - the fixed set of vault calls we can decode

use serde::Serialize;

use super::schema::{schema_for, ParameterSlot};

/// Length of a function selector in bytes
pub const SELECTOR_SIZE: usize = 4;

pub type Selector = [u8; SELECTOR_SIZE];

/// A supported vault action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    DepositAll,
    Deposit,
    DepositTo,
    WithdrawAll,
    Withdraw,
    WithdrawTo,
    WithdrawToWithSlippage,
    ZapIn,
    ZapInViaIntermediary,
    LendingMint,
    LendingRedeem,
    LendingRedeemUnderlying,
    LendingBorrow,
    LendingRepay,
    ClaimRewards,
    Exit,
    GetRewards,
}

/// Which registry resolves the contract an operation touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultFamily {
    /// Yearn vault addressed by the transaction destination
    Vault,
    /// Yearn vault named inside the calldata
    Zap,
    /// Iron Bank lending market addressed by the transaction destination
    Lending,
    /// Reward or staking contract addressed by the transaction destination
    Rewards,
}

/// Unit the decoded amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    /// Underlying asset of the vault or market
    Underlying,
    /// Vault or market shares
    Share,
    /// Token the zapper is fed with
    InputToken,
}

/// Selector table
///
/// Order matches [`Operation::ALL`].
static SELECTORS: [(Selector, Operation); 17] = [
    ([0xd0, 0xe3, 0x0d, 0xb0], Operation::DepositAll),
    ([0xb6, 0xb5, 0x5f, 0x25], Operation::Deposit),
    ([0x6e, 0x55, 0x3f, 0x65], Operation::DepositTo),
    ([0x3c, 0xcf, 0xd6, 0x0b], Operation::WithdrawAll),
    ([0x2e, 0x1a, 0x7d, 0x4d], Operation::Withdraw),
    ([0x00, 0xf7, 0x14, 0xce], Operation::WithdrawTo),
    ([0xe6, 0x36, 0x97, 0xc8], Operation::WithdrawToWithSlippage),
    ([0x38, 0xb3, 0x2e, 0x68], Operation::ZapIn),
    ([0x28, 0x93, 0x20, 0x94], Operation::ZapInViaIntermediary),
    ([0xa0, 0x71, 0x2d, 0x68], Operation::LendingMint),
    ([0xdb, 0x00, 0x6a, 0x75], Operation::LendingRedeem),
    ([0x85, 0x2a, 0x12, 0xe3], Operation::LendingRedeemUnderlying),
    ([0xc5, 0xeb, 0xea, 0xec], Operation::LendingBorrow),
    ([0x0e, 0x75, 0x27, 0x02], Operation::LendingRepay),
    ([0x4e, 0x71, 0xd9, 0x2d], Operation::ClaimRewards),
    ([0xe9, 0xfa, 0xd8, 0xee], Operation::Exit),
    ([0x3d, 0x18, 0xb9, 0x12], Operation::GetRewards),
];

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::DepositAll,
        Operation::Deposit,
        Operation::DepositTo,
        Operation::WithdrawAll,
        Operation::Withdraw,
        Operation::WithdrawTo,
        Operation::WithdrawToWithSlippage,
        Operation::ZapIn,
        Operation::ZapInViaIntermediary,
        Operation::LendingMint,
        Operation::LendingRedeem,
        Operation::LendingRedeemUnderlying,
        Operation::LendingBorrow,
        Operation::LendingRepay,
        Operation::ClaimRewards,
        Operation::Exit,
        Operation::GetRewards,
    ];

    /// Look up an operation by selector
    pub fn from_selector(selector: Selector) -> Option<Self> {
        SELECTORS
            .iter()
            .find(|(candidate, _)| *candidate == selector)
            .map(|(_, operation)| *operation)
    }

    pub fn selector(self) -> Selector {
        SELECTORS
            .iter()
            .find(|(_, operation)| *operation == self)
            .map(|(selector, _)| *selector)
            .unwrap_or_default()
    }

    /// Get selector as hex string
    pub fn selector_hex(self) -> String {
        format!("0x{}", hex::encode(self.selector()))
    }

    /// Name shown on the first review screen
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DepositAll => "Deposit All",
            Self::Deposit => "Deposit",
            Self::DepositTo => "Deposit To",
            Self::WithdrawAll => "Withdraw All",
            Self::Withdraw => "Withdraw",
            Self::WithdrawTo => "Withdraw To",
            Self::WithdrawToWithSlippage => "Withdraw To",
            Self::ZapIn => "Zap In",
            Self::ZapInViaIntermediary => "Zap In",
            Self::LendingMint => "Supply",
            Self::LendingRedeem => "Redeem",
            Self::LendingRedeemUnderlying => "Redeem",
            Self::LendingBorrow => "Borrow",
            Self::LendingRepay => "Repay",
            Self::ClaimRewards => "Claim",
            Self::Exit => "Exit",
            Self::GetRewards => "Get Rewards",
        }
    }

    /// Ordered ABI arguments this operation declares
    pub fn schema(self) -> &'static [ParameterSlot] {
        schema_for(self)
    }

    /// Slot expected from the first word, `None` when the call has no arguments
    pub fn initial_slot(self) -> Option<ParameterSlot> {
        self.schema().first().copied()
    }

    pub fn family(self) -> VaultFamily {
        match self {
            Self::DepositAll
            | Self::Deposit
            | Self::DepositTo
            | Self::WithdrawAll
            | Self::Withdraw
            | Self::WithdrawTo
            | Self::WithdrawToWithSlippage => VaultFamily::Vault,
            Self::ZapIn | Self::ZapInViaIntermediary => VaultFamily::Zap,
            Self::LendingMint
            | Self::LendingRedeem
            | Self::LendingRedeemUnderlying
            | Self::LendingBorrow
            | Self::LendingRepay => VaultFamily::Lending,
            Self::ClaimRewards | Self::Exit | Self::GetRewards => VaultFamily::Rewards,
        }
    }

    pub fn denomination(self) -> Denomination {
        match self {
            Self::Withdraw
            | Self::WithdrawTo
            | Self::WithdrawToWithSlippage
            | Self::WithdrawAll
            | Self::LendingRedeem => Denomination::Share,
            Self::ZapIn | Self::ZapInViaIntermediary => Denomination::InputToken,
            _ => Denomination::Underlying,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_table_matches_operations() {
        assert_eq!(SELECTORS.len(), Operation::ALL.len());
        for (op, (_, listed)) in Operation::ALL.iter().zip(SELECTORS.iter()) {
            assert_eq!(op, listed);
        }
    }

    #[test]
    fn test_selectors_unique() {
        for (i, (a, _)) in SELECTORS.iter().enumerate() {
            for (b, _) in &SELECTORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_lookup_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_selector(op.selector()), Some(op));
        }
        assert_eq!(Operation::from_selector([0xde, 0xad, 0xbe, 0xef]), None);
    }

    #[test]
    fn test_selector_hex() {
        assert_eq!(Operation::Deposit.selector_hex(), "0xb6b55f25");
        assert_eq!(Operation::WithdrawTo.selector_hex(), "0x00f714ce");
    }
}
