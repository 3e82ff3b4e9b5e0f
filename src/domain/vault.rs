//! Vault registry - static metadata for known vault and market contracts

use alloy_primitives::Address;

use super::vaults::{IRON_BANK_MARKETS, YEARN_VAULTS};

/// Token metadata attached to a vault contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultDefinition {
    /// Contract address
    pub address: Address,
    /// Symbol of the asset the vault accepts
    pub underlying: &'static str,
    /// Symbol of the shares the vault issues
    pub share: &'static str,
    /// Decimal precision of underlying amounts
    pub decimals: u8,
}

pub(crate) const fn vault(
    address: Address,
    underlying: &'static str,
    share: &'static str,
    decimals: u8,
) -> VaultDefinition {
    VaultDefinition {
        address,
        underlying,
        share,
        decimals,
    }
}

/// Immutable, ordered table of vault definitions
///
/// Lookups scan in order and the first exact address match wins. Several
/// deployments share a symbol, so duplicates by symbol are expected.
#[derive(Debug, Clone, Copy)]
pub struct VaultRegistry {
    name: &'static str,
    entries: &'static [VaultDefinition],
}

impl VaultRegistry {
    pub const fn new(name: &'static str, entries: &'static [VaultDefinition]) -> Self {
        Self { name, entries }
    }

    /// Yearn vaults
    pub fn yearn() -> Self {
        Self::new("yearn", &YEARN_VAULTS)
    }

    /// Iron Bank lending markets
    pub fn iron_bank() -> Self {
        Self::new("iron-bank", &IRON_BANK_MARKETS)
    }

    /// Look up a vault by its exact 20-byte address
    pub fn lookup(&self, address: &Address) -> Option<&'static VaultDefinition> {
        let found = self.entries.iter().find(|vault| vault.address == *address);
        if found.is_none() {
            tracing::debug!(registry = self.name, %address, "vault not in registry");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static VaultDefinition> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_lookup_known_vault() {
        let registry = VaultRegistry::yearn();
        let vault = registry
            .lookup(&address!("0xdA816459F1AB5631232FE5e97a05BBBb94970c95"))
            .unwrap();
        assert_eq!(vault.underlying, "DAI");
        assert_eq!(vault.share, "yvDAI");
        assert_eq!(vault.decimals, 18);
    }

    #[test]
    fn test_lookup_iron_bank() {
        let registry = VaultRegistry::iron_bank();
        let market = registry
            .lookup(&address!("0x76Eb2FE28b36B3ee97F3Adae0C69606eeDB2A37c"))
            .unwrap();
        assert_eq!(market.share, "cyUSDC");
        assert_eq!(market.decimals, 6);
        assert!(VaultRegistry::yearn()
            .lookup(&address!("0x76Eb2FE28b36B3ee97F3Adae0C69606eeDB2A37c"))
            .is_none());
    }

    #[test]
    fn test_single_bit_difference_never_matches() {
        let registry = VaultRegistry::yearn();
        for vault in registry.iter() {
            for byte in 0..20 {
                for bit in 0..8 {
                    let mut bytes = [0u8; 20];
                    bytes.copy_from_slice(vault.address.as_slice());
                    bytes[byte] ^= 1 << bit;
                    let flipped = Address::from(bytes);
                    if let Some(found) = registry.lookup(&flipped) {
                        assert_eq!(found.address, flipped);
                        assert_ne!(found.address, vault.address);
                    }
                }
            }
        }
    }

    #[test]
    fn test_first_match_wins() {
        static DUPLICATES: [VaultDefinition; 2] = [
            vault(Address::ZERO, "DAI", "yvDAI", 18),
            vault(Address::ZERO, "USDC", "yvUSDC", 6),
        ];
        let registry = VaultRegistry::new("test", &DUPLICATES);
        assert_eq!(registry.lookup(&Address::ZERO).unwrap().underlying, "DAI");
    }

    #[test]
    fn test_duplicate_symbols_are_distinct_deployments() {
        let registry = VaultRegistry::yearn();
        let dai: Vec<_> = registry.iter().filter(|v| v.share == "yvDAI").collect();
        assert!(dai.len() > 1);
        for (i, a) in dai.iter().enumerate() {
            for b in &dai[i + 1..] {
                assert_ne!(a.address, b.address);
            }
        }
    }
}
