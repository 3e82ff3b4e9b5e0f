//! Static knowledge about the supported vault contracts
//!
//! Selectors, per-operation parameter schemas and the vault registries
//! are all fixed at compile time.

mod schema;
mod selector;
mod vault;
mod vaults;

pub use schema::ParameterSlot;
pub use selector::{Denomination, Operation, Selector, VaultFamily, SELECTOR_SIZE};
pub use vault::{VaultDefinition, VaultRegistry};
pub use vaults::{IRON_BANK_MARKETS, YEARN_VAULTS};
