//! Decoder for calls to Yearn vaults and Iron Bank markets
//!
//! A host signing application streams the calldata of a pending
//! transaction one 32-byte word at a time; this crate recognizes the call,
//! decodes its arguments against a fixed schema and renders the review
//! screens. See [`plugin::dispatch`] for the message protocol.

pub mod config;
pub mod core;
pub mod decoder;
pub mod display;
pub mod domain;
pub mod plugin;

pub use crate::core::{DecodeContext, ErrorKind, PluginError, Stage, Status, TokenInfo};
pub use crate::display::DisplayField;
pub use crate::domain::{Operation, ParameterSlot, VaultDefinition, VaultRegistry};
