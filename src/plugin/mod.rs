//! Plugin entry points
//!
//! One handler per host message. Every handler takes the host-owned
//! [`DecodeContext`] by mutable reference and returns before the host sends
//! the next message.

mod message;

pub use message::{dispatch, Message, Reply, Response};

use alloy_primitives::Address;
use serde::Serialize;

use crate::core::{DecodeContext, PluginError, Stage, TokenInfo};
use crate::decoder;
use crate::display::{self, DisplayField};
use crate::domain::{Operation, Selector};

/// Name the host shows for this plugin
pub const PLUGIN_NAME: &str = "Yearn";

/// Host/plugin interface revision this crate speaks
pub const INTERFACE_VERSION: u8 = 2;

/// Parameters of the init message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitContract {
    pub selector: Selector,
    /// Contract the transaction is sent to
    pub destination: Address,
    /// Bytes the host reserved for the context
    pub context_capacity: usize,
    pub interface_version: u8,
}

impl InitContract {
    /// Init request for the current interface with a full-size context
    pub fn new(selector: Selector, destination: Address) -> Self {
        Self {
            selector,
            destination,
            context_capacity: DecodeContext::REQUIRED_SIZE,
            interface_version: INTERFACE_VERSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finalized {
    pub field_count: usize,
    /// Token the host should resolve and answer with a provide-info message
    pub token_lookup: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: &'static str,
    pub operation: &'static str,
}

/// Reset the context and select the operation for `selector`
pub fn init(ctx: &mut DecodeContext, msg: &InitContract) -> Result<Operation, PluginError> {
    if msg.interface_version != INTERFACE_VERSION {
        return Err(PluginError::InterfaceVersion {
            found: msg.interface_version,
            expected: INTERFACE_VERSION,
        });
    }

    if msg.context_capacity < DecodeContext::REQUIRED_SIZE {
        return Err(PluginError::ContextTooSmall {
            capacity: msg.context_capacity,
            required: DecodeContext::REQUIRED_SIZE,
        });
    }

    ctx.reset();

    let operation =
        Operation::from_selector(msg.selector).ok_or(PluginError::UnknownSelector(msg.selector))?;
    ctx.begin(operation, msg.destination);

    tracing::debug!(
        ?operation,
        selector = %operation.selector_hex(),
        destination = %msg.destination,
        initial_slot = ?operation.initial_slot(),
        "contract initialized"
    );
    Ok(operation)
}

pub fn provide_parameter(ctx: &mut DecodeContext, parameter: &[u8]) -> Result<(), PluginError> {
    decoder::provide_parameter(ctx, parameter)
}

/// Build the review fields once every schema word has arrived
pub fn finalize(ctx: &mut DecodeContext) -> Result<Finalized, PluginError> {
    match ctx.stage() {
        Stage::Uninitialized => return Err(PluginError::NotInitialized),
        Stage::Collecting => {
            return Err(PluginError::Incomplete {
                received: ctx.word_index(),
                expected: ctx.word_index() + decoder::remaining(ctx),
            })
        }
        Stage::Finalized => return Err(PluginError::AlreadyFinalized),
        Stage::Complete => {}
    }

    ctx.fields = display::build_fields(ctx);
    ctx.token_lookup = display::token_lookup(ctx);
    ctx.mark_finalized();

    tracing::debug!(
        field_count = ctx.fields.len(),
        token_lookup = ?ctx.token_lookup,
        "finalized"
    );
    Ok(Finalized {
        field_count: ctx.fields.len(),
        token_lookup: ctx.token_lookup,
    })
}

/// Accept the host's answer to the token lookup requested at finalize
///
/// `None` means the host could not resolve the token. Only allowed until the
/// host asks for the contract identity; the field count never changes.
pub fn provide_info(ctx: &mut DecodeContext, info: Option<TokenInfo>) -> Result<(), PluginError> {
    if ctx.stage() != Stage::Finalized {
        return Err(PluginError::NotFinalized);
    }
    if ctx.frozen {
        return Err(PluginError::FieldsFrozen);
    }
    if ctx.token_lookup.is_none() {
        tracing::debug!("token info provided without a pending lookup, ignored");
        return Ok(());
    }

    ctx.token_info = info;
    let fields = display::build_fields(ctx);
    debug_assert_eq!(fields.len(), ctx.fields.len());
    ctx.fields = fields;
    Ok(())
}

/// Plugin and operation names for the review header
///
/// Once finalized, this opens the display phase and freezes the fields.
pub fn query_identity(ctx: &mut DecodeContext) -> Result<Identity, PluginError> {
    let operation = ctx.operation().ok_or(PluginError::NotInitialized)?;
    if ctx.stage() == Stage::Finalized {
        ctx.frozen = true;
    }
    Ok(Identity {
        name: PLUGIN_NAME,
        operation: operation.display_name(),
    })
}

/// Return field `index`; repeated calls return the same field
pub fn query_field(ctx: &DecodeContext, index: usize) -> Result<DisplayField, PluginError> {
    if ctx.stage() != Stage::Finalized {
        return Err(PluginError::NotFinalized);
    }
    ctx.fields
        .get(index)
        .cloned()
        .ok_or(PluginError::FieldOutOfRange {
            index,
            count: ctx.fields.len(),
        })
}
