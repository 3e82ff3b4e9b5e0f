pub mod context;
pub mod status;

pub use context::{DecodeContext, Stage, TokenInfo};
pub use status::{ErrorKind, PluginError, Status};
