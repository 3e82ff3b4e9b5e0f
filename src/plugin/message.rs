//! Host messages and the dispatcher that routes them

use serde::Serialize;

use super::{Finalized, Identity, InitContract};
use crate::core::{DecodeContext, PluginError, Status, TokenInfo};
use crate::display::DisplayField;

/// A message from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'a> {
    /// Host probing whether the plugin is installed
    CheckPresence,
    InitContract(InitContract),
    /// One 32-byte calldata word
    ProvideParameter(&'a [u8]),
    Finalize,
    ProvideInfo(Option<TokenInfo>),
    QueryContractId,
    QueryContractUi { index: usize },
}

impl Message<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckPresence => "check_presence",
            Self::InitContract(_) => "init_contract",
            Self::ProvideParameter(_) => "provide_parameter",
            Self::Finalize => "finalize",
            Self::ProvideInfo(_) => "provide_info",
            Self::QueryContractId => "query_contract_id",
            Self::QueryContractUi { .. } => "query_contract_ui",
        }
    }
}

/// Payload returned alongside the status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    None,
    Finalized(Finalized),
    Identity(Identity),
    Field(DisplayField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub reply: Reply,
    /// Cause of a non-`Ok` status
    pub error: Option<PluginError>,
}

impl Response {
    fn from_result<T>(result: Result<T, PluginError>, reply: impl FnOnce(T) -> Reply) -> Self {
        let status = Status::from(&result);
        match result {
            Ok(value) => Self {
                status,
                reply: reply(value),
                error: None,
            },
            Err(error) => Self {
                status,
                reply: Reply::None,
                error: Some(error),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Route one host message to its handler
pub fn dispatch(ctx: &mut DecodeContext, msg: Message<'_>) -> Response {
    let name = msg.name();
    let response = match msg {
        Message::CheckPresence => Response::from_result(Ok(()), |()| Reply::None),
        Message::InitContract(init) => {
            Response::from_result(super::init(ctx, &init), |_| Reply::None)
        }
        Message::ProvideParameter(word) => {
            Response::from_result(super::provide_parameter(ctx, word), |()| Reply::None)
        }
        Message::Finalize => Response::from_result(super::finalize(ctx), Reply::Finalized),
        Message::ProvideInfo(info) => {
            Response::from_result(super::provide_info(ctx, info), |()| Reply::None)
        }
        Message::QueryContractId => {
            Response::from_result(super::query_identity(ctx), Reply::Identity)
        }
        Message::QueryContractUi { index } => {
            Response::from_result(super::query_field(ctx, index), Reply::Field)
        }
    };

    if let Some(error) = &response.error {
        match response.status {
            Status::Unavailable => tracing::debug!(message = name, %error, "unavailable"),
            _ => tracing::warn!(message = name, %error, "message failed"),
        }
    }
    response
}
