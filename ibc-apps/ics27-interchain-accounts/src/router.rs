//! Routing of relayed messages to the host's message handlers.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

use crate::context::InterchainAccountExecutionContext;

/// Events and logs produced by a message handler.
#[derive(Clone, Debug, Default)]
pub struct MsgResponse {
    pub events: Vec<ModuleEvent>,
    pub log: Vec<String>,
}

/// Executes one kind of host message.
pub trait MsgHandler<Ctx: InterchainAccountExecutionContext> {
    /// Applies `msg` to the host state. Any error fails the whole relayed
    /// transaction, whose writes are then rolled back.
    fn handle(&self, ctx: &mut Ctx, msg: &Ctx::Msg) -> Result<MsgResponse, InterchainAccountError>;
}

/// Resolves the handler for a message route.
pub trait MsgRouter<Ctx: InterchainAccountExecutionContext> {
    fn route(&self, route: &str) -> Option<&dyn MsgHandler<Ctx>>;
}
