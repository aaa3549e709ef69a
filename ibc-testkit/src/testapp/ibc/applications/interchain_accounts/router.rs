use alloc::collections::BTreeMap;

use ibc_app_interchain_accounts::router::{MsgHandler, MsgResponse, MsgRouter};
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_primitives::prelude::*;

use super::types::{MockInterchainHost, MockMsg, BANK_ROUTE, FAIL_ROUTE};

/// Executes [`MockMsg::Send`].
pub struct BankHandler;

impl MsgHandler<MockInterchainHost> for BankHandler {
    fn handle(
        &self,
        ctx: &mut MockInterchainHost,
        msg: &MockMsg,
    ) -> Result<MsgResponse, InterchainAccountError> {
        let MockMsg::Send { from, to, amount } = msg else {
            return Err(InterchainAccountError::host("bank handler got a non-bank msg"));
        };

        ctx.transfer(*from, *to, *amount)?;

        Ok(MsgResponse {
            events: Vec::new(),
            log: vec![format!("sent {amount} from {from} to {to}")],
        })
    }
}

/// Executes [`MockMsg::Fail`]: credits the signer, then fails.
pub struct FailHandler;

impl MsgHandler<MockInterchainHost> for FailHandler {
    fn handle(
        &self,
        ctx: &mut MockInterchainHost,
        msg: &MockMsg,
    ) -> Result<MsgResponse, InterchainAccountError> {
        if let MockMsg::Fail { signer } = msg {
            ctx.fund(*signer, 1_000);
        }

        Err(InterchainAccountError::host("handler failed on purpose"))
    }
}

#[derive(Default)]
pub struct MockRouter {
    handlers: BTreeMap<String, Box<dyn MsgHandler<MockInterchainHost>>>,
}

impl MockRouter {
    /// Returns a router serving the bank and fail routes.
    pub fn new_with_bank() -> Self {
        let mut router = Self::default();

        router
            .add_route(BANK_ROUTE, BankHandler)
            .expect("Never fails");
        router
            .add_route(FAIL_ROUTE, FailHandler)
            .expect("Never fails");

        router
    }

    pub fn add_route(
        &mut self,
        route: &str,
        handler: impl MsgHandler<MockInterchainHost> + 'static,
    ) -> Result<(), String> {
        match self.handlers.insert(route.to_string(), Box::new(handler)) {
            None => Ok(()),
            Some(_) => Err("Duplicate route".to_owned()),
        }
    }
}

impl MsgRouter<MockInterchainHost> for MockRouter {
    fn route(&self, route: &str) -> Option<&dyn MsgHandler<MockInterchainHost>> {
        self.handlers.get(route).map(|handler| handler.as_ref())
    }
}
