use alloc::collections::BTreeSet;

use ibc_primitives::prelude::*;

use crate::error::InterchainAccountError;
use crate::AccountAddress;

/// What the interchain accounts application needs to know about a message
/// carried by a relayed transaction. Everything else about the message is
/// the host router's business.
pub trait InterchainMsg {
    /// Addresses that must authorize this message.
    fn signers(&self) -> Vec<AccountAddress>;

    /// Key the host router dispatches this message on.
    fn route(&self) -> &str;
}

/// An ordered batch of messages relayed for execution on the host chain.
///
/// The batch carries no signatures. It is authorized as a whole by the
/// channel it arrived through, and executed as a whole or not at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainAccountTx<M> {
    msgs: Vec<M>,
}

impl<M: InterchainMsg> ChainAccountTx<M> {
    pub fn new(msgs: Vec<M>) -> Result<Self, InterchainAccountError> {
        if msgs.is_empty() {
            return Err(InterchainAccountError::EmptyTx);
        }

        Ok(Self { msgs })
    }

    pub fn msgs(&self) -> &[M] {
        &self.msgs
    }

    /// Returns the distinct signers of all messages, in the order they are
    /// first named.
    pub fn signers(&self) -> Vec<AccountAddress> {
        let mut seen = BTreeSet::new();

        self.msgs
            .iter()
            .flat_map(|msg| msg.signers())
            .filter(|signer| seen.insert(*signer))
            .collect()
    }
}
