use alloc::collections::BTreeMap;
use core::cell::Cell;

use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::packet::{
    RegisterResultPacketData, RunTxResultPacketData,
};
use ibc_app_interchain_accounts::types::{
    Account, AccountAddress, ChainAccountTx, ChannelPath, InterchainMsg, Params,
};
use ibc_primitives::prelude::*;
use serde::{Deserialize, Serialize};

/// Route of the bank messages.
pub const BANK_ROUTE: &str = "bank";

/// Route of a handler that always fails after writing to the ledger.
pub const FAIL_ROUTE: &str = "fail";

/// Messages understood by the mock host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockMsg {
    /// Moves `amount` from `from` to `to`, creating `to` if needed.
    Send {
        from: AccountAddress,
        to: AccountAddress,
        amount: u64,
    },
    /// Credits `signer` and then fails.
    Fail { signer: AccountAddress },
    /// A message on an arbitrary route, with no handler unless one is added.
    Custom {
        signer: AccountAddress,
        route: String,
    },
}

impl InterchainMsg for MockMsg {
    fn signers(&self) -> Vec<AccountAddress> {
        match self {
            Self::Send { from, .. } => vec![*from],
            Self::Fail { signer } | Self::Custom { signer, .. } => vec![*signer],
        }
    }

    fn route(&self) -> &str {
        match self {
            Self::Send { .. } => BANK_ROUTE,
            Self::Fail { .. } => FAIL_ROUTE,
            Self::Custom { route, .. } => route,
        }
    }
}

/// Encodes messages the way [`MockInterchainHost`] decodes relayed
/// transactions.
pub fn encode_tx(msgs: &[MockMsg]) -> Vec<u8> {
    serde_json::to_vec(msgs).expect("MockMsg's infallible Serialize impl failed")
}

/// Decodes a relayed transaction produced by [`encode_tx`].
pub fn decode_tx(tx_bytes: &[u8]) -> Result<ChainAccountTx<MockMsg>, InterchainAccountError> {
    let msgs: Vec<MockMsg> =
        serde_json::from_slice(tx_bytes).map_err(|e| InterchainAccountError::DecodeTx {
            description: e.to_string(),
        })?;

    ChainAccountTx::new(msgs)
}

/// Everything the mock host persists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockLedgerState {
    pub accounts: BTreeMap<AccountAddress, Account>,
    pub balances: BTreeMap<AccountAddress, u64>,
    /// The interchain accounts module store, keyed by store path.
    pub store: BTreeMap<String, Vec<u8>>,
}

/// An in-memory host chain running the interchain accounts application.
#[derive(Debug)]
pub struct MockInterchainHost {
    pub(crate) params: Params,
    pub(crate) state: MockLedgerState,
    /// Working copy of `state` while a cache layer is open.
    pub(crate) cache: Option<MockLedgerState>,
    /// Number of account and permission lookups served so far.
    pub(crate) ledger_reads: Cell<usize>,
    /// Makes every permission write fail, to exercise host errors.
    pub fail_permission_writes: bool,
    pub register_results: Vec<(ChannelPath, RegisterResultPacketData)>,
    pub run_tx_results: Vec<(ChannelPath, RunTxResultPacketData)>,
}

impl Default for MockInterchainHost {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

impl MockInterchainHost {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            state: MockLedgerState::default(),
            cache: None,
            ledger_reads: Cell::new(0),
            fail_permission_writes: false,
            register_results: Vec::new(),
            run_tx_results: Vec::new(),
        }
    }

    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    /// Committed state, ignoring any open cache layer.
    pub fn committed(&self) -> &MockLedgerState {
        &self.state
    }

    pub fn ledger_reads(&self) -> usize {
        self.ledger_reads.get()
    }

    pub fn account(&self, address: &AccountAddress) -> Option<&Account> {
        self.view().accounts.get(address)
    }

    pub fn balance(&self, address: &AccountAddress) -> u64 {
        self.view().balances.get(address).copied().unwrap_or_default()
    }

    /// Sends funds to `address` from outside the application, creating a
    /// normal account if none exists.
    pub fn fund(&mut self, address: AccountAddress, amount: u64) {
        let state = self.view_mut();
        state
            .accounts
            .entry(address)
            .or_insert_with(|| Account::new(address));
        *state.balances.entry(address).or_default() += amount;
    }

    /// Simulates a human-controlled account signing a transaction: the key
    /// is published and the sequence bumped.
    pub fn sign_with_key(&mut self, address: AccountAddress, pub_key: Vec<u8>) {
        let account = self
            .view_mut()
            .accounts
            .entry(address)
            .or_insert_with(|| Account::new(address));
        account.set_pub_key(pub_key);
        account.set_sequence(account.sequence() + 1);
    }

    /// Overwrites the sequence of an existing account, as replayed ledger
    /// history would.
    pub fn set_sequence(&mut self, address: &AccountAddress, sequence: u64) {
        if let Some(account) = self.view_mut().accounts.get_mut(address) {
            account.set_sequence(sequence);
        }
    }

    /// Moves funds between two accounts, as the bank handler does.
    pub fn transfer(
        &mut self,
        from: AccountAddress,
        to: AccountAddress,
        amount: u64,
    ) -> Result<(), InterchainAccountError> {
        let available = self.balance(&from);
        if available < amount {
            return Err(InterchainAccountError::host(format!(
                "insufficient funds: {from} holds {available}, needs {amount}"
            )));
        }

        let state = self.view_mut();
        *state.balances.entry(from).or_default() -= amount;
        state.accounts.entry(to).or_insert_with(|| Account::new(to));
        *state.balances.entry(to).or_default() += amount;

        Ok(())
    }

    pub(crate) fn view(&self) -> &MockLedgerState {
        self.cache.as_ref().unwrap_or(&self.state)
    }

    pub(crate) fn view_mut(&mut self) -> &mut MockLedgerState {
        self.cache.as_mut().unwrap_or(&mut self.state)
    }
}
