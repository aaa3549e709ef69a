use ibc_primitives::prelude::*;

use crate::AccountAddress;

/// Who controls an account on the host ledger.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Controlled by whoever holds the private key.
    Normal,
    /// Controlled only through packets relayed over the channel recorded in
    /// the permission store.
    Interchain,
}

/// The slice of a host ledger account the interchain accounts application
/// reads and writes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    address: AccountAddress,
    sequence: u64,
    pub_key: Option<Vec<u8>>,
    kind: AccountKind,
}

impl Account {
    /// Creates a fresh normal account: sequence zero, no public key.
    pub fn new(address: AccountAddress) -> Self {
        Self {
            address,
            sequence: 0,
            pub_key: None,
            kind: AccountKind::Normal,
        }
    }

    pub fn address(&self) -> &AccountAddress {
        &self.address
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn set_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }

    pub fn pub_key(&self) -> Option<&[u8]> {
        self.pub_key.as_deref()
    }

    /// Publishes a public key for the account.
    ///
    /// An account with a published key is controlled by that key, so it is
    /// always demoted to [`AccountKind::Normal`].
    pub fn set_pub_key(&mut self, pub_key: Vec<u8>) {
        self.pub_key = Some(pub_key);
        self.kind = AccountKind::Normal;
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Returns true if the account may only be driven by relayed packets.
    pub fn is_interchain(&self) -> bool {
        self.kind == AccountKind::Interchain && self.pub_key.is_none()
    }

    /// Returns true for a normal account that never signed anything: it may
    /// hold funds sent to it, but nobody has claimed it.
    pub fn is_unused(&self) -> bool {
        self.kind == AccountKind::Normal && self.sequence == 0 && self.pub_key.is_none()
    }

    /// Marks the account as an interchain account.
    ///
    /// The sequence is set to exactly 1 alongside the kind, which keeps the
    /// account recognisable to ledgers that only inspect the
    /// `sequence == 1 && pub_key == None` marker. Only the registration
    /// handler calls this.
    pub fn into_interchain(mut self) -> Self {
        self.kind = AccountKind::Interchain;
        self.sequence = 1;
        self
    }
}
