//! Defines the interchain accounts error type
use displaydoc::Display;
use ibc_primitives::prelude::*;

use crate::{AccountAddress, ChannelPath};

#[derive(Display, Debug)]
pub enum InterchainAccountError {
    /// host error: `{description}`
    Host { description: String },
    /// account `{address}` already exists and is not an interchain account
    AccountAlreadyExists { address: AccountAddress },
    /// signer `{signer}` is not an interchain account bound to `{path}`
    Unauthorized {
        signer: AccountAddress,
        path: ChannelPath,
    },
    /// no handler is registered for route `{route}`
    UnroutableMsg { route: String },
    /// route `{route}` is not allowed on this host
    RouteNotAllowed { route: String },
    /// msg `{index}` with route `{route}` failed: `{reason}`
    MsgFailed {
        index: usize,
        route: String,
        reason: String,
    },
    /// failed to decode transaction: `{description}`
    DecodeTx { description: String },
    /// transaction carries no messages
    EmptyTx,
    /// failed to deserialize packet data
    PacketDataDeserialization,
    /// failed to serialize packet data: `{description}`
    PacketDataSerialization { description: String },
    /// interchain accounts host is disabled
    HostDisabled,
    /// invalid channel path `{path}`: `{description}`
    InvalidChannelPath { path: String, description: String },
    /// invalid account address `{address}`: `{description}`
    InvalidAddress {
        address: String,
        description: String,
    },
    /// invalid params: `{description}`
    InvalidParams { description: String },
}

impl InterchainAccountError {
    /// Wraps a failure reported by the host ledger or store.
    pub fn host(description: impl ToString) -> Self {
        Self::Host {
            description: description.to_string(),
        }
    }

    /// Returns true if the error stems from the host itself rather than from
    /// the packet being processed.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Host { .. })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterchainAccountError {}
