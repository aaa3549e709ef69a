//! Contains the packet data exchanged between a controller chain and the
//! interchain accounts host.
use ibc_primitives::prelude::*;

use crate::{AccountAddress, TxHash, CODE_ERR, CODE_OK};

/// Diagnostic returned when a relayed transaction cannot be decoded.
pub const DECODE_FAILED: &str = "decode failed";

/// Every kind of packet the interchain accounts application understands.
///
/// Requests travel from the controller chain to the host; results travel
/// back. Adding a kind forces every `match` over this type to handle it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterchainAccountPacketData {
    Register(RegisterPacketData),
    RunTx(RunTxPacketData),
    RegisterResult(RegisterResultPacketData),
    RunTxResult(RunTxResultPacketData),
}

impl InterchainAccountPacketData {
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Register(_) | Self::RunTx(_))
    }
}

/// Asks the host to create the interchain account derived from the inbound
/// channel path and `salt`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterPacketData {
    pub salt: Vec<u8>,
}

/// Asks the host to authorize and execute an encoded transaction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunTxPacketData {
    pub tx_bytes: Vec<u8>,
}

impl RunTxPacketData {
    /// Content hash identifying the transaction in its result packet.
    pub fn hash(&self) -> TxHash {
        TxHash::of(&self.tx_bytes)
    }
}

/// Outcome of a [`RegisterPacketData`] request.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterResultPacketData {
    /// The registered address; `None` when registration failed.
    pub address: Option<AccountAddress>,
    pub success: bool,
}

impl RegisterResultPacketData {
    pub fn success(address: AccountAddress) -> Self {
        Self {
            address: Some(address),
            success: true,
        }
    }

    pub fn failure() -> Self {
        Self {
            address: None,
            success: false,
        }
    }
}

/// Outcome of a [`RunTxPacketData`] request.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunTxResultPacketData {
    pub hash: TxHash,
    /// [`CODE_OK`] or [`CODE_ERR`].
    pub code: u32,
    pub data: Vec<u8>,
}

impl RunTxResultPacketData {
    pub fn ok(hash: TxHash) -> Self {
        Self {
            hash,
            code: CODE_OK,
            data: Vec::new(),
        }
    }

    pub fn err(hash: TxHash) -> Self {
        Self {
            hash,
            code: CODE_ERR,
            data: Vec::new(),
        }
    }

    pub fn decode_failed(hash: TxHash) -> Self {
        Self {
            hash,
            code: CODE_ERR,
            data: DECODE_FAILED.as_bytes().to_vec(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}
