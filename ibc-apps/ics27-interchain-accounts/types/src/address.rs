//! Deterministic interchain account addresses and relayed transaction hashes.
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_primitives::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::InterchainAccountError;
use crate::ChannelPath;

/// Length in bytes of both [`AccountAddress`] and [`TxHash`].
pub const HASH_LEN: usize = 32;

fn sha256(chunks: &[&[u8]]) -> [u8; HASH_LEN] {
    let mut hasher = Sha256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    let digest = hasher.finalize();

    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&digest);
    out
}

fn decode_hash(s: &str) -> Result<[u8; HASH_LEN], String> {
    let bytes = hex::decode(s).map_err(|e| e.to_string())?;
    <[u8; HASH_LEN]>::try_from(bytes.as_slice())
        .map_err(|_| format!("expected {HASH_LEN} bytes, got {}", bytes.len()))
}

/// Address of an account on the host ledger.
///
/// Displayed and serialized as lowercase hex, like other account identifiers.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; HASH_LEN]);

impl AccountAddress {
    pub const fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for AccountAddress {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for AccountAddress {
    type Err = InterchainAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hash(s)
            .map(Self)
            .map_err(|description| InterchainAccountError::InvalidAddress {
                address: s.to_string(),
                description,
            })
    }
}

/// Derives the address of the interchain account owned by `path` for the
/// given `salt`.
///
/// The address is `sha256(path || salt)`, where `path` is rendered as
/// `{port_id}/{channel_id}`. Both chains compute the same address without
/// further communication, and registering twice with the same salt over the
/// same channel lands on the same account.
pub fn derive_address(path: &ChannelPath, salt: &[u8]) -> AccountAddress {
    AccountAddress(sha256(&[path.to_string().as_bytes(), salt]))
}

/// Content hash of a relayed transaction, computed over its raw encoded bytes.
///
/// Result packets carry it back so the controller chain can match a result
/// with the transaction it sent. Displayed and serialized as uppercase hex,
/// the way Tendermint renders transaction hashes. Parsing accepts either
/// case.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxHash([u8; HASH_LEN]);

impl TxHash {
    pub fn of(tx_bytes: &[u8]) -> Self {
        Self(sha256(&[tx_bytes]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Display for TxHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for TxHash {
    type Err = InterchainAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hash(s)
            .map(Self)
            .map_err(|description| InterchainAccountError::DecodeTx { description })
    }
}

/// Both hashes travel as hex strings inside JSON packet data.
macro_rules! impl_hex_serde {
    ($ty:ty) => {
        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_hex_serde!(AccountAddress);
impl_hex_serde!(TxHash);
