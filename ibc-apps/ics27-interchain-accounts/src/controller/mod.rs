//! Controller chain side of the application: building request packet data
//! and (de)serializing packet data.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::packet::{
    InterchainAccountPacketData, RegisterPacketData, RunTxPacketData,
};
use ibc_app_interchain_accounts_types::TxHash;
use ibc_primitives::prelude::*;

/// Serializes packet data into the bytes carried by an IBC packet.
pub fn encode_packet_data(
    data: &InterchainAccountPacketData,
) -> Result<Vec<u8>, InterchainAccountError> {
    serde_json::to_vec(data).map_err(|e| InterchainAccountError::PacketDataSerialization {
        description: e.to_string(),
    })
}

/// Parses the bytes carried by an IBC packet.
pub fn decode_packet_data(
    bytes: &[u8],
) -> Result<InterchainAccountPacketData, InterchainAccountError> {
    serde_json::from_slice(bytes).map_err(|_| InterchainAccountError::PacketDataDeserialization)
}

/// Builds the packet data asking the host to register the interchain account
/// derived from the sending channel and `salt`.
pub fn register_packet_data(salt: impl Into<Vec<u8>>) -> Result<Vec<u8>, InterchainAccountError> {
    encode_packet_data(&InterchainAccountPacketData::Register(RegisterPacketData {
        salt: salt.into(),
    }))
}

/// Builds the packet data asking the host to run an encoded transaction.
///
/// Also returns the hash the host will echo in its result packet.
pub fn run_tx_packet_data(
    tx_bytes: impl Into<Vec<u8>>,
) -> Result<(Vec<u8>, TxHash), InterchainAccountError> {
    let data = RunTxPacketData {
        tx_bytes: tx_bytes.into(),
    };
    let hash = data.hash();

    Ok((
        encode_packet_data(&InterchainAccountPacketData::RunTx(data))?,
        hash,
    ))
}
