//! Defines all interchain accounts event types
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

use crate::{AccountAddress, ChannelPath, TxHash, MODULE_ID_STR};

const EVENT_TYPE_REGISTER: &str = "interchain_account_register";
const EVENT_TYPE_RUN_TX: &str = "interchain_account_run_tx";
const EVENT_TYPE_RESULT: &str = "interchain_account_result";
const EVENT_TYPE_PACKET_ERROR: &str = "interchain_account_packet_error";

/// Event emitted once a registration request was processed.
pub struct RegisterEvent {
    pub path: ChannelPath,
    pub address: Option<AccountAddress>,
    pub success: bool,
}

impl From<RegisterEvent> for ModuleEvent {
    fn from(ev: RegisterEvent) -> Self {
        let RegisterEvent {
            path,
            address,
            success,
        } = ev;
        Self {
            kind: EVENT_TYPE_REGISTER.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("channel_path", path).into(),
                (
                    "address",
                    address.map(|a| a.to_string()).unwrap_or_default(),
                )
                    .into(),
                ("success", success).into(),
            ],
        }
    }
}

/// Event emitted once a relayed transaction was processed.
pub struct RunTxEvent {
    pub path: ChannelPath,
    pub hash: TxHash,
    pub code: u32,
}

impl From<RunTxEvent> for ModuleEvent {
    fn from(ev: RunTxEvent) -> Self {
        let RunTxEvent { path, hash, code } = ev;
        Self {
            kind: EVENT_TYPE_RUN_TX.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("channel_path", path).into(),
                ("tx_hash", hash).into(),
                ("code", code).into(),
            ],
        }
    }
}

/// Event emitted on the controller chain when a result packet comes back.
pub struct ResultEvent {
    pub path: ChannelPath,
    /// `register` or `run_tx`.
    pub request: &'static str,
    pub success: bool,
}

impl From<ResultEvent> for ModuleEvent {
    fn from(ev: ResultEvent) -> Self {
        let ResultEvent {
            path,
            request,
            success,
        } = ev;
        Self {
            kind: EVENT_TYPE_RESULT.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("channel_path", path).into(),
                ("request", request).into(),
                ("success", success).into(),
            ],
        }
    }
}

/// Event emitted when a packet could not be processed at all, for instance
/// because its data is not interchain accounts packet data.
pub struct PacketErrorEvent {
    pub path: ChannelPath,
    pub error: String,
}

impl From<PacketErrorEvent> for ModuleEvent {
    fn from(ev: PacketErrorEvent) -> Self {
        let PacketErrorEvent { path, error } = ev;
        Self {
            kind: EVENT_TYPE_PACKET_ERROR.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("channel_path", path).into(),
                ("error", error).into(),
            ],
        }
    }
}
