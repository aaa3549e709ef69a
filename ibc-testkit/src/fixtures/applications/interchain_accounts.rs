use bon::builder;
use ibc_app_interchain_accounts::host::handler::register_interchain_account;
use ibc_app_interchain_accounts::types::{AccountAddress, ChannelPath, Params};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::timeout::{TimeoutHeight, TimeoutTimestamp};
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_primitives::prelude::*;

use crate::testapp::ibc::applications::interchain_accounts::types::MockInterchainHost;

/// Returns a dummy [`ChannelPath`], for testing purposes only!
pub fn dummy_channel_path(port_id: &str, channel_id: &str) -> ChannelPath {
    ChannelPath::new(
        port_id.parse().expect("valid port identifier"),
        channel_id.parse().expect("valid channel identifier"),
    )
}

/// Returns a [`MockInterchainHost`] with the given parameters and balances
/// already funded, for testing purposes only!
#[builder(finish_fn = build)]
pub fn dummy_interchain_host(
    #[builder(default)] params: Params,
    #[builder(default)] balances: Vec<(AccountAddress, u64)>,
) -> MockInterchainHost {
    let mut host = MockInterchainHost::new(params);

    for (address, amount) in balances {
        host.fund(address, amount);
    }

    host
}

/// Registers the interchain account of `path` for `salt` on `host` and
/// returns its address.
pub fn registered_interchain_account(
    host: &mut MockInterchainHost,
    path: &ChannelPath,
    salt: &[u8],
) -> AccountAddress {
    register_interchain_account(host, path, salt).expect("registration succeeds")
}

/// Returns a dummy [`Packet`] carrying `data` sent from the channel end at
/// `source`, for testing purposes only!
#[builder(finish_fn = build)]
pub fn dummy_interchain_account_packet(
    #[builder(start_fn)] data: Vec<u8>,
    source: ChannelPath,
    #[builder(default = Sequence::from(1))] seq_on_a: Sequence,
    #[builder(default = "icahost".parse::<PortId>().expect("valid port identifier"))]
    port_id_on_b: PortId,
    #[builder(default = ChannelId::new(0))] chan_id_on_b: ChannelId,
) -> Packet {
    Packet {
        seq_on_a,
        port_id_on_a: source.port_id().clone(),
        chan_id_on_a: source.channel_id().clone(),
        port_id_on_b,
        chan_id_on_b,
        data,
        timeout_height_on_b: TimeoutHeight::Never,
        timeout_timestamp_on_b: TimeoutTimestamp::Never,
    }
}
