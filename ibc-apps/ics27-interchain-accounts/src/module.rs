//! Packet dispatch of the interchain accounts application.
//!
//! Every inbound packet is processed to completion and yields at most one
//! outbound result packet. Errors never leave this module: they are turned
//! into result packets, events and log lines.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::events::{
    PacketErrorEvent, RegisterEvent, ResultEvent, RunTxEvent,
};
use ibc_app_interchain_accounts_types::packet::{
    InterchainAccountPacketData, RegisterPacketData, RegisterResultPacketData, RunTxPacketData,
    RunTxResultPacketData,
};
use ibc_app_interchain_accounts_types::ChannelPath;
use ibc_core_channel_types::packet::Packet;
use ibc_core_router_types::module::ModuleExtras;
use ibc_primitives::prelude::*;
use tracing::{debug, warn};

use crate::context::InterchainAccountExecutionContext;
use crate::controller::decode_packet_data;
use crate::host::handler::{register_interchain_account, run_tx};
use crate::router::MsgRouter;

/// Handles an IBC packet received by the interchain accounts module.
///
/// The packet's source port and channel form the channel path the request is
/// authorized against. Returns the result packet data to send back, if any.
pub fn on_recv_packet_execute<Ctx, R>(
    ctx: &mut Ctx,
    router: &R,
    packet: &Packet,
) -> (ModuleExtras, Option<InterchainAccountPacketData>)
where
    Ctx: InterchainAccountExecutionContext,
    R: MsgRouter<Ctx> + ?Sized,
{
    let path = ChannelPath::new(packet.port_id_on_a.clone(), packet.chan_id_on_a.clone());

    process_packet(ctx, router, &path, &packet.data)
}

/// Dispatches raw packet data that arrived through `path` on its kind.
///
/// Requests always produce a result: `Register` a
/// [`RegisterResultPacketData`], `RunTx` a [`RunTxResultPacketData`] keyed
/// by the hash of the raw transaction bytes. Result packets are handed to
/// the controller hooks and produce nothing. Data that cannot be parsed at
/// all produces nothing either, since its kind is unknown.
pub fn process_packet<Ctx, R>(
    ctx: &mut Ctx,
    router: &R,
    path: &ChannelPath,
    data: &[u8],
) -> (ModuleExtras, Option<InterchainAccountPacketData>)
where
    Ctx: InterchainAccountExecutionContext,
    R: MsgRouter<Ctx> + ?Sized,
{
    let packet_data = match decode_packet_data(data) {
        Ok(packet_data) => packet_data,
        Err(e) => {
            warn!(%path, error = %e, "dropping undecodable interchain accounts packet");
            let mut extras = ModuleExtras::empty();
            extras.log.push(format!("{path}: {e}"));
            extras.events.push(
                PacketErrorEvent {
                    path: path.clone(),
                    error: e.to_string(),
                }
                .into(),
            );
            return (extras, None);
        }
    };

    match packet_data {
        InterchainAccountPacketData::Register(data) => {
            let (extras, result) = recv_register(ctx, path, &data);
            (
                extras,
                Some(InterchainAccountPacketData::RegisterResult(result)),
            )
        }
        InterchainAccountPacketData::RunTx(data) => {
            let (extras, result) = recv_run_tx(ctx, router, path, &data);
            (extras, Some(InterchainAccountPacketData::RunTxResult(result)))
        }
        InterchainAccountPacketData::RegisterResult(result) => {
            let outcome = ctx.on_register_result(path, &result);
            (recv_result(path, "register", result.success, outcome), None)
        }
        InterchainAccountPacketData::RunTxResult(result) => {
            let outcome = ctx.on_run_tx_result(path, &result);
            (recv_result(path, "run_tx", result.is_ok(), outcome), None)
        }
    }
}

fn recv_register<Ctx>(
    ctx_b: &mut Ctx,
    path_on_b: &ChannelPath,
    data: &RegisterPacketData,
) -> (ModuleExtras, RegisterResultPacketData)
where
    Ctx: InterchainAccountExecutionContext,
{
    let mut extras = ModuleExtras::empty();

    let result = match register_interchain_account(ctx_b, path_on_b, &data.salt) {
        Ok(address) => {
            debug!(path = %path_on_b, %address, "registered interchain account");
            extras
                .log
                .push(format!("registered interchain account {address} for {path_on_b}"));
            RegisterResultPacketData::success(address)
        }
        Err(e) => {
            warn!(path = %path_on_b, error = %e, "interchain account registration failed");
            extras
                .log
                .push(format!("registration for {path_on_b} failed: {e}"));
            RegisterResultPacketData::failure()
        }
    };

    extras.events.push(
        RegisterEvent {
            path: path_on_b.clone(),
            address: result.address,
            success: result.success,
        }
        .into(),
    );

    (extras, result)
}

fn recv_run_tx<Ctx, R>(
    ctx_b: &mut Ctx,
    router: &R,
    path_on_b: &ChannelPath,
    data: &RunTxPacketData,
) -> (ModuleExtras, RunTxResultPacketData)
where
    Ctx: InterchainAccountExecutionContext,
    R: MsgRouter<Ctx> + ?Sized,
{
    let hash = data.hash();

    let (mut extras, result) = match run_tx(ctx_b, router, path_on_b, &data.tx_bytes) {
        Ok(extras) => {
            debug!(path = %path_on_b, %hash, "relayed transaction executed");
            (extras, RunTxResultPacketData::ok(hash))
        }
        Err(e) => {
            warn!(path = %path_on_b, %hash, error = %e, "relayed transaction failed");
            let result = match e {
                InterchainAccountError::DecodeTx { .. } | InterchainAccountError::EmptyTx => {
                    RunTxResultPacketData::decode_failed(hash)
                }
                _ => RunTxResultPacketData::err(hash),
            };
            let mut extras = ModuleExtras::empty();
            extras.log.push(format!("transaction {hash} failed: {e}"));
            (extras, result)
        }
    };

    extras.events.push(
        RunTxEvent {
            path: path_on_b.clone(),
            hash,
            code: result.code,
        }
        .into(),
    );

    (extras, result)
}

fn recv_result(
    path_on_a: &ChannelPath,
    request: &'static str,
    success: bool,
    outcome: Result<(), InterchainAccountError>,
) -> ModuleExtras {
    let mut extras = ModuleExtras::empty();

    if let Err(e) = outcome {
        warn!(path = %path_on_a, request, error = %e, "result packet callback failed");
        extras
            .log
            .push(format!("{request} result callback for {path_on_a} failed: {e}"));
    }

    extras.events.push(
        ResultEvent {
            path: path_on_a.clone(),
            request,
            success,
        }
        .into(),
    );

    extras
}
