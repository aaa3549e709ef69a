use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::ChannelPath;
use ibc_core_router_types::module::ModuleExtras;

use super::{authorize_tx, execute_tx};
use crate::context::InterchainAccountExecutionContext;
use crate::router::MsgRouter;

/// Decodes, authorizes and executes a relayed transaction.
///
/// Decoding happens first and never reads the ledger, so malformed bytes are
/// rejected before any state is touched.
pub fn run_tx<Ctx, R>(
    ctx_b: &mut Ctx,
    router: &R,
    path_on_b: &ChannelPath,
    tx_bytes: &[u8],
) -> Result<ModuleExtras, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
    R: MsgRouter<Ctx> + ?Sized,
{
    let tx = ctx_b.decode_tx(tx_bytes)?;

    if !ctx_b.get_params()?.host_enabled {
        return Err(InterchainAccountError::HostDisabled);
    }

    authorize_tx(ctx_b, path_on_b, &tx)?;

    execute_tx(ctx_b, router, tx)
}
