use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{ChainAccountTx, InterchainMsg};
use ibc_core_router_types::module::ModuleExtras;
use ibc_primitives::prelude::*;

use crate::context::{with_cache, InterchainAccountExecutionContext};
use crate::router::MsgRouter;

/// Executes the messages of an authorized transaction in order.
///
/// Routes outside the host's allow list reject the transaction before any
/// message runs. Messages then run inside a single cache layer: the first
/// missing route or failing handler stops execution and discards the writes
/// of every message that ran before it.
pub fn execute_tx<Ctx, R>(
    ctx_b: &mut Ctx,
    router: &R,
    tx: ChainAccountTx<Ctx::Msg>,
) -> Result<ModuleExtras, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
    R: MsgRouter<Ctx> + ?Sized,
{
    let params = ctx_b.get_params()?;

    if let Some(msg) = tx.msgs().iter().find(|m| !params.is_route_allowed(m.route())) {
        return Err(InterchainAccountError::RouteNotAllowed {
            route: msg.route().to_string(),
        });
    }

    with_cache(ctx_b, |ctx_b| {
        let mut extras = ModuleExtras::empty();

        for (index, msg) in tx.msgs().iter().enumerate() {
            let route = msg.route();

            let handler = router
                .route(route)
                .ok_or_else(|| InterchainAccountError::UnroutableMsg {
                    route: route.to_string(),
                })?;

            let response =
                handler
                    .handle(ctx_b, msg)
                    .map_err(|e| InterchainAccountError::MsgFailed {
                        index,
                        route: route.to_string(),
                        reason: e.to_string(),
                    })?;

            extras.events.extend(response.events);
            extras.log.extend(response.log);
        }

        Ok(extras)
    })
}
