use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{ChainAccountTx, ChannelPath};

use crate::context::InterchainAccountValidationContext;

/// Checks that a relayed transaction may run on behalf of its signers.
///
/// Every distinct signer, taken in first-seen order, must be an interchain
/// account whose permission record equals `path_on_b` exactly. The first
/// signer failing either check rejects the whole transaction with
/// [`InterchainAccountError::Unauthorized`].
pub fn authorize_tx<Ctx>(
    ctx_b: &Ctx,
    path_on_b: &ChannelPath,
    tx: &ChainAccountTx<Ctx::Msg>,
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    for signer in tx.signers() {
        let unauthorized = || InterchainAccountError::Unauthorized {
            signer,
            path: path_on_b.clone(),
        };

        let is_interchain = ctx_b
            .get_account(&signer)?
            .is_some_and(|account| account.is_interchain());

        if !is_interchain {
            return Err(unauthorized());
        }

        if ctx_b.get_permission(&signer)?.as_ref() != Some(path_on_b) {
            return Err(unauthorized());
        }
    }

    Ok(())
}
