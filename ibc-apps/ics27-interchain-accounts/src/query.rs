//! Read-only queries over the interchain accounts state.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{AccountAddress, ChannelPath};

use crate::context::InterchainAccountValidationContext;

/// Returns the channel path controlling `address`, or `None` if `address` is
/// not currently a valid interchain account.
pub fn query_interchain_account<Ctx>(
    ctx_b: &Ctx,
    address: &AccountAddress,
) -> Result<Option<ChannelPath>, InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    match ctx_b.get_account(address)? {
        Some(account) if account.is_interchain() => ctx_b.get_permission(address),
        _ => Ok(None),
    }
}
