use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{derive_address, AccountAddress, ChannelPath};

use crate::context::{with_cache, InterchainAccountExecutionContext};

/// Registers the interchain account owned by `path_on_b` for `salt`.
///
/// The account address is derived from the channel path and the salt. A
/// missing account is created. An existing account is only taken over if it
/// already is an interchain account bound to the same path, or, when the
/// host allows it, if it is a normal account that never signed anything.
/// Any other existing account is a conflicting claim on the address and
/// fails with [`InterchainAccountError::AccountAlreadyExists`].
///
/// Registering twice with the same path and salt is idempotent. Either both
/// the account and its permission record are written, or neither is.
pub fn register_interchain_account<Ctx>(
    ctx_b: &mut Ctx,
    path_on_b: &ChannelPath,
    salt: &[u8],
) -> Result<AccountAddress, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let params = ctx_b.get_params()?;

    if !params.host_enabled {
        return Err(InterchainAccountError::HostDisabled);
    }

    let address = derive_address(path_on_b, salt);

    with_cache(ctx_b, |ctx_b| {
        let account = match ctx_b.get_account(&address)? {
            None => ctx_b.new_account(address)?,
            Some(account) if account.is_interchain() => {
                // `path || salt` is ambiguous as a byte string, so another
                // channel may derive the same address. It must not take over.
                if ctx_b.get_permission(&address)?.as_ref() != Some(path_on_b) {
                    return Err(InterchainAccountError::AccountAlreadyExists { address });
                }
                account
            }
            Some(account) if params.claim_unused_accounts && account.is_unused() => account,
            Some(_) => return Err(InterchainAccountError::AccountAlreadyExists { address }),
        };

        ctx_b.store_account(account.into_interchain())?;
        ctx_b.store_permission(address, path_on_b.clone())?;

        Ok(address)
    })
}
