//! Defines the context traits the host chain implements to run the
//! interchain accounts application.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::packet::{
    RegisterResultPacketData, RunTxResultPacketData,
};
use ibc_app_interchain_accounts_types::{
    Account, AccountAddress, ChainAccountTx, ChannelPath, InterchainMsg, Params,
};

/// Read access to the host state, to be implemented by the host
pub trait InterchainAccountValidationContext {
    /// The host's message type, as carried by relayed transactions.
    type Msg: InterchainMsg;

    /// Returns the host parameters of the application.
    fn get_params(&self) -> Result<Params, InterchainAccountError>;

    /// Looks up an account on the host ledger.
    fn get_account(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<Account>, InterchainAccountError>;

    /// Returns the channel path an interchain account is bound to, as stored
    /// under its [`PermissionPath`](ibc_app_interchain_accounts_types::path::PermissionPath).
    fn get_permission(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<ChannelPath>, InterchainAccountError>;

    /// Decodes the raw bytes of a relayed transaction.
    ///
    /// Must fail with [`InterchainAccountError::DecodeTx`] or
    /// [`InterchainAccountError::EmptyTx`] and must not touch the ledger.
    fn decode_tx(
        &self,
        tx_bytes: &[u8],
    ) -> Result<ChainAccountTx<Self::Msg>, InterchainAccountError>;
}

/// Write access to the host state, to be implemented by the host
pub trait InterchainAccountExecutionContext: InterchainAccountValidationContext {
    /// Creates a new account at `address`. The account is not persisted
    /// until it is passed to [`store_account`](Self::store_account).
    fn new_account(&mut self, address: AccountAddress) -> Result<Account, InterchainAccountError>;

    /// Persists an account on the host ledger.
    fn store_account(&mut self, account: Account) -> Result<(), InterchainAccountError>;

    /// Binds an interchain account to the channel path that owns it.
    fn store_permission(
        &mut self,
        address: AccountAddress,
        path: ChannelPath,
    ) -> Result<(), InterchainAccountError>;

    /// Opens a cache layer over the host state.
    ///
    /// Every write made until the matching [`cache_commit`](Self::cache_commit)
    /// or [`cache_discard`](Self::cache_discard), including writes made by
    /// message handlers, must be visible to later reads but must only reach
    /// the underlying state on commit.
    fn cache_begin(&mut self) -> Result<(), InterchainAccountError>;

    /// Applies the writes buffered since [`cache_begin`](Self::cache_begin).
    fn cache_commit(&mut self) -> Result<(), InterchainAccountError>;

    /// Drops the writes buffered since [`cache_begin`](Self::cache_begin).
    fn cache_discard(&mut self);

    /// Called on the controller chain when a registration result comes back.
    fn on_register_result(
        &mut self,
        _path: &ChannelPath,
        _result: &RegisterResultPacketData,
    ) -> Result<(), InterchainAccountError> {
        Ok(())
    }

    /// Called on the controller chain when a transaction result comes back.
    fn on_run_tx_result(
        &mut self,
        _path: &ChannelPath,
        _result: &RunTxResultPacketData,
    ) -> Result<(), InterchainAccountError> {
        Ok(())
    }
}

/// Runs `f` inside a cache layer, committing its writes only if it succeeds.
pub fn with_cache<Ctx, T, F>(ctx: &mut Ctx, f: F) -> Result<T, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
    F: FnOnce(&mut Ctx) -> Result<T, InterchainAccountError>,
{
    ctx.cache_begin()?;

    match f(ctx) {
        Ok(value) => match ctx.cache_commit() {
            Ok(()) => Ok(value),
            Err(e) => {
                ctx.cache_discard();
                Err(e)
            }
        },
        Err(e) => {
            ctx.cache_discard();
            Err(e)
        }
    }
}
