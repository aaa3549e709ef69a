use ibc_app_interchain_accounts::context::{
    InterchainAccountExecutionContext, InterchainAccountValidationContext,
};
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::packet::{
    RegisterResultPacketData, RunTxResultPacketData,
};
use ibc_app_interchain_accounts::types::path::PermissionPath;
use ibc_app_interchain_accounts::types::{
    Account, AccountAddress, ChainAccountTx, ChannelPath, Params,
};
use ibc_primitives::prelude::*;

use super::types::{decode_tx, MockInterchainHost, MockMsg};

impl InterchainAccountValidationContext for MockInterchainHost {
    type Msg = MockMsg;

    fn get_params(&self) -> Result<Params, InterchainAccountError> {
        Ok(self.params.clone())
    }

    fn get_account(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<Account>, InterchainAccountError> {
        self.ledger_reads.set(self.ledger_reads.get() + 1);
        Ok(self.view().accounts.get(address).cloned())
    }

    fn get_permission(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<ChannelPath>, InterchainAccountError> {
        self.ledger_reads.set(self.ledger_reads.get() + 1);

        let key = PermissionPath::new(address).to_string();
        let Some(value) = self.view().store.get(&key) else {
            return Ok(None);
        };

        let path = core::str::from_utf8(value).map_err(InterchainAccountError::host)?;
        path.parse().map(Some)
    }

    fn decode_tx(
        &self,
        tx_bytes: &[u8],
    ) -> Result<ChainAccountTx<Self::Msg>, InterchainAccountError> {
        decode_tx(tx_bytes)
    }
}

impl InterchainAccountExecutionContext for MockInterchainHost {
    fn new_account(&mut self, address: AccountAddress) -> Result<Account, InterchainAccountError> {
        Ok(Account::new(address))
    }

    fn store_account(&mut self, account: Account) -> Result<(), InterchainAccountError> {
        self.view_mut().accounts.insert(*account.address(), account);
        Ok(())
    }

    fn store_permission(
        &mut self,
        address: AccountAddress,
        path: ChannelPath,
    ) -> Result<(), InterchainAccountError> {
        if self.fail_permission_writes {
            return Err(InterchainAccountError::host("permission store is read-only"));
        }

        self.view_mut().store.insert(
            PermissionPath::new(&address).to_string(),
            path.to_string().into_bytes(),
        );
        Ok(())
    }

    fn cache_begin(&mut self) -> Result<(), InterchainAccountError> {
        if self.cache.is_some() {
            return Err(InterchainAccountError::host("cache layer already open"));
        }

        self.cache = Some(self.state.clone());
        Ok(())
    }

    fn cache_commit(&mut self) -> Result<(), InterchainAccountError> {
        let cached = self
            .cache
            .take()
            .ok_or_else(|| InterchainAccountError::host("no cache layer to commit"))?;

        self.state = cached;
        Ok(())
    }

    fn cache_discard(&mut self) {
        self.cache = None;
    }

    fn on_register_result(
        &mut self,
        path: &ChannelPath,
        result: &RegisterResultPacketData,
    ) -> Result<(), InterchainAccountError> {
        self.register_results.push((path.clone(), result.clone()));
        Ok(())
    }

    fn on_run_tx_result(
        &mut self,
        path: &ChannelPath,
        result: &RunTxResultPacketData,
    ) -> Result<(), InterchainAccountError> {
        self.run_tx_results.push((path.clone(), result.clone()));
        Ok(())
    }
}
