pub mod interchain_accounts;
