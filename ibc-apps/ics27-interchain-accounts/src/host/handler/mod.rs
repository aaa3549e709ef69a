//! Implements the processing logic for requests arriving at the host chain.
mod authorize_tx;
mod execute_tx;
mod register_interchain_account;
mod run_tx;

pub use authorize_tx::*;
pub use execute_tx::*;
pub use register_interchain_account::*;
pub use run_tx::*;
