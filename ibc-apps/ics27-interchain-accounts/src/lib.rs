//! Implementation of the channel-bound Interchain Accounts application logic.
//!
//! Note: to be consistent with the naming convention used across `ibc-rs`:
//! + We call "chain A" the controller chain, which owns the channel end the
//!   requests are sent from and receives the result packets
//! + We call "chain B" the host chain, on which the interchain accounts live
//!   and relayed transactions are executed
//! In variable names:
//! + `_a` implies "belongs to chain A"
//! + `on_b` implies "stored on chain B"
//!
//! The host never verifies a signature on a relayed transaction. Possession
//! of the inbound channel path stands in for a private key: every signer of a
//! relayed transaction must be an interchain account whose permission record
//! names exactly the channel path the packet arrived through.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod context;
pub mod controller;
pub mod host;
pub mod module;
pub mod query;
pub mod router;

/// Re-exports the data structures and domain types of the interchain
/// accounts application.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_interchain_accounts_types::*;
}
