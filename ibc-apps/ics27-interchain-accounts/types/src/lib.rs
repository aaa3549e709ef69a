//! Data structures and domain types of the channel-bound Interchain Accounts
//! application.
//!
//! An interchain account lives on a host chain and is controlled exclusively
//! through packets arriving over one specific channel. No signature travels
//! with a relayed transaction: the host trusts the transport layer to
//! authenticate the channel a packet came through, and each signer of a
//! relayed transaction must be an interchain account bound to exactly that
//! channel.
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

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod account;
mod address;
mod channel_path;
mod params;
mod tx;

pub use account::*;
pub use address::*;
pub use channel_path::*;
pub use params::*;
pub use tx::*;
pub mod error;
pub mod events;
pub mod packet;
pub mod path;

/// Module identifier for the interchain accounts application.
pub const MODULE_ID_STR: &str = "interchainaccounts";

/// The port identifier the interchain accounts application typically binds
/// with.
pub const PORT_ID_STR: &str = "interchainaccount";

/// Result code of a relayed transaction that ran to completion.
pub const CODE_OK: u32 = 0;

/// Result code of a relayed transaction that was rejected or rolled back.
pub const CODE_ERR: u32 = 1;
