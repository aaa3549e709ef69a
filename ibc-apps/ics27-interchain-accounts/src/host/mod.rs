//! Host chain side of the application: registration, authorization and
//! execution of relayed transactions.
pub mod handler;
