pub mod context;
pub mod router;
pub mod types;
