pub mod cli;
pub mod context;
pub mod ledger;
pub mod models;
pub mod session;
pub mod slots;
pub mod types;
pub mod week;
