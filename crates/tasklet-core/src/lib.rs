pub mod config;
pub mod filter;
pub mod list;
pub mod persist;
pub mod row;
pub mod state;
pub mod store;
pub mod task;
pub mod theme;
