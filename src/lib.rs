pub mod config;
pub mod error;
pub mod notify;
pub mod scheduler;
pub mod shutdown;
pub mod store;
pub mod web;
