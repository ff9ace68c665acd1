pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod request_id;
pub mod services;
