pub mod client;
pub mod error;
pub mod handler;
pub mod models;
pub mod service;


pub use models::*;
