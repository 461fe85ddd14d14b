pub mod data_uri;
pub mod handler;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;
