pub mod handler;
pub mod service;

#[cfg(test)]
mod tests;
