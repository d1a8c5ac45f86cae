pub mod config;
pub mod data;
pub mod error;
pub mod html;
pub mod platform;

#[cfg(test)]
pub mod testing;
