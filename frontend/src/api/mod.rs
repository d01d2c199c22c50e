mod employees;
mod organizations;
mod shifts;
pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
