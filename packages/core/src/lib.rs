// HotPay Storefront Core
// Rust/WASM engine for the client-side engagement and persistence layer

#![warn(clippy::all)]

// Модули
pub mod checkout;
pub mod config;
pub mod engine;
pub mod settings;
pub mod state;
pub mod storage;
pub mod utils;

// Re-exports для удобства
pub use state::app::StorefrontState;

// WASM-specific bindings
#[cfg(target_arch = "wasm32")]
pub mod wasm;
