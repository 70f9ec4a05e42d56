// WASM-слой: биндинги для браузерной витрины

pub mod bindings;
pub mod console;
