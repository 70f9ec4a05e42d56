pub fn init_logging() {
    // Паник-хук ставится один раз при создании Storefront
    log("HotPay storefront core WASM initialized");
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}
