//! Entry point for the WASM application

pub fn main() {
    docintel_frontend::run();
}
