//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting HueWheel");

    let config = huewheel_app::load_config(std::env::args().nth(1));
    pollster::block_on(huewheel_app::App::run_with_config(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
