use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(site_motion::config::log_level())
        .expect("error initializing log");

    info!("Starting site-motion");
    if let Err(e) = site_motion::start() {
        error!("site-motion failed to start: {}", e);
    }
}
