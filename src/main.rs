//! ApotekHjelper main entrypoint.

use apotekhjelper::run;
use apotekhjelper::ui::messages::error;

fn main() {
    // RUST_LOG=debug shows backend reads, cache hits and mutations
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("args: {:?}", std::env::args_os().collect::<Vec<_>>());

    if let Err(e) = run() {
        log::error!("{:?}", e);
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
