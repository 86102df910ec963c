use env_logger::Env;

pub use actix_web::middleware::Logger;

/// Initializes `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn setup_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
