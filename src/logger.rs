use env_logger::Env;

/// `RUST_LOG` wins; otherwise `info` and up is printed.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
