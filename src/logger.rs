use log::LevelFilter;

/// Initialize the logger with the specified level; RUST_LOG still wins.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter(None, level)
        .init();
}
