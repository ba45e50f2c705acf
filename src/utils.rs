pub fn init_globals() {
    // stdout carries the move protocol, diagnostics go to stderr only
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();
}
