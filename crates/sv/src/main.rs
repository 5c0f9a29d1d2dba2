use anyhow::Result;

fn main() -> Result<()> {

    // SV_LOG=debug sv sort ...
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("SV_LOG"))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let matches = sv::get_cli().get_matches_from(wild::args());
    sv::main_cli(&matches)
}
