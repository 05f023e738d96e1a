use std::io;

use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let json = std::env::args().any(|arg| arg == "--json");

    let stdin = io::stdin();
    let stdout = io::stdout();
    bus_fare::cli::run(&mut stdin.lock(), &mut stdout.lock(), json)
}
