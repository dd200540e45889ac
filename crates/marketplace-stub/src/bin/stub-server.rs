use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "stub-server",
    version,
    about = "In-memory marketplace item API for offline contract runs"
)]
struct Args {
    /// Bind address (IP or hostname)
    #[arg(long, default_value = "127.0.0.1")]
    addr: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging via tracing-subscriber with env filter support
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    marketplace_stub::start_server(&args.addr, args.port).await
}
