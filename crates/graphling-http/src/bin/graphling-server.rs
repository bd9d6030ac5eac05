//! graphling server binary

use clap::Parser;

#[derive(Parser)]
#[command(name = "graphling-server")]
#[command(about = "In-memory graph database test server")]
#[command(version)]
struct Cli {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on (0 for an OS-assigned port)
    #[arg(short, long, default_value_t = 7470)]
    port: u16,
}

#[tokio::main]
async fn main() {
    graphling::telemetry::init();
    let cli = Cli::parse();
    if let Err(e) = graphling_http::start_server(&cli.host, cli.port).await {
        eprintln!("graphling-server: {e}");
        std::process::exit(1);
    }
}
