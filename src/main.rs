use std::sync::Arc;

use clap::Parser;
use studyhall::gateway::GeminiClient;
use studyhall::{router, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// API key for the generative-language service.
    #[clap(env)]
    gemini_api_key: String,

    /// Model identifier sent with every generation request.
    #[arg(long, env, default_value = "gemini-1.5-flash")]
    model: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:8080")]
    address: String,

    /// Mark session cookies as Secure (requires serving over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,studyhall=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let gateway = Arc::new(GeminiClient::new(args.gemini_api_key, args.model));
    let app = router(AppState::new(gateway, args.secure_cookies));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("listening on {address}");
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
