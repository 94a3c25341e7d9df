use makerbadge_lib::config::ServiceConfig;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("makerbadge_lib=debug,info")),
        )
        .init();

    let port = std::env::var("MAKERBADGE_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(17237);

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config error: {}", e);
            std::process::exit(2);
        }
    };

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    rt.block_on(async move {
        if let Err(e) = makerbadge_lib::server::start_server(config, port).await {
            eprintln!("server error: {}", e);
            std::process::exit(1);
        }
    });
}
