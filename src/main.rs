use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url_alias::config::{self, Environment};
use url_alias::server;

/// Alias-keyed URL shortener.
#[derive(Parser)]
#[command(name = "url-alias")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deployment environment; selects `.env.<env>` and logging defaults
    #[arg(long = "env", env = "APP_ENV", value_enum, default_value_t = Environment::Local)]
    environment: Environment,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Environment-specific file first, then the plain `.env`
    if dotenvy::from_filename(cli.environment.env_file()).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = config::load_from_env(cli.environment)?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().with_current_span(true).init();
    } else {
        builder.init();
    }
}
