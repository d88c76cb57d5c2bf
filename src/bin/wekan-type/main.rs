use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use wekan_type::cli::Cli;
use wekan_type::logging::init_logging;
use wekan_type::mongo::Connection;
use wekan_type::report::run;
use wekan_type::ConnectionConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.debug);

    let config = ConnectionConfig::from(&args);
    let conn = Connection::open(&config)
        .await
        .with_context(|| format!("Failed to connect to MongoDB at {}", config.host))?;

    let result = run(
        conn.boards(),
        &args.title,
        args.new_type.as_deref(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;
    conn.close().await;
    Ok(result?)
}
