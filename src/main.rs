use clap::Parser;
use inspector::core::config::{self, CliOverrides, EnvOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inspector", about = "Compose and send actions to a running backend")]
struct Args {
    /// WebSocket URL of the server
    #[arg(short, long)]
    url: Option<String>,

    /// Backend config file declaring the actions (.yml, .yaml or .json)
    #[arg(short, long)]
    actions: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to inspector.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("inspector.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        &CliOverrides {
            url: args.url,
            actions: args.actions,
        },
    );
    log::info!("Inspector starting up against {}", resolved.server_url);

    let actions = match &resolved.actions_file {
        Some(path) => Some(config::load_actions(path).map_err(std::io::Error::other)?),
        None => {
            log::info!("No actions file configured");
            None
        }
    };

    inspector::tui::run(resolved, actions).await
}
