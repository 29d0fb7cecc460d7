use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use hackernews_api::cli::{Cli, Commands, ConfigCommands};
use hackernews_api::config::{StaticConfig, get_config, init_config};
use hackernews_api::errors::AppError;
use hackernews_api::graphql::schema_sdl;
use hackernews_api::runtime::modes::run_server;
use hackernews_api::system::init_logging;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let Cli { config, command } = Cli::parse();

    match command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config.as_deref()).await,
        Commands::PrintSchema => {
            println!("{}", schema_sdl());
            ExitCode::SUCCESS
        }
        Commands::Config {
            action: ConfigCommands::Generate { output_path },
        } => {
            let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());
            match StaticConfig::default().save_to_file(&path) {
                Ok(()) => {
                    println!("Sample configuration written to {}", path);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    init_config(config_path);
    let config = get_config();

    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_server(&config).await {
        error!("Server exited with error: {:#}", e);
        if let Some(app_error) = e.downcast_ref::<AppError>() {
            eprintln!("{}", app_error.format_colored());
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
