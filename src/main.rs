//! Feed Grabber - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use feed_grabber::{
    cli::Args,
    config::{validate_config, validate_profile, Config, RunMode},
    download::process_profile,
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_) | Error::Api(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::Io(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let list_only = args.no_download;
    if !list_only {
        print_banner();
    }

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;
    let profile = validate_profile(&args.profile)?;

    if !list_only {
        print_config_summary(
            &profile,
            &config.options.run_mode.to_string(),
            &config.download_directory().display().to_string(),
        );
        print_info(&format!("Processing profile: {}", profile));
    }

    let state = process_profile(&config, &profile, &mut std::io::stdout()).await?;

    if state.posts_found == 0 {
        print_warning("No posts were found for this profile");
    }

    if config.options.run_mode == RunMode::Download {
        print_run_stats(&state);
    }

    Ok(())
}
