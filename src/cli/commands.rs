//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::ConfigAction;
use block_downscale::config::{self, Config};

/// Handle config subcommand actions.
///
/// `path` overrides the default config location.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let cfg = match Config::load(Some(config_path.as_path())) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            match cfg.to_toml() {
                Ok(text) => {
                    println!("Current configuration:");
                    println!();
                    print!("{}", text);
                    println!();
                }
                Err(e) => {
                    eprintln!("Error rendering configuration: {}", e);
                    std::process::exit(1);
                }
            }

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => match config::init(&config_path) {
            Ok(()) => println!("Created config file: {}", config_path.display()),
            Err(config::ConfigError::AlreadyExists { path }) => {
                eprintln!("Config file already exists: {}", path.display());
                eprintln!("Use 'block-downscale config show' to view current settings.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
