mod cli;

use block_downscale::config::Config;
use block_downscale::{io, pipeline};
use clap::Parser;
use cli::{handle_config_action, Args, Command};
use log::LevelFilter;

/// Install the logger. `-q` and `-v` beat the config file, which beats
/// `RUST_LOG`; the fallback is `warn`.
fn init_logging(args: &Args, cfg: &Config) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let level = if args.quiet {
        Some(LevelFilter::Error)
    } else {
        match args.verbose {
            0 => cfg.log_level(),
            1 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder.format_timestamp(None).init();
}

/// Load the config file.
/// If --config is specified, require the file to exist.
/// Otherwise, fall back to defaults if the default config is missing or broken.
fn load_config(args: &Args) -> Config {
    if let Some(ref path) = args.config {
        match Config::load_from_explicit(path.clone()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load(None) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Some(Command::Config { action }) = args.command {
        handle_config_action(action, args.config.as_deref());
        return;
    }

    let cfg = load_config(&args);
    init_logging(&args, &cfg);

    // CLI > config > built-in default
    let input = args.input.clone().unwrap_or_else(|| cfg.paths.input.clone());
    let output = args.output.clone().unwrap_or_else(|| cfg.paths.output.clone());

    let mut source = io::open_source(&input);
    let mut sink = io::open_sink(&output);

    match pipeline::run(source.as_mut(), sink.as_mut()) {
        Ok(summary) => {
            if !args.quiet && !io::is_stdio(&output) {
                println!(
                    "Downscaled {} -> {} into {}",
                    summary.input,
                    summary.output,
                    output.display()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
