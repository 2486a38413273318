//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Halve an image, keeping sharp 2x2 detail such as checkerboards
#[derive(Parser, Debug)]
#[command(name = "block-downscale")]
#[command(version, about = "Edge-preserving 2x image downscaler", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to downscale ("-" reads stdin) [default: image.png]
    pub input: Option<PathBuf>,

    /// Output PNG path ("-" writes stdout) [default: downscaled.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and skip the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["block-downscale"]);
        assert!(args.command.is_none());
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_args_input_and_output() {
        let args = Args::parse_from(["block-downscale", "photo.png", "-o", "half.png"]);
        assert_eq!(args.input, Some(PathBuf::from("photo.png")));
        assert_eq!(args.output, Some(PathBuf::from("half.png")));

        let args = Args::parse_from(["block-downscale", "--output", "x.png"]);
        assert!(args.input.is_none());
        assert_eq!(args.output, Some(PathBuf::from("x.png")));
    }

    #[test]
    fn test_args_stdio_dashes() {
        let args = Args::parse_from(["block-downscale", "-", "-o", "-"]);
        assert_eq!(args.input, Some(PathBuf::from("-")));
        assert_eq!(args.output, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_args_verbosity() {
        let args = Args::parse_from(["block-downscale", "-vv"]);
        assert_eq!(args.verbose, 2);

        let args = Args::parse_from(["block-downscale", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_args_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["block-downscale", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["block-downscale", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["block-downscale", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["block-downscale", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_with_path() {
        let args = Args::parse_from(["block-downscale", "config", "init", "-c", "/tmp/c.toml"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
