//! Command-line interface definitions.
//!
//! Defines the CLI structure for roflswap using `clap`. Every subcommand reads
//! the same TOML configuration; the private key always comes from the
//! environment.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::token::Token;

/// WATER/FIRE swaps on the ROFLSwap dark-pool exchange
#[derive(Parser, Debug)]
#[command(name = "roflswap")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the roflswap CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Approve the sold token and place an order
    Swap(SwapArgs),

    /// Estimate what a swap would return at the reference price
    Quote(QuoteArgs),

    /// Inspect or switch the wallet's network
    #[command(subcommand)]
    Network(NetworkCommand),

    /// Wallet utilities
    #[command(subcommand)]
    Wallet(WalletCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `roflswap network`.
#[derive(Subcommand, Debug)]
pub enum NetworkCommand {
    /// Show the chain the wallet is on and whether it is the required one.
    Status(ConfigPathArg),
    /// Move the wallet to the required chain.
    Switch(ConfigPathArg),
}

/// Subcommands for `roflswap wallet`.
#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// Display the wallet address derived from the private key.
    Address(ConfigPathArg),
}

/// Subcommands for `roflswap config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `swap` subcommand.
#[derive(Parser, Debug)]
pub struct SwapArgs {
    /// Token to sell (water or fire); the other one is received.
    #[arg(long)]
    pub from: Token,

    /// Amount to sell, e.g. 10.5
    #[arg(long)]
    pub amount: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Token to sell (water or fire).
    #[arg(long)]
    pub from: Token,

    /// Amount to sell.
    #[arg(long)]
    pub amount: String,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_command() {
        let cli = Cli::try_parse_from([
            "roflswap", "swap", "--from", "water", "--amount", "10.5",
        ])
        .unwrap();
        if let Commands::Swap(args) = cli.command {
            assert_eq!(args.from, Token::Water);
            assert_eq!(args.amount, "10.5");
            assert!(!args.yes);
        } else {
            panic!("Expected Swap command");
        }
    }

    #[test]
    fn test_swap_accepts_uppercase_token_and_yes() {
        let cli = Cli::try_parse_from([
            "roflswap", "swap", "--from", "FIRE", "--amount", "1", "-y",
        ])
        .unwrap();
        if let Commands::Swap(args) = cli.command {
            assert_eq!(args.from, Token::Fire);
            assert!(args.yes);
        } else {
            panic!("Expected Swap command");
        }
    }

    #[test]
    fn test_swap_rejects_unknown_token() {
        let result = Cli::try_parse_from([
            "roflswap", "swap", "--from", "earth", "--amount", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_swap_requires_amount() {
        let result = Cli::try_parse_from(["roflswap", "swap", "--from", "water"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quote_command_with_config() {
        let cli = Cli::try_parse_from([
            "roflswap", "quote", "--from", "fire", "--amount", "3", "-c", "custom.toml",
        ])
        .unwrap();
        if let Commands::Quote(args) = cli.command {
            assert_eq!(args.from, Token::Fire);
            assert_eq!(args.config, PathBuf::from("custom.toml"));
        } else {
            panic!("Expected Quote command");
        }
    }

    #[test]
    fn test_network_commands() {
        let cli = Cli::try_parse_from(["roflswap", "network", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Network(NetworkCommand::Status(_))
        ));
        let cli = Cli::try_parse_from(["roflswap", "network", "switch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Network(NetworkCommand::Switch(_))
        ));
    }

    #[test]
    fn test_wallet_address_command() {
        let cli = Cli::try_parse_from(["roflswap", "wallet", "address"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Wallet(WalletCommand::Address(_))
        ));
    }

    #[test]
    fn test_config_init_with_force() {
        let cli = Cli::try_parse_from(["roflswap", "config", "init", "out.toml", "--force"])
            .unwrap();
        if let Commands::Config(ConfigCommand::Init(args)) = cli.command {
            assert!(args.force);
            assert_eq!(args.path, PathBuf::from("out.toml"));
        } else {
            panic!("Expected Config Init command");
        }
    }

    #[test]
    fn test_config_default_path() {
        let cli = Cli::try_parse_from(["roflswap", "config", "show"]).unwrap();
        if let Commands::Config(ConfigCommand::Show(arg)) = cli.command {
            assert_eq!(arg.config, paths::default_config());
        } else {
            panic!("Expected Config Show command");
        }
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["roflswap"]).is_err());
    }

    #[test]
    fn test_invalid_color_value() {
        let result = Cli::try_parse_from(["roflswap", "--color", "invalid", "wallet", "address"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli = Cli::try_parse_from([
            "roflswap", "quote", "--from", "water", "--amount", "1", "--json", "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorChoice::Auto));
    }
}
