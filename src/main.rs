use clap::Parser;
use tokio::signal;
use tracing::info;

use roflswap::adapter::inbound::cli::command::{
    Cli, Commands, ConfigCommand, NetworkCommand, WalletCommand,
};
use roflswap::adapter::inbound::cli::output::{self, OutputConfig};
use roflswap::adapter::inbound::cli::{config, network, operator, quote, swap, wallet};
use roflswap::error::Result;
use roflswap::infrastructure::config::logging::LoggingConfig;
use roflswap::infrastructure::operator::entry::Operator;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose), cli.color);
    init_logging(&cli);
    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("operator already installed");
        std::process::exit(1);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            output::error(&format!("failed to start runtime: {e}"));
            std::process::exit(1);
        }
    };

    let command = cli.command;
    let code = runtime.block_on(async move {
        tokio::select! {
            result = dispatch(command) => match result {
                Ok(()) => 0,
                Err(e) => {
                    output::error(&e.to_string());
                    1
                }
            },
            _ = signal::ctrl_c() => {
                info!("Interrupted");
                output::error("interrupted; transactions already sent may still be mined");
                130
            }
        }
    });
    std::process::exit(code);
}

/// Logging follows the config file's `[logging]` section when it can be read.
/// `-v` raises the level and `--quiet` lowers it.
fn init_logging(cli: &Cli) {
    let mut logging = config_path(&cli.command)
        .and_then(LoggingConfig::from_file)
        .unwrap_or_default();

    match (cli.quiet, output::verbosity()) {
        (true, _) => logging.level = "error".into(),
        (false, 0) => {}
        (false, 1) => logging.level = "debug".into(),
        (false, _) => logging.level = "trace".into(),
    }
    logging.init();
}

fn config_path(command: &Commands) -> Option<&std::path::Path> {
    match command {
        Commands::Swap(args) => Some(&args.config),
        Commands::Quote(args) => Some(&args.config),
        Commands::Network(NetworkCommand::Status(arg) | NetworkCommand::Switch(arg))
        | Commands::Wallet(WalletCommand::Address(arg))
        | Commands::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => {
            Some(&arg.config)
        }
        Commands::Config(ConfigCommand::Init(_)) => None,
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Swap(args) => swap::execute(&args).await,
        Commands::Quote(args) => quote::execute(&args),
        Commands::Network(NetworkCommand::Status(arg)) => network::execute_status(&arg.config).await,
        Commands::Network(NetworkCommand::Switch(arg)) => network::execute_switch(&arg.config).await,
        Commands::Wallet(WalletCommand::Address(arg)) => wallet::execute_address(&arg.config),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}
