mod commands;
mod terminal;

use std::process::ExitCode;

use commands::privilege::{self, Privilege};
use commands::{CommandLine, Commands, check, menu, run};
use netrevive_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    let code: ExitCode = match commands.command() {
        Commands::Check => check::check(&cfg).await?,
        Commands::Run => match privilege::ensure_privileges(cfg.quiet).await? {
            Privilege::Elevated => run::run(&cfg).await?,
            Privilege::HandedOff => ExitCode::SUCCESS,
        },
        Commands::Menu => match privilege::ensure_privileges(cfg.quiet).await? {
            Privilege::Elevated => {
                menu::menu(&cfg).await?;
                ExitCode::SUCCESS
            }
            Privilege::HandedOff => ExitCode::SUCCESS,
        },
    };

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(code)
}
