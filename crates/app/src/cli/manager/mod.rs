use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct ManagerCommand {
    #[command(subcommand)]
    command: ManagerSubcommand,
}

#[derive(Debug, Subcommand)]
enum ManagerSubcommand {
    Create(create::CreateManagerArgs),
}

pub(crate) async fn run(command: ManagerCommand) -> Result<(), String> {
    match command.command {
        ManagerSubcommand::Create(args) => create::run(args).await,
    }
}
