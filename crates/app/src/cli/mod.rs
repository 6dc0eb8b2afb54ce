use clap::{Parser, Subcommand};

mod db;
mod manager;

#[derive(Debug, Parser)]
#[command(name = "customers-app", about = "Customers CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Manager(manager::ManagerCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Manager(command) => manager::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
