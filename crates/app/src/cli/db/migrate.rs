use clap::Args;
use customers_app::database::{self, PoolSettings};

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, &PoolSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let result = database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"));

    pool.close().await;

    result?;

    #[expect(clippy::print_stdout, reason = "CLI output")]
    {
        println!("migrations applied");
    }

    Ok(())
}
