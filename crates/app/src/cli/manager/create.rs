use clap::Args;
use customers_app::{
    auth::PgAuthService,
    database::{self, Db, PoolSettings},
};
use zeroize::Zeroizing;

#[derive(Debug, Args)]
pub(crate) struct CreateManagerArgs {
    /// Login used for basic auth
    #[arg(long)]
    login: String,

    /// Manager password; only a salted hash is stored
    #[arg(long, env = "MANAGER_PASSWORD", hide_env_values = true)]
    password: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateManagerArgs) -> Result<(), String> {
    if args.login.trim().is_empty() {
        return Err("login cannot be empty".to_string());
    }

    if args.password.is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let settings = PoolSettings::default();

    let pool = database::connect(&args.database_url, &settings)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool, settings.statement_timeout);
    let service = PgAuthService::new(db.clone());

    let result = service
        .create_manager(&args.login, Zeroizing::new(args.password))
        .await
        .map_err(|error| format!("failed to create manager: {error}"));

    db.close().await;

    let manager = result?;

    #[expect(clippy::print_stdout, reason = "CLI output")]
    {
        println!("manager_id: {}", manager.id);
        println!("manager_login: {}", manager.login);
        println!("manager_created: {}", manager.created);
    }

    Ok(())
}
