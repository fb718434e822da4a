use clap::Parser;
use dotenvy::dotenv;
use hr_portal::{
    cli::{self, Cli, PortalContext},
    config::{
        self,
        database::{create_connection, create_tables, get_database_url},
    },
    core::{CredentialHasher, DatabaseStore, LeaveBook, PortalData, SessionStore, UserRepository},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Tracing to stderr so command output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Environment, then portal.toml
    dotenv().ok();
    let config = config::load_app_configuration()?;
    let cli = Cli::parse();

    // 3. Durable storage
    let db = create_connection(&get_database_url())
        .await
        .inspect_err(|e| error!("Failed to open database: {}", e))?;
    create_tables(&db).await?;
    let store = DatabaseStore::new(db);

    // 4. Generated collections and persisted state
    let hasher = CredentialHasher::new(&config.security)?;
    let today = chrono::Local::now().date_naive();
    let data = PortalData::generate(&mut rand::thread_rng(), today, config, &hasher)?;
    info!(
        "Generated {} attendance records and {} payslips",
        data.attendance.len(),
        data.salaries.len()
    );

    let users = UserRepository::init(store.clone(), &data.seed_users).await?;
    let session =
        SessionStore::bootstrap(users, hasher, data.config().signup.clone()).await?;
    let leave = LeaveBook::init(store.clone(), &data.seed_leave_requests).await?;

    // 5. Run one command
    let mut ctx = PortalContext::new(data, session, leave, store);
    let output = cli::dispatch(&mut ctx, cli.command)
        .await
        .inspect_err(|e| error!("Command failed: {}", e))?;
    println!("{output}");

    Ok(())
}
