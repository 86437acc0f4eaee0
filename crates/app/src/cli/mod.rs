use clap::{Parser, Subcommand};
use consign_app::{
    config::AppConfig,
    context::{AppContext, AppInitError},
};

mod contacts;
mod db;
mod products;

#[derive(Debug, Parser)]
#[command(name = "consign", about = "Product order tracker", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Contacts(contacts::ContactsCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => products::run(&self.config, command).await,
            Commands::Contacts(command) => contacts::run(&self.config, command).await,
            Commands::Db(command) => db::run(&self.config, command).await,
        }
    }
}

async fn connect(config: &AppConfig) -> Result<AppContext, String> {
    AppContext::from_database_url(&config.database.database_url)
        .await
        .map_err(|AppInitError::Database(error)| format!("failed to connect to database: {error}"))
}
