use crate::prelude::{println, *};
use postboard_core::feed::User;

pub mod list;

// Re-export public data functions
pub use list::list_users_data;

#[derive(Debug, clap::Parser)]
#[command(name = "users")]
#[command(about = "Author operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the authors posts can be filtered by
    #[clap(name = "list")]
    List(list::ListOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("API Base: {}", global.api);
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
    }
}

pub async fn fetch_users(client: &reqwest::Client, api_base: &str) -> Result<Vec<User>> {
    let url = format!("{api_base}/users");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch users: {}", e))?;

    if !response.status().is_success() {
        return Err(eyre!("Failed to fetch users: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse users: {}", e))
}
