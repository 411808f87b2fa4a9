#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod error;
mod posts;
mod prelude;
mod users;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse posts, authors and comments from a JSONPlaceholder-style API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the REST API
    #[clap(
        long,
        env = "POSTBOARD_API",
        global = true,
        default_value = "https://jsonplaceholder.typicode.com"
    )]
    api: String,

    /// Whether to display additional information.
    #[clap(long, env = "POSTBOARD_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Blog post operations
    Posts(crate::posts::App),

    /// Author operations
    Users(crate::users::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Posts(sub_app) => crate::posts::run(sub_app, app.global).await,
        SubCommands::Users(sub_app) => crate::users::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
