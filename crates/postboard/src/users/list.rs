use crate::prelude::{println, *};
use colored::Colorize;
use postboard_core::feed::User;

use super::fetch_users;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching users...");
    }

    let users = list_users_data(&global.api).await?;

    if options.json {
        println!("{}", format_users_json(&users)?);
    } else if users.is_empty() {
        println!("No users found.");
    } else {
        let table = build_users_table(&users);
        println!("{}", table);
        println!(
            "{}: {}",
            "To list a user's posts".bright_white().bold(),
            "postboard posts list --user <id>".cyan()
        );
    }

    Ok(())
}

/// Fetches the user collection
pub async fn list_users_data(api_base: &str) -> Result<Vec<User>> {
    let client = reqwest::Client::new();
    fetch_users(&client, api_base).await
}

/// Convert the user collection to JSON string
fn format_users_json(users: &[User]) -> Result<String> {
    serde_json::to_string_pretty(users).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn build_users_table(users: &[User]) -> prettytable::Table {
    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Username".bold().cyan(),
        "Email".bold().cyan()
    ]);

    for user in users {
        table.add_row(prettytable::row![
            user.id,
            user.name,
            user.username.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-")
        ]);
    }

    table
}
