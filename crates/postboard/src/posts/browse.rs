use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use postboard_core::feed::{AuthorFilter, Feed, PageView, SortOrder, User, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::fetch_posts;
use crate::users::fetch_users;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BrowseOptions {
    /// Initial author filter: a numeric user id, or "all"
    #[arg(short, long, env = "POSTBOARD_USER", default_value = "all")]
    pub user: String,

    /// Initial title sort direction: asc, desc
    #[arg(short, long, env = "POSTBOARD_SORT", default_value = "asc")]
    pub sort: String,

    /// Number of posts per page
    #[arg(
        short,
        long,
        env = "POSTBOARD_LIMIT",
        default_value = "6",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: usize,
}

/// One selection event in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseCommand {
    NextPage,
    PreviousPage,
    Filter(AuthorFilter),
    Sort(SortOrder),
    Open(u64),
    Quit,
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    let filter = super::parse_author_filter(&options.user)?;
    let sort = super::parse_sort_order(&options.sort)?;

    if global.verbose {
        eprintln!("Starting interactive session...");
    }

    let client = reqwest::Client::new();
    let (posts, users) = futures::try_join!(
        fetch_posts(&client, &global.api),
        fetch_users(&client, &global.api)
    )?;

    // The collections are fetched exactly once; every event below only
    // touches in-memory state.
    let mut feed = Feed::new(posts, options.limit);
    feed.set_sort_order(sort);
    feed.set_author_filter(filter);

    print!("{}", format_page(&feed.current_page(), feed.state(), &users));

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::NextPage) => {
                let view = feed.next_page();
                print!("{}", format_page(&view, feed.state(), &users));
            }
            Ok(BrowseCommand::PreviousPage) => {
                let view = feed.previous_page();
                print!("{}", format_page(&view, feed.state(), &users));
            }
            Ok(BrowseCommand::Filter(filter)) => {
                let view = feed.set_author_filter(filter);
                print!("{}", format_page(&view, feed.state(), &users));
            }
            Ok(BrowseCommand::Sort(sort)) => {
                let view = feed.set_sort_order(sort);
                print!("{}", format_page(&view, feed.state(), &users));
            }
            Ok(BrowseCommand::Open(post_id)) => {
                // The detail view fetches on demand; a failure here does not
                // end the session.
                match super::read::read_post_data(&global.api, post_id).await {
                    Ok(output) => print!("{}", super::read::format_post_text(&output)),
                    Err(err) => println!("{}", format!("{err}").red()),
                }
            }
            Err(message) => {
                println!("{}", message.yellow());
                println!("{}", usage_line());
            }
        }
    }

    Ok(())
}

fn parse_command(input: &str) -> std::result::Result<BrowseCommand, String> {
    let mut parts = input.split_whitespace();

    match parts.next() {
        Some("n") | Some("next") => Ok(BrowseCommand::NextPage),
        Some("p") | Some("prev") => Ok(BrowseCommand::PreviousPage),
        Some("u") | Some("user") => {
            let arg = parts.next().ok_or("Usage: u <id|all>".to_string())?;
            if arg.eq_ignore_ascii_case("all") {
                Ok(BrowseCommand::Filter(AuthorFilter::All))
            } else {
                arg.parse::<u64>()
                    .map(|id| BrowseCommand::Filter(AuthorFilter::User(id)))
                    .map_err(|_| format!("Invalid user id: {arg}"))
            }
        }
        Some("s") | Some("sort") => match parts.next() {
            Some("asc") => Ok(BrowseCommand::Sort(SortOrder::Ascending)),
            Some("desc") => Ok(BrowseCommand::Sort(SortOrder::Descending)),
            _ => Err("Usage: s <asc|desc>".to_string()),
        },
        Some("o") | Some("open") => {
            let arg = parts.next().ok_or("Usage: o <post id>".to_string())?;
            arg.parse::<u64>()
                .map(BrowseCommand::Open)
                .map_err(|_| format!("Invalid post id: {arg}"))
        }
        Some("q") | Some("quit") => Ok(BrowseCommand::Quit),
        Some(other) => Err(format!("Unknown command: {other}")),
        None => Err(usage_line()),
    }
}

fn usage_line() -> String {
    "Commands: [n]ext, [p]rev, [u]ser <id|all>, [s]ort <asc|desc>, [o]pen <id>, [q]uit".to_string()
}

/// Render the current page plus the navigation footer.
///
/// The first/last flags from the view drive which navigation keys are shown
/// enabled, mirroring the disabled buttons of the original UI.
fn format_page(view: &PageView, state: &ViewState, users: &[User]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "POSTS (user: {}, sort: {}, page {})",
            state.filter, state.sort, state.page
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if view.posts.is_empty() {
        result.push_str(&format!("\n{}\n", "No posts on this page.".yellow()));
    } else {
        for post in &view.posts {
            let author = postboard_core::feed::author_name(users, post.user_id)
                .unwrap_or("(unknown)")
                .to_string();
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", post.id).yellow().bold(),
                post.title.white().bold()
            ));
            result.push_str(&format!(
                "    {}: {} | {}: {}\n",
                "By".green(),
                author.bright_white(),
                "Open".green(),
                format!("o {}", post.id).cyan()
            ));
        }
    }

    let next_label = if view.is_last_page {
        "[n]ext (unavailable)".bright_black().to_string()
    } else {
        "[n]ext".green().to_string()
    };
    let prev_label = if view.is_first_page {
        "[p]rev (unavailable)".bright_black().to_string()
    } else {
        "[p]rev".green().to_string()
    };

    result.push_str(&format!(
        "\n{} | {} | {} | {} | {} | {}\n",
        next_label,
        prev_label,
        "[u]ser <id|all>".green(),
        "[s]ort <asc|desc>".green(),
        "[o]pen <id>".green(),
        "[q]uit".green()
    ));

    result
}
