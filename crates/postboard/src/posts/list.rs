use crate::prelude::{println, *};
use colored::Colorize;
use postboard_core::feed::{self, AuthorFilter, ListItem, ListOutput, SortOrder, ViewState};

use super::{fetch_posts, truncate_text};
use crate::users::fetch_users;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Author filter: a numeric user id, or "all"
    #[arg(short, long, env = "POSTBOARD_USER", default_value = "all")]
    pub user: String,

    /// Title sort direction: asc, desc
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

    /// Page number (1-indexed)
    #[arg(
        short,
        long,
        default_value = "1",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let filter = super::parse_author_filter(&options.user)?;
    let sort = super::parse_sort_order(&options.sort)?;

    if global.verbose {
        println!("Fetching posts (user: {}, sort: {})...", filter, sort);
    }

    let list_output =
        list_posts_data(&global.api, filter, sort, options.limit, options.page).await?;

    if options.json {
        output_json(&list_output)?;
    } else {
        output_formatted(&list_output)?;
    }

    Ok(())
}

/// Fetches the post and user collections and returns the requested page as a
/// structured ListOutput
pub async fn list_posts_data(
    api_base: &str,
    filter: AuthorFilter,
    sort: SortOrder,
    limit: usize,
    page: usize,
) -> Result<ListOutput> {
    let client = reqwest::Client::new();

    // Both collections are fetched once per invocation; the derivation below
    // is pure.
    let (posts, users) = futures::try_join!(
        fetch_posts(&client, api_base),
        fetch_users(&client, api_base)
    )?;

    let mut state = ViewState::new(limit);
    state.filter = filter;
    state.sort = sort;
    state.page = page;

    let filtered = feed::compute_filtered_view(&posts, &state);

    // An empty result is valid (unknown author ids land here); only an
    // out-of-range page on a non-empty view is rejected.
    if !filtered.is_empty() {
        feed::page_bounds(filtered.len(), page, limit).map_err(|e| eyre!("{}", e))?;
    }

    let view = feed::page_view(&filtered, &state);
    Ok(feed::transform_posts(&view.posts, &users, &state, filtered.len()))
}

/// Convert list output to JSON string
fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert list output to formatted text with colors
fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "POSTS (user: {}, sort: {}, page {} of {})",
            output.filter,
            output.sort,
            pagination.current_page,
            pagination.total_pages.max(1)
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No posts on this page.".yellow()));
    } else {
        for (idx, item) in output.items.iter().enumerate() {
            let post_num = (pagination.current_page - 1) * pagination.limit + idx + 1;
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{post_num}]").yellow().bold(),
                item.title.white().bold()
            ));

            result.push_str(&format!(
                "    {}: {} | {}: {} | {}: {}\n",
                "By".green(),
                item.author
                    .as_ref()
                    .unwrap_or(&"(unknown)".to_string())
                    .bright_white(),
                "User".green(),
                item.user_id.to_string().bright_yellow(),
                "ID".green(),
                item.id.to_string().bright_white()
            ));

            result.push_str(&format!(
                "    {}\n",
                truncate_text(&item.body, 120).bright_black()
            ));

            result.push_str(&format!(
                "    {}: {}\n",
                "Read".green(),
                format!("postboard posts read {}", item.id).cyan()
            ));
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.max(1).to_string().bright_cyan().bold(),
        pagination.total_items.to_string().bright_cyan().bold(),
        "matching posts".bright_white()
    ));

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &pagination.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &pagination.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To filter by author".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        "postboard posts list --user <id|all>".cyan()
    ));

    result.push_str(&format!("\n{}:\n", "To sort titles".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        "postboard posts list --sort <asc|desc>".cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To change page size".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        "postboard posts list --limit <number>".cyan()
    ));

    result.push_str(&format!("\n{}:\n", "To read a post".bright_white().bold()));
    result.push_str(&format!("  {}\n", "postboard posts read <id>".cyan()));
    if !output.items.is_empty() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("postboard posts read {}", output.items[0].id).cyan()
        ));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "postboard posts list --json".cyan()));

    result.push('\n');
    result
}

fn output_json(output: &ListOutput) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ListOutput) -> Result<()> {
    let formatted = format_list_text(output);
    print!("{}", formatted);
    Ok(())
}
