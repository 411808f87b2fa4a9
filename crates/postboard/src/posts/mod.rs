use crate::prelude::{println, *};
use postboard_core::feed::{AuthorFilter, Comment, Post, SortOrder};
use regex::Regex;

pub mod browse;
pub mod list;
pub mod read;

// Re-export public data functions
pub use list::list_posts_data;
pub use read::read_post_data;

#[derive(Debug, clap::Parser)]
#[command(name = "posts")]
#[command(about = "Blog post operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List posts with author filtering, title sorting and pagination
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Read a single post and its comments
    #[clap(name = "read")]
    Read(read::ReadOptions),

    /// Browse posts interactively
    #[clap(name = "browse")]
    Browse(browse::BrowseOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("API Base: {}", global.api);
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Read(options) => read::run(options, global).await,
        Commands::Browse(options) => browse::run(options, global).await,
    }
}

// Shared utility functions
pub fn parse_author_filter(input: &str) -> Result<AuthorFilter> {
    if input.eq_ignore_ascii_case("all") {
        return Ok(AuthorFilter::All);
    }

    input.parse::<u64>().map(AuthorFilter::User).map_err(|_| {
        eyre!(
            "Invalid user filter: {}. Use a numeric user id or \"all\"",
            input
        )
    })
}

pub fn parse_sort_order(input: &str) -> Result<SortOrder> {
    match input {
        "asc" => Ok(SortOrder::Ascending),
        "desc" => Ok(SortOrder::Descending),
        _ => Err(eyre!(
            "Invalid sort order: {}. Valid orders: asc, desc",
            input
        )),
    }
}

pub fn extract_post_id(input: &str) -> Result<u64> {
    // Try to parse as number first
    if let Ok(id) = input.parse::<u64>() {
        return Ok(id);
    }

    // Try to extract from URL
    let re = Regex::new(r"/posts/(\d+)").unwrap();
    if let Some(caps) = re.captures(input) {
        if let Some(id_match) = caps.get(1) {
            return id_match
                .as_str()
                .parse::<u64>()
                .map_err(|_| eyre!("Failed to parse post ID from URL"));
        }
    }

    Err(eyre!("Invalid post ID or URL: {}", input))
}

pub async fn fetch_posts(client: &reqwest::Client, api_base: &str) -> Result<Vec<Post>> {
    let url = format!("{api_base}/posts");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch posts: {}", e))?;

    if !response.status().is_success() {
        return Err(eyre!("Failed to fetch posts: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse posts: {}", e))
}

pub async fn fetch_post(client: &reqwest::Client, api_base: &str, id: u64) -> Result<Post> {
    let url = format!("{api_base}/posts/{id}");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch post {}: {}", id, e))?;

    if !response.status().is_success() {
        return Err(eyre!(
            "Failed to fetch post {}: HTTP {}",
            id,
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse post {}: {}", id, e))
}

pub async fn fetch_comments(
    client: &reqwest::Client,
    api_base: &str,
    post_id: u64,
) -> Result<Vec<Comment>> {
    let url = format!("{api_base}/posts/{post_id}/comments");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch comments for post {}: {}", post_id, e))?;

    if !response.status().is_success() {
        return Err(eyre!(
            "Failed to fetch comments for post {}: HTTP {}",
            post_id,
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse comments for post {}: {}", post_id, e))
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_author_filter_all() {
        assert_eq!(parse_author_filter("all").unwrap(), AuthorFilter::All);
        assert_eq!(parse_author_filter("ALL").unwrap(), AuthorFilter::All);
    }

    #[test]
    fn test_parse_author_filter_id() {
        assert_eq!(parse_author_filter("7").unwrap(), AuthorFilter::User(7));
    }

    #[test]
    fn test_parse_author_filter_invalid() {
        assert!(parse_author_filter("seven").is_err());
        assert!(parse_author_filter("-1").is_err());
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!(parse_sort_order("asc").unwrap(), SortOrder::Ascending);
        assert_eq!(parse_sort_order("desc").unwrap(), SortOrder::Descending);
        assert!(parse_sort_order("up").is_err());
    }

    #[test]
    fn test_extract_post_id_numeric() {
        assert_eq!(extract_post_id("42").unwrap(), 42);
    }

    #[test]
    fn test_extract_post_id_from_url() {
        assert_eq!(
            extract_post_id("https://jsonplaceholder.typicode.com/posts/17").unwrap(),
            17
        );
        assert_eq!(
            extract_post_id("https://jsonplaceholder.typicode.com/posts/17/comments").unwrap(),
            17
        );
    }

    #[test]
    fn test_extract_post_id_invalid() {
        assert!(extract_post_id("not-a-post").is_err());
        assert!(extract_post_id("https://example.com/users/3").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        // Char-based truncation must not split a multibyte sequence.
        assert_eq!(truncate_text("ééééé", 3), "ééé...");
    }
}
