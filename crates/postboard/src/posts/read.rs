use crate::prelude::{println, *};
use colored::Colorize;
use postboard_core::feed::{self, PostOutput};

use super::{extract_post_id, fetch_comments, fetch_post, truncate_text};
use crate::users::fetch_users;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReadOptions {
    /// Post ID or full URL (e.g., "7" or "https://jsonplaceholder.typicode.com/posts/7")
    pub post: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    let post_id = extract_post_id(&options.post)?;

    if global.verbose {
        println!("Fetching post ID: {}", post_id);
    }

    let output = read_post_data(&global.api, post_id).await?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output)?;
    }

    Ok(())
}

/// Fetches a post with its comments and returns it as a structured PostOutput
pub async fn read_post_data(api_base: &str, post_id: u64) -> Result<PostOutput> {
    let client = reqwest::Client::new();

    let (post, comments, users) = futures::try_join!(
        fetch_post(&client, api_base, post_id),
        fetch_comments(&client, api_base, post_id),
        fetch_users(&client, api_base)
    )?;

    let comment_outputs = feed::transform_comments(comments);
    Ok(feed::build_post_output(post, &users, comment_outputs))
}

/// Convert post output to JSON string
fn format_post_json(output: &PostOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert post output to formatted text with colors
pub fn format_post_text(output: &PostOutput) -> String {
    let mut result = String::new();

    // Post header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}: {}\n",
        "POST".bright_cyan().bold(),
        output.title.white().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "{}: {}\n",
        "Author".green(),
        output
            .author
            .as_ref()
            .unwrap_or(&"(unknown)".to_string())
            .bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "User".green(),
        output.user_id.to_string().bright_yellow()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "ID".green(),
        output.id.to_string().bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Comments".green(),
        output.total_comments.to_string().bright_magenta()
    ));

    result.push_str(&format!("\n{}\n", output.body.bright_white()));

    // Comments section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_magenta()));
    result.push_str(&format!(
        "{} ({} {})\n",
        "COMMENTS".bright_magenta().bold(),
        output.total_comments.to_string().bright_cyan().bold(),
        "total".bright_white()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));

    if output.comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments on this post.".yellow()));
    } else {
        for (idx, comment) in output.comments.iter().enumerate() {
            result.push_str(&format!(
                "\n{} {} {} ({})\n",
                format!("[Comment #{}]", idx + 1).yellow().bold(),
                "by".bright_black(),
                comment.name.bright_white(),
                comment.email.bright_black()
            ));
            result.push_str(&format!("{}\n", truncate_text(&comment.body, 500).white()));
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{}:\n",
        "To go back to the list".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("postboard posts list --user {}", output.user_id).cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("postboard posts read {} --json", output.id).cyan()
    ));
    result.push('\n');

    result
}

fn output_json(output: &PostOutput) -> Result<()> {
    let json = format_post_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &PostOutput) -> Result<()> {
    let formatted = format_post_text(output);
    print!("{}", formatted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::feed::CommentOutput;

    fn create_test_comment(id: u64, name: &str) -> CommentOutput {
        CommentOutput {
            id,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            body: "comment body".to_string(),
        }
    }

    fn create_test_output(comments: Vec<CommentOutput>) -> PostOutput {
        PostOutput {
            id: 7,
            user_id: 2,
            author: Some("Ervin Howell".to_string()),
            title: "A Post Title".to_string(),
            body: "the post body".to_string(),
            total_comments: comments.len(),
            comments,
        }
    }

    #[test]
    fn test_format_post_json_basic() {
        let output = create_test_output(vec![create_test_comment(1, "alice")]);

        let json = format_post_json(&output).unwrap();

        assert!(json.contains("\"id\": 7"));
        assert!(json.contains("\"title\": \"A Post Title\""));
        assert!(json.contains("\"author\": \"Ervin Howell\""));
        assert!(json.contains("alice@example.com"));
    }

    #[test]
    fn test_format_post_json_empty_comments() {
        let output = create_test_output(vec![]);

        let json = format_post_json(&output).unwrap();

        assert!(json.contains("\"comments\": []"));
        assert!(json.contains("\"total_comments\": 0"));
    }

    #[test]
    fn test_format_post_text_structure() {
        let output = create_test_output(vec![create_test_comment(1, "alice")]);

        let result = format_post_text(&output);

        assert!(result.contains("POST"));
        assert!(result.contains("A Post Title"));
        assert!(result.contains("Author"));
        assert!(result.contains("Ervin Howell"));
        assert!(result.contains("the post body"));
        assert!(result.contains("COMMENTS"));
        assert!(result.contains("NAVIGATION"));
    }

    #[test]
    fn test_format_post_text_with_comments() {
        let output = create_test_output(vec![
            create_test_comment(1, "alice"),
            create_test_comment(2, "bob"),
        ]);

        let result = format_post_text(&output);

        assert!(result.contains("[Comment #1]"));
        assert!(result.contains("[Comment #2]"));
        assert!(result.contains("alice"));
        assert!(result.contains("bob@example.com"));
    }

    #[test]
    fn test_format_post_text_empty_comments() {
        let output = create_test_output(vec![]);

        let result = format_post_text(&output);

        assert!(result.contains("No comments on this post"));
    }

    #[test]
    fn test_format_post_text_navigation_hints() {
        let output = create_test_output(vec![]);

        let result = format_post_text(&output);

        assert!(result.contains("To go back to the list"));
        assert!(result.contains("postboard posts list --user 2"));
        assert!(result.contains("postboard posts read 7 --json"));
    }

    #[test]
    fn test_format_post_text_unknown_author() {
        let mut output = create_test_output(vec![]);
        output.author = None;

        let result = format_post_text(&output);

        assert!(result.contains("(unknown)"));
    }
}
