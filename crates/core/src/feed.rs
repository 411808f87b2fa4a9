use serde::{Deserialize, Serialize};

use crate::collate;

/// Default number of posts per page, matching the original UI.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Blog post from the API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Post author from the API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Comment on a post from the API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Comment {
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Author selection: every post, or the posts of a single user.
///
/// Filtering by an id that no post carries yields an empty view, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorFilter {
    All,
    User(u64),
}

impl AuthorFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            AuthorFilter::All => true,
            AuthorFilter::User(id) => post.user_id == *id,
        }
    }
}

impl std::fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorFilter::All => write!(f, "all"),
            AuthorFilter::User(id) => write!(f, "{id}"),
        }
    }
}

/// Direction of the title sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Selection state driving filtering, sorting and pagination.
///
/// Mutated only through explicit selection operations; `page` is reset to 1
/// when the filter changes and kept when the sort changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub filter: AuthorFilter,
    pub sort: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    /// Defaults: all authors, ascending titles, first page.
    pub fn new(page_size: usize) -> Self {
        ViewState {
            filter: AuthorFilter::All,
            sort: SortOrder::Ascending,
            page: 1,
            page_size,
        }
    }
}

/// The visible page plus the flags a caller needs to render navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub posts: Vec<Post>,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

/// Derive the filtered, sorted view of the posts.
///
/// Always recomputed in full from the source collection and the current
/// state; nothing stale survives a selection change. The sort is stable, so
/// posts with identical titles keep their original relative order.
pub fn compute_filtered_view(posts: &[Post], state: &ViewState) -> Vec<Post> {
    let mut filtered: Vec<Post> = posts
        .iter()
        .filter(|post| state.filter.matches(post))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| match state.sort {
        SortOrder::Ascending => collate::compare(&a.title, &b.title),
        SortOrder::Descending => collate::compare(&b.title, &a.title),
    });

    filtered
}

/// Slice the filtered view down to the currently selected page.
///
/// An out-of-range page yields an empty page; the navigation operations on
/// [`Feed`] guard against ever selecting one.
pub fn page_view(filtered: &[Post], state: &ViewState) -> PageView {
    let start = state.page.saturating_sub(1) * state.page_size;
    let posts = if start >= filtered.len() {
        Vec::new()
    } else {
        let end = (start + state.page_size).min(filtered.len());
        filtered[start..end].to_vec()
    };

    PageView {
        posts,
        is_first_page: state.page == 1,
        is_last_page: state.page * state.page_size >= filtered.len(),
    }
}

/// Calculate pagination bounds for a given page
///
/// Returns (start_index, end_index) for slicing the filtered view.
/// Returns an error if the page or page size is not positive, if the page
/// is out of range, or if there are no posts.
pub fn page_bounds(total_items: usize, page: usize, limit: usize) -> Result<(usize, usize), String> {
    if page == 0 {
        return Err("Page numbers start at 1".to_string());
    }

    if limit == 0 {
        return Err("Page size must be at least 1".to_string());
    }

    if total_items == 0 {
        return Err("No posts available for pagination".to_string());
    }

    let start = (page - 1) * limit;

    if start >= total_items {
        let total_pages = total_items.div_ceil(limit);
        return Err(format!(
            "Page {page} is out of range. Only {total_pages} pages available."
        ));
    }

    let end = (start + limit).min(total_items);
    Ok((start, end))
}

/// Live post-list view-model.
///
/// Owns the fetched posts for the session, the selection state, and the
/// derived filtered view. Each selection operation returns the resulting
/// [`PageView`] so the caller can re-render.
#[derive(Debug, Clone)]
pub struct Feed {
    posts: Vec<Post>,
    state: ViewState,
    filtered: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>, page_size: usize) -> Self {
        let state = ViewState::new(page_size);
        let filtered = compute_filtered_view(&posts, &state);
        Feed {
            posts,
            state,
            filtered,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Number of posts in the current filtered view.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The posts on the currently selected page.
    pub fn current_page(&self) -> PageView {
        page_view(&self.filtered, &self.state)
    }

    /// Select an author and jump back to the first page.
    pub fn set_author_filter(&mut self, filter: AuthorFilter) -> PageView {
        self.state.filter = filter;
        self.state.page = 1;
        self.filtered = compute_filtered_view(&self.posts, &self.state);
        self.current_page()
    }

    /// Change the sort direction.
    ///
    /// The current page is kept, matching the original UI: only a filter
    /// change jumps back to page 1.
    pub fn set_sort_order(&mut self, sort: SortOrder) -> PageView {
        self.state.sort = sort;
        self.filtered = compute_filtered_view(&self.posts, &self.state);
        self.current_page()
    }

    /// Advance one page. Silently ignored on the last page.
    pub fn next_page(&mut self) -> PageView {
        if self.state.page * self.state.page_size < self.filtered.len() {
            self.state.page += 1;
        }
        self.current_page()
    }

    /// Go back one page. Silently ignored on the first page.
    pub fn previous_page(&mut self) -> PageView {
        if self.state.page > 1 {
            self.state.page -= 1;
        }
        self.current_page()
    }
}

/// Individual list item output
#[derive(Debug, Serialize, Clone)]
pub struct ListItem {
    pub id: u64,
    pub user_id: u64,
    pub author: Option<String>,
    pub title: String,
    pub body: String,
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone)]
pub struct ListPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub limit: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Complete list output with items and pagination
#[derive(Debug, Serialize, Clone)]
pub struct ListOutput {
    pub filter: String,
    pub sort: String,
    pub items: Vec<ListItem>,
    pub pagination: ListPaginationInfo,
}

/// Individual comment output
#[derive(Debug, Serialize, Clone)]
pub struct CommentOutput {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Post output with comments
#[derive(Debug, Serialize, Clone)]
pub struct PostOutput {
    pub id: u64,
    pub user_id: u64,
    pub author: Option<String>,
    pub title: String,
    pub body: String,
    pub total_comments: usize,
    pub comments: Vec<CommentOutput>,
}

/// Look up the display name of a user by id.
pub fn author_name(users: &[User], user_id: u64) -> Option<&str> {
    users
        .iter()
        .find(|user| user.id == user_id)
        .map(|user| user.name.as_str())
}

/// Transform a page of posts into list output with pagination
///
/// Resolves author names from the user collection and attaches navigation
/// commands for the neighboring pages.
pub fn transform_posts(
    page_posts: &[Post],
    users: &[User],
    state: &ViewState,
    total_items: usize,
) -> ListOutput {
    let items: Vec<ListItem> = page_posts
        .iter()
        .map(|post| ListItem {
            id: post.id,
            user_id: post.user_id,
            author: author_name(users, post.user_id).map(str::to_string),
            title: post.title.clone(),
            body: post.body.clone(),
        })
        .collect();

    // A degenerate page size means there are no pages to navigate.
    let total_pages = match state.page_size {
        0 => 0,
        size => total_items.div_ceil(size),
    };

    let next_page = if state.page < total_pages {
        Some(format!(
            "postboard posts list --user {} --sort {} --page {}",
            state.filter,
            state.sort,
            state.page + 1
        ))
    } else {
        None
    };

    let prev_page = if state.page > 1 {
        Some(format!(
            "postboard posts list --user {} --sort {} --page {}",
            state.filter,
            state.sort,
            state.page - 1
        ))
    } else {
        None
    };

    ListOutput {
        filter: state.filter.to_string(),
        sort: state.sort.to_string(),
        items,
        pagination: ListPaginationInfo {
            current_page: state.page,
            total_pages,
            total_items,
            limit: state.page_size,
            next_page_command: next_page,
            prev_page_command: prev_page,
        },
    }
}

/// Transform API comments to comment outputs
pub fn transform_comments(comments: Vec<Comment>) -> Vec<CommentOutput> {
    comments
        .into_iter()
        .map(|comment| CommentOutput {
            id: comment.id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
        })
        .collect()
}

/// Build post output from a post and its comments
pub fn build_post_output(post: Post, users: &[User], comments: Vec<CommentOutput>) -> PostOutput {
    PostOutput {
        id: post.id,
        user_id: post.user_id,
        author: author_name(users, post.user_id).map(str::to_string),
        title: post.title,
        body: post.body,
        total_comments: comments.len(),
        comments,
    }
}
