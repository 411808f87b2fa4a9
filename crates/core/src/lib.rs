//! Core library for postboard
//!
//! This crate implements the **Functional Core** of the postboard application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`postboard_core`** (this crate): pure transformation functions with
//!   zero I/O. Same input always produces the same output; everything here
//!   can be tested with fixture data, no mocking required.
//! - **`postboard`**: HTTP fetches, terminal rendering and orchestration
//!   (the Imperative Shell).
//!
//! # Module Organization
//!
//! - [`feed`]: the post-list view-model — data model, selection state,
//!   filtered-view derivation, pagination, and output transforms
//! - [`collate`]: the title comparator used for sorting the feed
//!
//! # Example Usage
//!
//! ```rust
//! use postboard_core::feed::{AuthorFilter, Feed, Post};
//!
//! let posts = vec![Post {
//!     id: 1,
//!     user_id: 1,
//!     title: "Example".to_string(),
//!     body: "…".to_string(),
//! }];
//!
//! let mut feed = Feed::new(posts, 6);
//! let view = feed.set_author_filter(AuthorFilter::User(1));
//!
//! assert_eq!(view.posts.len(), 1);
//! assert!(view.is_first_page && view.is_last_page);
//! ```

pub mod collate;
pub mod feed;
