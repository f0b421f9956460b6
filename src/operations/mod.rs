//! Operations module runs one query and renders it for the command line

pub mod about;
pub mod comments;
pub mod posts;

pub use about::{handle_about_command, AboutOperation, AboutOptions, AboutTarget};
pub use comments::{handle_comments_command, CommentsOperation, CommentsOptions, CommentsSource};
pub use posts::{handle_posts_command, PostsOperation, PostsOptions, PostsSource};
