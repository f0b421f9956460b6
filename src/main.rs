mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use log::error;
use redquery::operations::{
    handle_about_command, handle_comments_command, handle_posts_command, AboutOptions,
    AboutTarget, CommentsOptions, CommentsSource, PostsOptions, PostsSource,
};
use redquery::{AppConfig, RedditClient};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Load configuration from environment variables and .env file
    let config = AppConfig::load();
    let client = match RedditClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let json = cli.json;
    let result = match cli.command {
        Commands::Posts {
            subreddit,
            sort,
            limit,
            brief,
        } => {
            let source = PostsSource::Subreddit {
                name: subreddit,
                sort,
            };
            handle_posts_command(posts_options(source, limit, brief, json), client).await
        }
        Commands::Post { id } => {
            let source = PostsSource::Single { id };
            handle_posts_command(posts_options(source, 1, false, json), client).await
        }
        Commands::UserPosts {
            name,
            sort,
            limit,
            brief,
        } => {
            let source = PostsSource::User { name, sort };
            handle_posts_command(posts_options(source, limit, brief, json), client).await
        }
        Commands::Search {
            query,
            subreddit,
            sort,
            time,
            limit,
            brief,
        } => {
            let source = PostsSource::Search {
                query,
                subreddit,
                sort,
                time,
            };
            handle_posts_command(posts_options(source, limit, brief, json), client).await
        }
        Commands::Comments {
            post_id,
            sort,
            limit,
        } => {
            let source = CommentsSource::Thread {
                post_id,
                sort,
                limit,
            };
            handle_comments_command(CommentsOptions { source, json }, client).await
        }
        Commands::UserComments { name, sort, limit } => {
            let source = CommentsSource::User { name, sort, limit };
            handle_comments_command(CommentsOptions { source, json }, client).await
        }
        Commands::Subreddit { name } => {
            let target = AboutTarget::Subreddit(name);
            handle_about_command(AboutOptions { target, json }, client).await
        }
        Commands::User { name } => {
            let target = AboutTarget::User(name);
            handle_about_command(AboutOptions { target, json }, client).await
        }
        Commands::SearchSubreddits { query, limit } => {
            let target = AboutTarget::SubredditSearch { query, limit };
            handle_about_command(AboutOptions { target, json }, client).await
        }
    };

    // Handlers already logged the failure
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn posts_options(source: PostsSource, limit: u32, brief: bool, json: bool) -> PostsOptions {
    PostsOptions {
        source,
        limit,
        brief,
        json,
    }
}
