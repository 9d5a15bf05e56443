use anyhow::{Context, Result};
use board_client::{BoardClient, Post, UpdatePostRequest};
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        env = "BOARD_SERVER",
        default_value = "http://localhost:3000"
    )]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every post, newest first
    List,

    Get {
        #[arg(short, long)]
        id: String,
    },

    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(short, long)]
        author: String,
    },

    Update {
        #[arg(short, long)]
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        author: Option<String>,
    },

    Delete {
        #[arg(short, long)]
        id: String,
    },

    /// Show server status and configuration
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    println!("🔌 Connecting to: {}", cli.server);

    let client = BoardClient::new(cli.server);

    match cli.command {
        Commands::List => {
            println!("📋 Listing posts");

            match client.list_posts().await {
                Ok(posts) => {
                    println!("{} Found {} posts", "✅".green(), posts.len());
                    println!();

                    if posts.is_empty() {
                        println!("   No posts yet");
                        println!("   Tip: board-cli create --title \"My Post\" --content \"Hello\" --author \"Me\"");
                    } else {
                        for (i, post) in posts.iter().enumerate() {
                            println!("   {}. [{}] {}", i + 1, post.id, post.title.bold());
                            println!("      By {} at {}", post.author, post.created_at);
                            println!("      Content: {}", truncate(&post.content, 50));
                            println!();
                        }
                    }
                }
                Err(e) => fail(format!("Failed to list posts: {}", e)),
            }
        }

        Commands::Get { id } => {
            println!("🔍 Getting post {}", id);

            match client.get_post(&id).await {
                Ok(post) => {
                    println!("{} Post retrieved:", "✅".green());
                    print_post(&post);
                }
                Err(e) if e.is_not_found() => {
                    println!("{} Post {} not found", "❌".red(), id);
                    println!("   Tip: Use 'list' command to see available posts");
                    std::process::exit(1);
                }
                Err(e) => fail(format!("Error: {}", e)),
            }
        }

        Commands::Create {
            title,
            content,
            author,
        } => {
            println!("📝 Creating new post...");

            match client.create_post(title, content, author).await {
                Ok(post) => {
                    println!("{} Post created successfully!", "✅".green());
                    print_post(&post);
                }
                Err(e) if e.is_invalid_request() => fail(format!("Rejected by server: {}", e)),
                Err(e) => fail(format!("Failed to create post: {}", e)),
            }
        }

        Commands::Update {
            id,
            title,
            content,
            author,
        } => {
            println!("✏️ Updating post {}", id);

            let request = UpdatePostRequest {
                title,
                content,
                author,
            };

            match client.update_post(&id, &request).await {
                Ok(post) => {
                    println!("{} Post updated successfully!", "✅".green());
                    print_post(&post);
                }
                Err(e) if e.is_not_found() => fail(format!("Post {} not found", id)),
                Err(e) => fail(format!("Failed to update post: {}", e)),
            }
        }

        Commands::Delete { id } => {
            println!("🗑️ Deleting post {}", id);

            match client.delete_post(&id).await {
                Ok(message) => println!("{} {}", "✅".green(), message),
                Err(e) if e.is_not_found() => fail(format!("Post {} not found", id)),
                Err(e) => fail(format!("Failed to delete post: {}", e)),
            }
        }

        Commands::Health => {
            let health = client
                .health()
                .await
                .context("Failed to query server health")?;

            println!("{} Status: {}", "✅".green(), health.status);
            println!("   Timestamp: {}", health.timestamp);
            println!("   Environment: {}", health.env.app_env);
            println!(
                "   Database URL configured: {}",
                if health.env.has_database_url {
                    "yes"
                } else {
                    "no"
                }
            );
        }
    }

    Ok(())
}

fn print_post(post: &Post) {
    println!("   ID: {}", post.id);
    println!("   Title: {}", post.title);
    println!("   Author: {}", post.author);
    println!("   Content: {}", post.content);
    println!("   Created: {}", post.created_at);
    println!("   Updated: {}", post.updated_at);
}

fn fail(message: String) -> ! {
    println!("{} {}", "❌".red(), message);
    std::process::exit(1);
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("привет мир", 6), "привет...");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
