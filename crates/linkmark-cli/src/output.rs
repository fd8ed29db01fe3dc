//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use linkmark_core::{Bookmark, User};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single bookmark
    pub fn print_bookmark(&self, bookmark: &Bookmark) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", bookmark.id);
                println!("URL:     {}", bookmark.url);
                if !bookmark.title.is_empty() {
                    println!("Title:   {}", bookmark.title);
                }
                if !bookmark.summary.is_empty() {
                    println!("Summary: {}", bookmark.summary);
                }
                if !bookmark.favicon.is_empty() {
                    println!("Favicon: {}", bookmark.favicon);
                }
                if !bookmark.tags.is_empty() {
                    println!("Tags:    {}", bookmark.tags);
                }
                println!(
                    "Created: {}",
                    bookmark.created_at.format("%Y-%m-%d %H:%M")
                );
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(bookmark).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", bookmark.id);
            }
        }
    }

    /// Print a list of bookmarks
    pub fn print_bookmarks(&self, bookmarks: &[Bookmark]) {
        match self.format {
            OutputFormat::Human => {
                if bookmarks.is_empty() {
                    println!("No bookmarks found.");
                    return;
                }
                for bookmark in bookmarks {
                    let label = if bookmark.title.is_empty() {
                        &bookmark.url
                    } else {
                        &bookmark.title
                    };
                    let tags_indicator = if bookmark.tags.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", bookmark.tags)
                    };
                    println!(
                        "{} | {}{} | {}",
                        bookmark.id,
                        truncate(label, 35),
                        tags_indicator,
                        truncate(&bookmark.url, 45)
                    );
                }
                println!("\n{} bookmark(s)", bookmarks.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(bookmarks).unwrap());
            }
            OutputFormat::Quiet => {
                for bookmark in bookmarks {
                    println!("{}", bookmark.id);
                }
            }
        }
    }

    /// Print a registered user
    pub fn print_user(&self, user: &User) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", user.id);
                println!("Email:   {}", user.email);
                println!("Created: {}", user.created_at.format("%Y-%m-%d %H:%M"));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(user).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", user.id);
            }
        }
    }

    /// Print a freshly issued session token
    pub fn print_token(&self, token: &str) {
        match self.format {
            OutputFormat::Human => {
                println!("Session token (valid 7 days):");
                println!("{}", token);
                println!();
                println!("Export it for later commands:");
                println!("  export LINKMARK_TOKEN={}", token);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "token": token }));
            }
            OutputFormat::Quiet => {
                println!("{}", token);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a somewhat longer string", 10), "a somew...");
    }
}
