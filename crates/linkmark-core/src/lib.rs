//! Linkmark Core Library
//!
//! This crate provides the core functionality for Linkmark, a personal
//! bookmark manager: users register with an email and password, receive
//! signed session tokens, and save URLs with metadata (title, favicon,
//! summary, tags) that only they can read, update, or delete.
//!
//! # Architecture
//!
//! - **SQLite**: single-file store holding the `users` and `bookmarks`
//!   tables; schema creation is additive and idempotent
//! - **Ownership scoping**: every bookmark query includes the owning
//!   user's id in its predicate, so cross-user access is structurally
//!   impossible rather than checked after the fact
//! - **Stateless sessions**: tokens are signed JWTs carrying the user id
//!   and an expiry; no server-side session store
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut db = Database::open(&config)?;
//!
//! // Register and log in
//! let user = auth::create_user(&mut db, "a@example.com", "hunter2")?;
//! let signer = TokenSigner::new(&config);
//! let token = signer.generate(user.id)?;
//!
//! // Save and query bookmarks
//! let user_id = signer.verify(&token).expect("fresh token");
//! bookmarks::create(&mut db, user_id, NewBookmark::new("https://example.com"))?;
//! let saved = bookmarks::list_by_user(&db, user_id)?;
//! ```
//!
//! # Modules
//!
//! - `storage`: database file lifecycle and schema
//! - `auth`: password hashing, session tokens, user lookup
//! - `bookmarks`: ownership-scoped CRUD and tag search
//! - `models`: data structures for users and bookmarks
//! - `config`: application configuration

pub mod auth;
pub mod bookmarks;
pub mod config;
pub mod models;
pub mod storage;

pub use auth::{AuthError, AuthResult, TokenSigner};
pub use config::Config;
pub use models::{Bookmark, BookmarkPatch, NewBookmark, User, UserRecord};
pub use storage::{Database, StorageError, StorageResult};
