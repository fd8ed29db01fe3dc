//! User creation and lookup
//!
//! Point operations against the `users` table. Lookups return `None`
//! rather than failing when no row matches; the only typed failure is
//! [`AuthError::DuplicateEmail`] on registration.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{password, AuthError, AuthResult};
use crate::models::{datetime_from_millis, User, UserRecord};
use crate::storage::Database;

/// Create a user with the given email and password
///
/// The password is stored as a bcrypt hash and never kept in plaintext.
/// The insert and the fetch of the generated row run in one transaction.
/// Fails with [`AuthError::DuplicateEmail`] when the email is already
/// registered.
pub fn create_user(db: &mut Database, email: &str, plaintext: &str) -> AuthResult<User> {
    let hash = password::hash_password(plaintext)?;
    let created_at = Utc::now().timestamp_millis();

    let tx = db.transaction()?;
    tx.execute(
        "INSERT INTO users (email, password, created_at) VALUES (?1, ?2, ?3)",
        params![email, hash, created_at],
    )
    .map_err(|err| map_insert_error(err, email))?;

    let user = tx.query_row(
        "SELECT id, email, created_at FROM users WHERE id = ?1",
        params![tx.last_insert_rowid()],
        user_from_row,
    )?;
    tx.commit()?;

    debug!(user_id = user.id, "created user");
    Ok(user)
}

/// Look up a user by email, including the stored password hash
///
/// Returns `None` when no user has this email.
pub fn get_user_by_email(db: &Database, email: &str) -> AuthResult<Option<UserRecord>> {
    let record = db
        .connection()
        .query_row(
            "SELECT id, email, password, created_at FROM users WHERE email = ?1",
            params![email],
            |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: datetime_from_millis(row.get(3)?),
                })
            },
        )
        .optional()?;
    Ok(record)
}

/// Look up a user by id
///
/// Returns `None` when no such user exists.
pub fn get_user_by_id(db: &Database, id: i64) -> AuthResult<Option<User>> {
    let user = db
        .connection()
        .query_row(
            "SELECT id, email, created_at FROM users WHERE id = ?1",
            params![id],
            user_from_row,
        )
        .optional()?;
    Ok(user)
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        created_at: datetime_from_millis(row.get(2)?),
    })
}

/// Surface the UNIQUE constraint on email as a typed error
fn map_insert_error(err: rusqlite::Error, email: &str) -> AuthError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            AuthError::DuplicateEmail {
                email: email.to_string(),
            }
        }
        other => AuthError::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn test_create_then_get_by_email() {
        let mut db = Database::open_in_memory().unwrap();

        let user = create_user(&mut db, "a@x.com", "pw123").unwrap();
        assert!(user.id > 0);
        assert_eq!(user.email, "a@x.com");

        let record = get_user_by_email(&db, "a@x.com").unwrap().unwrap();
        assert_eq!(record.id, user.id);
        assert_eq!(record.created_at, user.created_at);

        // Stored hash verifies the original password and nothing else
        assert!(verify_password("pw123", &record.password_hash).unwrap());
        assert!(!verify_password("pw124", &record.password_hash).unwrap());
    }

    #[test]
    fn test_duplicate_email_is_typed_error() {
        let mut db = Database::open_in_memory().unwrap();

        let first = create_user(&mut db, "a@x.com", "pw123").unwrap();

        let err = create_user(&mut db, "a@x.com", "other").unwrap_err();
        assert!(matches!(
            err,
            AuthError::DuplicateEmail { ref email } if email == "a@x.com"
        ));

        // The original record is unchanged
        let record = get_user_by_email(&db, "a@x.com").unwrap().unwrap();
        assert_eq!(record.id, first.id);
        assert!(verify_password("pw123", &record.password_hash).unwrap());
    }

    #[test]
    fn test_get_user_by_id() {
        let mut db = Database::open_in_memory().unwrap();

        let created = create_user(&mut db, "a@x.com", "pw123").unwrap();
        let fetched = get_user_by_id(&db, created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_missing_user_is_none() {
        let db = Database::open_in_memory().unwrap();

        assert!(get_user_by_email(&db, "nobody@x.com").unwrap().is_none());
        assert!(get_user_by_id(&db, 999).unwrap().is_none());
    }

    #[test]
    fn test_record_into_user_drops_hash() {
        let mut db = Database::open_in_memory().unwrap();

        let created = create_user(&mut db, "a@x.com", "pw123").unwrap();
        let record = get_user_by_email(&db, "a@x.com").unwrap().unwrap();
        assert_eq!(record.into_user(), created);
    }
}
