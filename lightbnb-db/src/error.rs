//! Error types for lightbnb-db

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

/// Database error type
///
/// Single-row lookups report a missing row as `Ok(None)`, so there is no
/// not-found variant.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("a user with email '{email}' already exists")]
    DuplicateEmail { email: String },
}

impl DbError {
    /// Map a failed user insert, turning a unique violation into
    /// [`DbError::DuplicateEmail`].
    pub(crate) fn from_user_insert(err: sqlx::Error, email: &str) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                Self::DuplicateEmail {
                    email: email.to_owned(),
                }
            }
            other => Self::Sqlx(other),
        }
    }

    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_display() {
        let err = DbError::DuplicateEmail {
            email: "guest@example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "a user with email 'guest@example.com' already exists"
        );
        assert!(err.is_duplicate_email());
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = DbError::from_user_insert(sqlx::Error::RowNotFound, "guest@example.com");
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
        assert!(!err.is_duplicate_email());
    }
}
