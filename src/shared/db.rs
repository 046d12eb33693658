use sea_orm::{DbErr, SqlErr};

/// Constraint violations the adapters translate into domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
}

/// Classifies a storage error. Falls back to the Postgres SQLSTATE in the
/// message when the driver error is not structured (mock connections).
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintViolation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return Some(ConstraintViolation::ForeignKey)
        }
        _ => {}
    }

    let message = err.to_string().to_lowercase();
    if message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
    {
        Some(ConstraintViolation::Unique)
    } else if message.contains("23503") || message.contains("foreign key constraint") {
        Some(ConstraintViolation::ForeignKey)
    } else {
        None
    }
}
