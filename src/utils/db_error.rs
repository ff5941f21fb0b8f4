//! Classification of database errors.

/// Name of the unique constraint on `links.slug`.
pub const SLUG_UNIQUE_CONSTRAINT: &str = "links_slug_key";

/// Returns true if `e` is a unique violation on the slug constraint.
///
/// A unique violation without a constraint name is treated as a slug
/// violation too, since `links` carries no other unique index besides the
/// primary key, which the store always assigns itself.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_UNIQUE_CONSTRAINT) | None)
}
