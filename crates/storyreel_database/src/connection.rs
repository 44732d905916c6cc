//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use storyreel_error::{DatabaseError, DatabaseErrorKind};

/// Shared r2d2 connection pool.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Build a connection pool for the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the connection
/// string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - The pool cannot establish its initial connection
pub fn establish_pool() -> Result<PgPool, DatabaseError> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })?;

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))
}

/// Run the embedded schema migrations.
///
/// Called once at process start, before the server accepts requests.
pub fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut conn = pool
        .get()
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

    tracing::info!("Database migrations applied");
    Ok(())
}
