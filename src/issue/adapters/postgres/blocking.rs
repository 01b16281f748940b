//! Offloads synchronous Diesel calls from the async executor.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::issue::ports::{RepositoryError, RepositoryResult};

/// `PostgreSQL` connection pool type used by issue tracking adapters.
pub type IssuePgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs `f` with a pooled connection on the blocking thread pool.
pub(super) async fn run_blocking<F, T>(pool: &IssuePgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = owned_pool.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}
