use std::time::Duration;

use ntex::web;
use ntex::time;
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use cargohub_error::io::{IoError, IoResult, FromIo};
use cargohub_stubs::config::DaemonConfig;

use crate::models::{Pool, DBConn};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Number of attempts made to reach the store at boot
const CONNECT_ATTEMPTS: usize = 5;

/// ## Create pool
///
/// Create a connection pool to the store and check that a first
/// connection can be established.
///
/// ## Arguments
///
/// - [conf](DaemonConfig) - The daemon config holding the url and pool size
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](Pool) - The pool has been created
///   - [Err](IoError) - The store is unreachable
///
pub async fn create_pool(conf: &DaemonConfig) -> IoResult<Pool> {
  let db_url = conf.database_url.clone();
  let pool_size = conf.pool_size.max(1);
  web::block(move || {
    let manager = ConnectionManager::<PgConnection>::new(db_url);
    let pool = Pool::builder()
      .max_size(pool_size)
      .build(manager)
      .map_err(|err| err.map_err_context(|| "Store"))?;
    Ok::<_, IoError>(pool)
  })
  .await
  .map_err(IoError::from)
}

/// Build a pool without opening any connection.
/// Connections are made on first use.
pub fn create_lazy_pool(database_url: &str, pool_size: u32) -> Pool {
  let manager = ConnectionManager::<PgConnection>::new(database_url);
  Pool::builder()
    .max_size(pool_size.max(1))
    .connection_timeout(Duration::from_secs(5))
    .build_unchecked(manager)
}

/// ## Get pool conn
///
/// Get a connection from the pool
///
/// ## Arguments
///
/// - [pool](Pool) - The connection pool
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](DBConn) - The connection has been retrieved
///   - [Err](IoError) - No connection available before the pool timeout
///
pub fn get_pool_conn(pool: &Pool) -> IoResult<DBConn> {
  let conn = pool
    .get()
    .map_err(|err| err.map_err_context(|| "Store connection"))?;
  Ok(conn)
}

/// Run a query on a pooled connection from the blocking thread pool
pub async fn run<F, R>(pool: &Pool, f: F) -> IoResult<R>
where
  F: FnOnce(&mut PgConnection) -> IoResult<R> + Send + 'static,
  R: Send + 'static,
{
  let pool = pool.clone();
  let res = web::block(move || {
    let mut pooled = get_pool_conn(&pool)?;
    let conn: &mut PgConnection = &mut pooled;
    f(conn)
  })
  .await?;
  Ok(res)
}

/// Same as [run] but every statement issued by `f` is part of one
/// transaction, rolled back when `f` returns an error.
pub async fn transaction<F, R>(pool: &Pool, f: F) -> IoResult<R>
where
  F: FnOnce(&mut PgConnection) -> IoResult<R> + Send + 'static,
  R: Send + 'static,
{
  let pool = pool.clone();
  let res = web::block(move || {
    let mut pooled = get_pool_conn(&pool)?;
    let conn: &mut PgConnection = &mut pooled;
    conn.transaction::<_, IoError, _>(f)
  })
  .await?;
  Ok(res)
}

/// Apply the embedded migrations that are not applied yet
async fn run_migrations(pool: &Pool) -> IoResult<()> {
  run(pool, |conn| {
    let applied = conn
      .run_pending_migrations(MIGRATIONS)
      .map_err(|err| IoError::invalid_data("Migrations", err))?;
    for version in applied {
      log::info!("store: applied migration {version}");
    }
    Ok(())
  })
  .await
}

/// ## Init
///
/// Connect to the store, retrying while it is not reachable,
/// then apply the latest migrations to get the latest schema.
///
/// ## Arguments
///
/// - [conf](DaemonConfig) - The daemon config
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](Pool) - The pool ready to be used
///   - [Err](IoError) - The store is unreachable or a migration failed
///
pub async fn init(conf: &DaemonConfig) -> IoResult<Pool> {
  let mut attempt = 1;
  let pool = loop {
    match create_pool(conf).await {
      Ok(pool) => break pool,
      Err(err) if attempt < CONNECT_ATTEMPTS => {
        log::warn!("store: waiting for the database ({attempt}): {err}");
        attempt += 1;
        time::sleep(Duration::from_secs(2)).await;
      }
      Err(err) => return Err(err),
    }
  };
  log::info!("store: connected");
  run_migrations(&pool).await?;
  log::info!("store: migrations up to date");
  Ok(pool)
}
