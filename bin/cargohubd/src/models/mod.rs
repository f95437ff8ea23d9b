use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

mod state;
pub use state::*;

mod customer;
pub use customer::*;

mod category;
pub use category::*;

mod cargo_type;
pub use cargo_type::*;

mod order;
pub use order::*;

mod cargo;
pub use cargo::*;

mod cargo_order;
pub use cargo_order::*;

pub type Pool = diesel::r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DBConn = PooledConnection<ConnectionManager<PgConnection>>;
