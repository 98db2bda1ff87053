//! Roastery DB - drink storage
//!
//! A [`DrinkRepository`] trait with two implementations:
//! - [`PgDrinkRepository`]: PostgreSQL via SQLx, one `drinks` table with the
//!   recipe stored as JSONB
//! - [`MemoryDrinkRepository`]: process-local, used when no database is
//!   configured and in tests
//!
//! # Example
//!
//! ```rust,ignore
//! use roastery_db::{create_pool, DrinkRepository, PgDrinkRepository};
//!
//! let pool = create_pool("postgres://localhost/roastery").await?;
//! let repo = PgDrinkRepository::new(pool);
//! repo.ensure_schema().await?;
//!
//! let drinks = repo.list().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use memory::MemoryDrinkRepository;
pub use models::DrinkRow;
pub use pg::PgDrinkRepository;
pub use pool::{create_pool, create_pool_with_options, DbPool, PoolOptions};
pub use repo::{seed_drinks, DrinkChanges, DrinkRepository, NewDrink};
