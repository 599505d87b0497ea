//! Infrastructure layer - database access.

mod db;

pub use db::Database;
