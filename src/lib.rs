//! Command-line access to a PostgreSQL `users` table.

pub mod config;
pub mod db;
pub mod users;
