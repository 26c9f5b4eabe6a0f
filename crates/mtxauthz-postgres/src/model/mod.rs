//! Database models for the account tables.
//!
//! This module contains Diesel model definitions for all database tables.
//! Both account tables are read-only from this service's perspective:
//! provisioning and lifecycle are owned by the identity platform, which
//! writes to the same database.

mod product_account;
mod user_account;

pub use product_account::ProductAccount;
pub use user_account::UserAccount;
