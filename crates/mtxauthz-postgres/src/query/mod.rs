//! Database query repositories for the account tables.
//!
//! This module contains repository implementations that provide high-level
//! database operations for both account kinds, encapsulating common patterns
//! and providing type-safe interfaces.
//!
//! # Soft deletion
//!
//! Lookups by credential identifier intentionally return soft-deleted rows.
//! The authorization layer needs to distinguish "never existed" from
//! "existed but was deleted", so filtering happens above this module.
//! Listing and counting queries exclude deleted rows.

pub mod product_accounts;
pub mod user_accounts;

pub use product_accounts::ProductAccountRepository;
pub use user_accounts::UserAccountRepository;
