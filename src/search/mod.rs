//! Search over the plant catalog
//!
//! This module holds the pieces every search field in the application shares:
//!
//! - [`collate`]: locale-style ordering of plant names
//! - [`filter`]: case-insensitive substring filtering, sorted or in catalog order
//! - [`query`]: an editable query string with a cursor

pub mod collate;
pub mod filter;
pub mod query;

pub use collate::locale_cmp;
pub use filter::{filter_in_order, filter_sorted, matches_query};
pub use query::QueryText;
