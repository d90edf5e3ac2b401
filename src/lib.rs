//! SQLite-backed parcel tracking store.
//!
//! # Intention
//!
//! - Persist parcel records in a single `parcel` table.
//! - Expose create/read/update/delete keyed by the parcel number.
//! - Keep the status guard for address changes and deletion inside the
//!   statement that performs them.
//!
//! # Architectural Boundaries
//!
//! - The store borrows a connection; opening, configuring and migrating it
//!   belongs to [`sqlite`] and [`schema`].
//! - No network surface and no multi-statement transactions.

pub mod error;
pub mod parcel;
pub mod schema;
pub mod service;
pub mod sqlite;
pub mod store;

pub use error::{Result, StoreError};
pub use parcel::{Parcel, ParcelStatus};
pub use service::ParcelService;
pub use sqlite::SqliteConfig;
pub use store::ParcelStore;
