//! Data access for the `parcel` table.
//!
//! Every operation is a single parameterized statement. The status guard on
//! address changes and deletion is part of the statement itself, so a
//! concurrent status change cannot slip in between a check and the write.

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{Result, StoreError};
use crate::parcel::{Parcel, ParcelStatus};

const INSERT_PARCEL: &str = r#"
INSERT INTO parcel (client, address, status, created_at)
VALUES (:client, :address, :status, :created_at)
"#;

const SELECT_BY_NUMBER: &str = r#"
SELECT number, client, address, status, created_at
FROM parcel
WHERE number = :number
"#;

const SELECT_BY_CLIENT: &str = r#"
SELECT number, client, address, status, created_at
FROM parcel
WHERE client = :client
"#;

const UPDATE_STATUS: &str = r#"
UPDATE parcel SET status = :status
WHERE number = :number
"#;

const UPDATE_ADDRESS_IF_REGISTERED: &str = r#"
UPDATE parcel SET address = :address
WHERE number = :number AND status = :status
"#;

const DELETE_IF_REGISTERED: &str = r#"
DELETE FROM parcel
WHERE number = :number AND status = :status
"#;

fn parcel_from_row(row: &Row<'_>) -> rusqlite::Result<Parcel> {
    Ok(Parcel {
        number: row.get(0)?,
        client: row.get(1)?,
        address: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// CRUD access to parcels over a borrowed connection.
#[derive(Debug, Clone, Copy)]
pub struct ParcelStore<'a> {
    conn: &'a Connection,
}

impl<'a> ParcelStore<'a> {
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert `parcel` and return its newly assigned number.
    ///
    /// `parcel.number` is ignored.
    pub fn add(&self, parcel: &Parcel) -> Result<i64> {
        self.conn.execute(
            INSERT_PARCEL,
            named_params! {
                ":client": parcel.client,
                ":address": parcel.address,
                ":status": parcel.status,
                ":created_at": parcel.created_at,
            },
        )?;
        let number = self.conn.last_insert_rowid();
        tracing::debug!(number, client = parcel.client, "parcel added");
        Ok(number)
    }

    /// Fetch a parcel by number.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no parcel has this number.
    pub fn get(&self, number: i64) -> Result<Parcel> {
        self.conn
            .query_row(
                SELECT_BY_NUMBER,
                named_params! { ":number": number },
                parcel_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound(number))
    }

    /// All parcels of `client`, in no particular order.
    pub fn get_by_client(&self, client: i64) -> Result<Vec<Parcel>> {
        let mut stmt = self.conn.prepare(SELECT_BY_CLIENT)?;
        let parcels = stmt
            .query_map(named_params! { ":client": client }, parcel_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(client, count = parcels.len(), "parcels fetched by client");
        Ok(parcels)
    }

    /// Overwrite the status. The value is stored as given.
    pub fn set_status(&self, number: i64, status: &str) -> Result<()> {
        let rows = self.conn.execute(
            UPDATE_STATUS,
            named_params! { ":status": status, ":number": number },
        )?;
        tracing::debug!(number, status, rows, "parcel status set");
        Ok(())
    }

    /// Change the address of a parcel that is still registered.
    ///
    /// Touches nothing, without error, if the parcel is missing or has
    /// moved past `registered`.
    pub fn set_address(&self, number: i64, address: &str) -> Result<()> {
        let rows = self.conn.execute(
            UPDATE_ADDRESS_IF_REGISTERED,
            named_params! {
                ":address": address,
                ":number": number,
                ":status": ParcelStatus::Registered.as_str(),
            },
        )?;
        tracing::debug!(number, rows, "parcel address set");
        Ok(())
    }

    /// Delete a parcel that is still registered; otherwise a no-op.
    pub fn delete(&self, number: i64) -> Result<()> {
        let rows = self.conn.execute(
            DELETE_IF_REGISTERED,
            named_params! {
                ":number": number,
                ":status": ParcelStatus::Registered.as_str(),
            },
        )?;
        tracing::debug!(number, rows, "parcel delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::SqliteConfig;

    fn sample() -> Parcel {
        Parcel::registered(1000, "test", "2024-05-01T10:00:00Z")
    }

    #[test]
    fn test_numbers_are_not_reused_after_delete() -> Result<()> {
        let conn = SqliteConfig::in_memory().open()?;
        let store = ParcelStore::new(&conn);

        let first = store.add(&sample())?;
        store.delete(first)?;
        let second = store.add(&sample())?;
        assert!(second > first);
        Ok(())
    }

    #[test]
    fn test_get_missing_is_not_found() -> Result<()> {
        let conn = SqliteConfig::in_memory().open()?;
        let store = ParcelStore::new(&conn);

        let err = store.get(42).unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }

    #[test]
    fn test_storage_errors_are_not_not_found() {
        let conn = SqliteConfig::in_memory()
            .with_create_schema(false)
            .open()
            .unwrap();
        let store = ParcelStore::new(&conn);

        let err = store.get(1).unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));
        assert!(store.add(&sample()).is_err());
        assert!(store.get_by_client(1000).is_err());
    }

    #[test]
    fn test_mutations_on_missing_number_are_noops() -> Result<()> {
        let conn = SqliteConfig::in_memory().open()?;
        let store = ParcelStore::new(&conn);

        store.set_status(99, "sent")?;
        store.set_address(99, "nowhere")?;
        store.delete(99)?;
        assert!(store.get(99).unwrap_err().is_not_found());
        Ok(())
    }
}
