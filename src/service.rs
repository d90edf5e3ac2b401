//! Parcel workflow on top of [`ParcelStore`].

use chrono::{SecondsFormat, Utc};

use crate::error::Result;
use crate::parcel::{Parcel, ParcelStatus};
use crate::store::ParcelStore;

/// Current UTC time as RFC3339 with second precision, e.g. `2024-05-01T10:00:00Z`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Clone, Copy)]
pub struct ParcelService<'a> {
    store: ParcelStore<'a>,
}

impl<'a> ParcelService<'a> {
    pub const fn new(store: ParcelStore<'a>) -> Self {
        Self { store }
    }

    /// Register a new parcel for `client` and return it with its number.
    pub fn register(&self, client: i64, address: &str) -> Result<Parcel> {
        let mut parcel = Parcel::registered(client, address, now_rfc3339());
        parcel.number = self.store.add(&parcel)?;
        tracing::info!(
            number = parcel.number,
            client,
            created_at = %parcel.created_at,
            "parcel registered"
        );
        Ok(parcel)
    }

    /// Move a parcel one step along registered -> sent -> delivered.
    ///
    /// A delivered parcel is left as is.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown number and
    /// `StoreError::UnknownStatus` if the stored status is not recognized.
    pub fn next_status(&self, number: i64) -> Result<ParcelStatus> {
        let parcel = self.store.get(number)?;
        let current: ParcelStatus = parcel.status.parse()?;
        let next = current.next();
        if next == current {
            tracing::debug!(number, status = %current, "parcel already in final status");
            return Ok(current);
        }
        self.store.set_status(number, next.as_str())?;
        tracing::info!(number, from = %current, to = %next, "parcel status advanced");
        Ok(next)
    }

    /// Change the address; has no effect once the parcel left `registered`.
    pub fn change_address(&self, number: i64, address: &str) -> Result<()> {
        self.store.set_address(number, address)
    }

    /// Delete the parcel; has no effect once it left `registered`.
    pub fn remove(&self, number: i64) -> Result<()> {
        self.store.delete(number)?;
        tracing::info!(number, "parcel removal requested");
        Ok(())
    }

    pub fn client_parcels(&self, client: i64) -> Result<Vec<Parcel>> {
        self.store.get_by_client(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_rfc3339_format() {
        let now = now_rfc3339();
        assert!(now.ends_with('Z'));
        assert!(!now.contains('.'));
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
