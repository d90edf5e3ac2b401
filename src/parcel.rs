use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// A tracked shipment.
///
/// `status` is kept as free text: the store persists whatever it is given.
/// Use [`ParcelStatus`] for the known values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned by the store on insert; ignored by [`crate::ParcelStore::add`].
    pub number: i64,
    pub client: i64,
    pub address: String,
    pub status: String,
    /// RFC3339 timestamp taken at creation.
    pub created_at: String,
}

impl Parcel {
    /// Build an unsaved parcel with status `registered`.
    pub fn registered(
        client: i64,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            address: address.into(),
            status: ParcelStatus::Registered.to_string(),
            created_at: created_at.into(),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.status == ParcelStatus::Registered.as_str()
    }
}

/// Known parcel statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    Registered,
    Sent,
    Delivered,
}

impl ParcelStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ParcelStatus::Registered => "registered",
            ParcelStatus::Sent => "sent",
            ParcelStatus::Delivered => "delivered",
        }
    }

    /// The status that follows this one. `Delivered` is terminal.
    pub const fn next(self) -> Self {
        match self {
            ParcelStatus::Registered => ParcelStatus::Sent,
            ParcelStatus::Sent | ParcelStatus::Delivered => ParcelStatus::Delivered,
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ParcelStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ParcelStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(ParcelStatus::Registered),
            "sent" => Ok(ParcelStatus::Sent),
            "delivered" => Ok(ParcelStatus::Delivered),
            other => Err(StoreError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ParcelStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_next() {
        assert_eq!(ParcelStatus::Registered.next(), ParcelStatus::Sent);
        assert_eq!(ParcelStatus::Sent.next(), ParcelStatus::Delivered);
        assert_eq!(ParcelStatus::Delivered.next(), ParcelStatus::Delivered);
    }

    #[test]
    fn test_unknown_status() {
        let err = "lost".parse::<ParcelStatus>().unwrap_err();
        assert!(matches!(err, StoreError::UnknownStatus(s) if s == "lost"));
    }

    #[test]
    fn test_registered_constructor() {
        let parcel = Parcel::registered(7, "Main st. 1", "2024-01-01T00:00:00Z");
        assert_eq!(parcel.number, 0);
        assert_eq!(parcel.status, "registered");
        assert!(parcel.is_registered());
    }
}
