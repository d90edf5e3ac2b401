#![allow(dead_code)]

use parcel_tracker::service::now_rfc3339;
use parcel_tracker::{Parcel, SqliteConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Helper function to create an in-memory database with the parcel table
pub fn create_test_db() -> Connection {
    init_tracing();
    SqliteConfig::in_memory()
        .open()
        .expect("open in-memory database")
}

/// Generator seeded from the clock; the seed is printed so a failing run can be replayed.
pub fn seeded_rng() -> StdRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos() as u64;
    println!("rng seed: {seed}");
    StdRng::seed_from_u64(seed)
}

pub fn test_parcel() -> Parcel {
    Parcel::registered(1000, "test", now_rfc3339())
}

pub fn random_client(rng: &mut impl Rng) -> i64 {
    rng.gen_range(1..10_000_000)
}
