//! Persistence collaborators for donations.
//!
//! A store only hands out full snapshots and applies donor-keyed bulk
//! mutations. Filtering and aggregation happen on the snapshot in
//! [`crate::features::donations::query`].

mod memory_store;
mod postgres_store;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::donations::models::{Donation, NewDonation};

pub use memory_store::InMemoryDonationStore;
pub use postgres_store::PgDonationStore;

#[async_trait]
pub trait DonationStore: Send + Sync {
    /// Persist a new donation with status Available
    async fn create(&self, donation: NewDonation) -> Result<Donation>;

    /// Every donation, oldest submission first
    async fn all(&self) -> Result<Vec<Donation>>;

    /// Set `status` on all donations whose donor equals `donor` exactly.
    /// Returns the number of affected rows, zero is not an error.
    async fn update_status_by_donor(&self, donor: &str, status: &str) -> Result<u64>;

    /// Remove all donations whose donor equals `donor` exactly
    async fn delete_by_donor(&self, donor: &str) -> Result<u64>;
}
