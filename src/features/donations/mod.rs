//! Donation logging, viewing and donor-keyed housekeeping.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/donations` | No | Log a new donation |
//! | GET | `/api/donations` | No | Filtered view with expired flags |
//! | GET | `/api/donations/summary` | No | Active/total/expired counts |
//! | GET | `/api/donations/filters` | No | Selector options |
//! | GET | `/api/donations/{id}` | No | Single donation |
//! | POST | `/api/donations/collect` | No | Mark a donor's donations collected |
//! | DELETE | `/api/admin/donations` | No | Delete a donor's donations |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::DonationService;
pub use stores::{DonationStore, InMemoryDonationStore, PgDonationStore};
