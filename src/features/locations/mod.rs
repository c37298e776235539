//! Static city lookup used to auto-populate donation coordinates.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/locations/cities` | No | List known cities |
//! | GET | `/api/locations/cities/{name}` | No | Coordinates for one city |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::LocationService;
