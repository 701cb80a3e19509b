//! Clients and models for the General Bikeshare Feed Specification.
//!
//! v1.x and v2.x are independent families: each has its own feed registry
//! and discovery shape. v1 publishes a single feed list, v2 groups feeds
//! into locale-keyed services.

pub(crate) mod de;
pub mod models;
pub mod v1;
pub mod v2;
