//! Synthetic build-system metrics and the aggregates derived from them.
//!
//! [`fixture::generate_build_data`] produces the dataset; the functions in
//! [`metrics`] turn it into team, dependency, cost and trend views.

pub mod config;
pub mod error;
pub mod fixture;
pub mod insights;
pub mod metrics;
pub mod models;
pub mod money;

pub use config::Policy;
pub use error::{BuildLensError, Result};
pub use fixture::generate_build_data;
pub use models::BuildData;
pub use money::{Money, ParseError};
