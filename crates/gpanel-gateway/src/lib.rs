//! # gpanel-gateway - Device API client
//!
//! Everything that talks to the device lives here. The rest of the panel only
//! sees the [`Gateway`] trait, so views and handlers can be exercised against
//! an in-memory fake.
//!
//! ## Public API
//!
//! - [`Gateway`] / [`LocalGateway`] - One async method per device endpoint
//! - [`HttpGateway`] - `reqwest` implementation
//! - [`LedPush`], [`Query`] - Query-string builders (browser-style escaping)
//! - [`endpoints`] - REST paths
//! - `test_utils::FakeGateway` - Recording fake (feature `test-helpers`)

pub mod api;
pub mod client;
pub mod endpoints;
pub mod request;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{Gateway, LocalGateway};
pub use client::HttpGateway;
pub use request::{LedPush, Query};
