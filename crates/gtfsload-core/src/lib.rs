//! # gtfsload Core
//!
//! Load-test fixture library for GTFS GraphQL APIs. It carries a small
//! catalog of GraphQL request fixtures, each emitted as a single-line JSON
//! body with the query text and a JSON-encoded variables string, plus a
//! batch-plan builder for feeding whole directories of GTFS archives
//! through the harness.
//!
//! Placeholder tokens such as `${namespace}` are left verbatim in the
//! variables; the load-test harness substitutes its own values at runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use gtfsload_core::catalog;
//!
//! let fixture = catalog::get("stops").unwrap();
//! let mut out = Vec::new();
//! fixture.emit(&mut out).unwrap();
//! assert!(out.starts_with(b"{\"query\":"));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod fixture;
pub mod plan;

#[cfg(test)]
mod plan_tests;

pub use error::{Error, Result};
pub use fixture::{Placeholder, QueryFixture, RequestBody};
pub use plan::{BatchEntry, BatchPlan, PlanMode};
