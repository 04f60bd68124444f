//! Waypoint Harness: world-level orchestration for the search engine.
//!
//! The harness poses a world as a `SearchProblem`, runs one of the five
//! strategies, and packages the outcome as a canonical, digestible report.
//!
//! The harness does NOT implement search; it delegates to `waypoint_search`.
//! Worlds provide domain rules only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod contract;
pub mod policy;
pub mod runner;
pub mod worlds;
