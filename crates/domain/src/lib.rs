//! # robot-service-domain
//!
//! Pure domain model for the robot-servicing business.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Supplements** (installable armor parts with price and hardness)
//! - Define **Robots** (named units with a kind, a weight and a price)
//! - Define **Services** (capacity-bounded departments holding robots and supplements)
//! - Contain all invariant enforcement and per-entity logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the daemon.
//! Storage boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod robot;
pub mod service;
pub mod supplement;
