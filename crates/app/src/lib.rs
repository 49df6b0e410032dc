//! # robot-service-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that storage implementations fulfil:
//!   - `SupplementRepository` — stock of supplements awaiting installation
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`InMemorySupplementRepository`)
//! - Define the **driving/inbound** use-case struct:
//!   - `Controller` — services, supplements, robots, valuation and statistics
//!
//! ## Dependency rule
//! Depends on `robot-service-domain` only (plus `tracing`).
//! The daemon depends on *this* crate, not the reverse.

pub mod in_memory;
pub mod messages;
pub mod ports;
pub mod services;
