//! Port definitions — traits that storage implementations fulfil.
//!
//! They are defined here (in `app`) so that the use-case layer depends on the
//! contract rather than on a concrete collection.

pub mod supplement_repo;

pub use supplement_repo::SupplementRepository;
