//! Supplement repository port — the bag of supplements not yet installed.

use robot_service_domain::id::SupplementId;
use robot_service_domain::supplement::{Supplement, SupplementType};

/// Unordered storage for supplements waiting to be installed into a service.
///
/// Lookups never promise an order beyond "some supplement of this type";
/// callers that need a specific instance remove it by id.
pub trait SupplementRepository {
    /// Put a supplement into stock.
    fn add(&mut self, supplement: Supplement);

    /// Take the supplement with `id` out of stock, if present.
    fn remove(&mut self, id: SupplementId) -> Option<Supplement>;

    /// First supplement in stock whose type is `supplement_type`.
    fn find_first(&self, supplement_type: SupplementType) -> Option<&Supplement>;

    /// Number of supplements in stock of `supplement_type`.
    fn count_of(&self, supplement_type: SupplementType) -> usize;

    /// Total number of supplements in stock.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
