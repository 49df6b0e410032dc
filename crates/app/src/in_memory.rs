//! In-process supplement stock backed by a `Vec`.

use robot_service_domain::id::SupplementId;
use robot_service_domain::supplement::{Supplement, SupplementType};

use crate::ports::SupplementRepository;

/// Supplement stock held in memory for the lifetime of the process.
///
/// Removal swaps the last item into the freed slot, so iteration order is not
/// stable across removals.
#[derive(Debug, Default)]
pub struct InMemorySupplementRepository {
    items: Vec<Supplement>,
}

impl InMemorySupplementRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SupplementRepository for InMemorySupplementRepository {
    fn add(&mut self, supplement: Supplement) {
        self.items.push(supplement);
    }

    fn remove(&mut self, id: SupplementId) -> Option<Supplement> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.swap_remove(index))
    }

    fn find_first(&self, supplement_type: SupplementType) -> Option<&Supplement> {
        self.items
            .iter()
            .find(|item| item.supplement_type() == supplement_type)
    }

    fn count_of(&self, supplement_type: SupplementType) -> usize {
        self.items
            .iter()
            .filter(|item| item.supplement_type() == supplement_type)
            .count()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
