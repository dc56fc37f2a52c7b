use crate::types::Product;

/// The in-memory product table for the current session. Insertion order is
/// scrape order. The orchestrating caller is the only writer, so no
/// internal locking.
#[derive(Debug, Default)]
pub struct Dataset {
    products: Vec<Product>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps the entire held sequence. Never called with partial results:
    /// the pipeline only reaches this after a fully successful scrape.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Owned point-in-time copy. Aggregation over a snapshot is unaffected
    /// by a subsequent `replace`, and mutating the returned vector does not
    /// touch the dataset.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
