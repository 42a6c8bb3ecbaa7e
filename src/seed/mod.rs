use tracing::info;

use crate::models::Product;
use crate::store::ProductStore;

/// The fixed catalogue the service starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Teclado mecánico", 89.99, 15),
        Product::new(2, "Mouse inalámbrico", 39.50, 30),
        Product::new(3, "Monitor 27\"", 249.00, 8),
    ]
}

/// Build the startup store, optionally pre-filled with the sample catalogue.
pub fn initial_store(seed_samples: bool) -> ProductStore {
    if !seed_samples {
        info!("Starting with an empty product store");
        return ProductStore::new();
    }

    let store = ProductStore::with_products(sample_products());
    info!(count = store.len(), "Seeded sample products");
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_have_unique_sequential_ids() {
        let ids: Vec<i32> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn samples_satisfy_validation_invariants() {
        for p in sample_products() {
            assert!(!p.name.trim().is_empty());
            assert!(p.price >= 0.0);
            assert!(p.stock >= 0);
        }
    }

    #[test]
    fn initial_store_respects_seed_flag() {
        assert_eq!(initial_store(true).len(), 3);
        assert!(initial_store(false).is_empty());
    }
}
