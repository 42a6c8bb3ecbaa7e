use indexmap::IndexMap;
use thiserror::Error;

use crate::models::{Product, ProductId, ProductPayload};

pub const NAME_REQUIRED: &str = "El nombre es obligatorio.";
pub const NEGATIVE_PRICE: &str = "El precio no puede ser negativo.";
pub const NEGATIVE_STOCK: &str = "El stock no puede ser negativo.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("Producto {0} no encontrado.")]
    NotFound(ProductId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Checks a create/update payload. Rules run in a fixed order and the first
/// failure wins. Returns the trimmed name on success.
pub fn validate(payload: &ProductPayload) -> StoreResult<String> {
    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(StoreError::InvalidArgument(NAME_REQUIRED));
    }
    if payload.price < 0.0 {
        return Err(StoreError::InvalidArgument(NEGATIVE_PRICE));
    }
    if payload.stock < 0 {
        return Err(StoreError::InvalidArgument(NEGATIVE_STOCK));
    }
    Ok(name.to_string())
}

/// Authoritative in-memory product collection, keyed by id and kept in
/// insertion order.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: IndexMap<ProductId, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: ProductId) -> StoreResult<&Product> {
        self.products.get(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn create(&mut self, payload: &ProductPayload) -> StoreResult<Product> {
        let name = validate(payload)?;
        let product = Product::new(self.next_id(), name, payload.price, payload.stock);
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// Validation runs before the lookup, so a bad payload is rejected even
    /// for an unknown id.
    pub fn update(&mut self, id: ProductId, payload: &ProductPayload) -> StoreResult<Product> {
        let name = validate(payload)?;
        let product = self
            .products
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        product.name = name;
        product.price = payload.price;
        product.stock = payload.stock;
        Ok(product.clone())
    }

    pub fn delete(&mut self, id: ProductId) -> StoreResult<()> {
        self.products
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// One past the highest id in use. Deleting the current maximum lets its
    /// id be handed out again.
    fn next_id(&self) -> ProductId {
        self.products.keys().max().map_or(1, |max| max + 1)
    }
}
