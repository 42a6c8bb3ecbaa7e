mod product;

pub use product::{Product, ProductId, ProductPayload};
