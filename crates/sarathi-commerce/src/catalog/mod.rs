//! Product catalog module.
//!
//! Read-only views over the catalog collections, plus the listing queries
//! the product, division and home pages run over them.

mod division;
mod filter;
mod industry;
mod product;

pub use division::{
    active_divisions, division_products, find_by_slug, BusinessDivision, DIVISION_PRODUCT_LIMIT,
};
pub use filter::{categories, related_products, ProductFilter, ALL_CATEGORIES, RELATED_PRODUCT_LIMIT};
pub use industry::{in_display_order, IndustryServed};
pub use product::Product;
