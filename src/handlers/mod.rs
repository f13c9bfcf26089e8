//! HTTP handlers for bakeries and baked goods.

pub mod baked_good;
pub mod bakery;
pub use baked_good::*;
pub use bakery::*;
