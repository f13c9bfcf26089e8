//! Store access per entity, plus form validation.

mod baked_good;
mod bakery;
mod validation;
pub use baked_good::BakedGoodService;
pub use bakery::BakeryService;
pub use validation::FormValidator;
