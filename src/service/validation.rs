//! Turn raw form fields into typed inputs.

use crate::error::AppError;
use crate::model::{BakedGoodForm, BakeryChanges, BakeryForm, NewBakedGood};

pub struct FormValidator;

impl FormValidator {
    /// All three fields are required; `price` must be a finite number and `bakery_id` an integer.
    pub fn new_baked_good(form: BakedGoodForm) -> Result<NewBakedGood, AppError> {
        let name = required(form.name, "name")?;
        let price_raw = required(form.price, "price")?;
        let bakery_raw = required(form.bakery_id, "bakery_id")?;

        let price: f64 = price_raw
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| AppError::Validation("price must be a number".into()))?;
        let bakery_id: i64 = bakery_raw
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("bakery_id must be an integer".into()))?;

        Ok(NewBakedGood {
            name,
            price,
            bakery_id,
        })
    }

    /// Blank or absent `name` means no change. A non-blank name is kept as submitted.
    pub fn bakery_changes(form: BakeryForm) -> BakeryChanges {
        BakeryChanges {
            name: form.name.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Present and not blank. The value itself is returned untouched.
fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}
