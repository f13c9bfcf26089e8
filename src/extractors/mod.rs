pub mod form;

pub use form::{FormBody, OptionalFormBody};
