//! Form field identifiers, the field store, and validation rules

pub mod field;
pub mod store;
pub mod validation;

pub use field::FieldId;
pub use store::FormStore;
pub use validation::{FieldError, validate, validate_named, validate_store};
