//! Questionnaire form state, choice catalogs, and validation.

pub mod catalog;
pub mod model;
pub mod validator;

pub use model::{FormModel, MultiField, ScalarField};
pub use validator::{validate, FieldId, Violation};
