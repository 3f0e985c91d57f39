//! Add-employee form engine
//!
//! The draft, its editing/locked state machine, and the validation rules
//! applied on submit. Field identity is the [`FormField`] enum end to
//! end; error messages live in a typed [`FieldErrors`] map keyed by it.

mod draft;
mod field;
mod rules;

pub use draft::{DraftState, EmployeeDraft};
pub use field::{FieldErrors, FormField};
pub use rules::ValidationRules;
