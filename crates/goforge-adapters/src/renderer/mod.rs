//! Template renderer adapters.

mod substitution;

pub use substitution::SubstitutionRenderer;
