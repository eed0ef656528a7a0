//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`signup`, `dashboard`, `view`) so individual
//! components can depend on small focused models. Validity is never stored:
//! the modules keep only raw field values and derive everything else on
//! demand through the pure functions in [`validate`].

pub mod dashboard;
pub mod signup;
pub mod validate;
pub mod view;
