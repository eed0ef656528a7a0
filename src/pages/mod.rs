//! One page component per top-level view.

pub mod dashboard;
pub mod loading;
pub mod signup;
