//! Reusable view pieces shared by the pages.

pub mod icon;
pub mod menu_drawer;
pub mod password_strength;
