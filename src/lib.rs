//! # cashease-client
//!
//! Leptos + WASM frontend for the CashEase consumer finance mock-up:
//! a signup form with real-time validation, a simulated loading
//! transition, and a static dashboard. Everything is client-side
//! rendered; there is no backend and no persisted state.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
