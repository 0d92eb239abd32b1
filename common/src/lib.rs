//! Shared model and client-side logic for the school registry.
//!
//! Everything in this crate is free of browser bindings so it can be unit tested natively;
//! the `frontend` crate wires it to Yew components and `gloo-net` requests.

pub mod config;
pub mod error;
pub mod listing;
pub mod model;
pub mod submission;
pub mod validation;
