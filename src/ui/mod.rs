//! UI module
//!
//! Contains reusable UI components shared across views.

pub mod components;
