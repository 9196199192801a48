//! Device bound session registration: `Sec-Session-Registration` header
//! parsing and validation, plus a small HTTP service for inspecting what a
//! client would derive from a given response.
//!
//! The parser lives in [`services::session_registration`]; everything else is
//! the service around it.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use services::session_registration::{
    REGISTRATION_HEADER, RegistrationParam, SignatureAlgorithm, create_if_valid,
};
