/*
 * Responsibility
 * - Sec-Session-Registration (device bound session) header -> validated RegistrationParam
 * - core: header extraction + per-member validation
 * - trust: endpoint URL trust policy
 * - types: RegistrationParam / SignatureAlgorithm
 */
mod core;
pub mod trust;
mod types;

pub use self::core::{REGISTRATION_HEADER, create_if_valid, parse_header_value, parse_member};
pub use self::types::{RegistrationParam, SignatureAlgorithm};
