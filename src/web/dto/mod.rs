//! Data Transfer Objects for the Web API.
//!
//! Request payloads are defined next to the credential validator in
//! [`crate::auth::validation`]; this module holds the response envelopes and
//! the body extractor.

pub mod extract;
pub mod response;

pub use extract::{Payload, INVALID_BODY};
pub use response::*;
