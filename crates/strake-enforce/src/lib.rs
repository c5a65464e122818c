//! Contract enforcement engine for strake type hierarchies.
//!
//! Validates every registration of a type that participates in the contract
//! hierarchy and produces one of three violations:
//! - E001: name conflict (two unrelated ancestors declare the same abstract member)
//! - E002: wrong implementation (an override's signature does not match the declaration)
//! - E003: missing implementation (declared abstract members left uncovered)

pub mod engine;
pub mod violations;
pub mod walker;
