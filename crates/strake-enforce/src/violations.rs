//! The contract violation model.
//!
//! Three kinds, every one carrying structured context rather than just a
//! formatted string, so callers can match on the kind or destructure the
//! payload programmatically.

use serde::{Deserialize, Serialize};

use strake_core::fingerprint;
use strake_core::types::MemberDecl;

/// A (type, member) pair as seen by the validator, with the declaration it
/// refers to and a stable fingerprint of that declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRef {
    pub type_name: String,
    pub member: MemberDecl,
    pub fingerprint: String,
}

impl MemberRef {
    pub fn new(type_name: &str, member: &MemberDecl) -> Self {
        let canonical = format!("{}::{}", type_name, member.canonical());
        Self {
            type_name: type_name.to_string(),
            member: member.clone(),
            fingerprint: fingerprint::fingerprint(&canonical),
        }
    }
}

/// A contract violation. Fatal to the registration that raised it.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractViolation {
    /// Two unrelated ancestors independently declare the same abstract
    /// member name.
    #[error("{}", name_conflict_message(.current))]
    NameConflict {
        current: MemberRef,
        pre_defined: MemberRef,
    },

    /// An override's signature does not structurally match the abstract
    /// declaration it is meant to satisfy.
    #[error("{}", wrong_impl_message(.current))]
    WrongImpl {
        current: MemberRef,
        pre_defined: MemberRef,
    },

    /// Declared abstract members left uncovered by the time a concrete
    /// type is registered. `missing` is sorted and complete; the message
    /// previews at most three names.
    #[error("{}", missing_impl_message(.type_name, .missing))]
    MissingImpl {
        type_name: String,
        missing: Vec<String>,
    },
}

impl ContractViolation {
    pub fn code(&self) -> &'static str {
        match self {
            ContractViolation::NameConflict { .. } => "E001",
            ContractViolation::WrongImpl { .. } => "E002",
            ContractViolation::MissingImpl { .. } => "E003",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            ContractViolation::NameConflict { .. } => "name_conflict",
            ContractViolation::WrongImpl { .. } => "wrong_impl",
            ContractViolation::MissingImpl { .. } => "missing_impl",
        }
    }
}

fn name_conflict_message(current: &MemberRef) -> String {
    format!(
        "name conflict in `{}`, abstract member `{}` should be defined only once",
        current.type_name, current.member.name
    )
}

fn wrong_impl_message(current: &MemberRef) -> String {
    format!(
        "wrong implementation for member `{}` in `{}`",
        current.member.name, current.type_name
    )
}

fn missing_impl_message(type_name: &str, missing: &[String]) -> String {
    let preview = missing[..missing.len().min(3)].join(", ");
    let more = if missing.len() > 3 { ", ..." } else { "" };
    format!(
        "missing implementation in `{}` for {}{}",
        type_name, preview, more
    )
}
