//! Member classification: abstract-marker detection and signature
//! computation.
//!
//! A signature is the comparable call shape of a member, or the property
//! sentinel for members that have no call shape of their own. Properties
//! compare by kind alone — getter arity is fixed by the property protocol,
//! so there is nothing further to compare.

use serde::{Deserialize, Serialize};

use crate::config::SignaturePolicy;
use crate::types::{MemberDecl, MemberKind, Param, RegistryError};

/// Comparable descriptor of a member's call shape.
///
/// Equality is structural. `Property` equals only `Property`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signature {
    Property,
    Params(Vec<Param>),
}

impl Signature {
    /// Compact rendering for messages.
    pub fn render(&self) -> String {
        match self {
            Signature::Property => "<property>".to_string(),
            Signature::Params(params) => {
                let rendered: Vec<String> = params.iter().map(Param::render).collect();
                format!("({})", rendered.join(", "))
            }
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// True iff the member carries the abstract marker.
pub fn is_abstract(member: &MemberDecl) -> bool {
    member.is_abstract
}

/// Compute the signature of a member as declared on `owner`.
///
/// A class method's leading receiver parameter is bound out, so its
/// signature is the shape callers actually see. Instance and static
/// methods keep their parameter list as declared. Members with no callable
/// shape fold into the property sentinel under the lenient policy and are
/// rejected under the strict one.
pub fn signature_of(
    owner: &str,
    member: &MemberDecl,
    policy: SignaturePolicy,
) -> Result<Signature, RegistryError> {
    match member.kind {
        MemberKind::Property => Ok(Signature::Property),
        MemberKind::ClassMethod => Ok(Signature::Params(
            member.params.iter().skip(1).cloned().collect(),
        )),
        MemberKind::InstanceMethod | MemberKind::StaticMethod => {
            Ok(Signature::Params(member.params.clone()))
        }
        MemberKind::Data => match policy {
            SignaturePolicy::Lenient => Ok(Signature::Property),
            SignaturePolicy::Strict => Err(RegistryError::UnclassifiableMember {
                type_name: owner.to_string(),
                member: member.name.clone(),
            }),
        },
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
