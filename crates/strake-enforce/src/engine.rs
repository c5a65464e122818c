use std::collections::{HashMap, HashSet};

use strake_core::config::{SignaturePolicy, StrakeConfig};
use strake_core::registry::TypeRegistry;
use strake_core::signature;
use strake_core::store::TypeStore;
use strake_core::types::{MemberDecl, RegistryError, TypeId, TypeRecord, TypeSpec};

use crate::violations::{ContractViolation, MemberRef};
use crate::walker;

/// Errors surfaced by [`ContractEngine::register`]: either the declaration
/// itself is malformed, or the hierarchy's contract is violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnforceError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// Contract enforcement engine. Owns a TypeStore and validates every
/// participating registration before it is committed.
///
/// The engine registers a contract root type at construction; a hierarchy
/// opts in by (transitively) extending [`root`](ContractEngine::root).
/// Types that never reach the root register without any contract checks.
pub struct ContractEngine {
    store: Box<dyn TypeStore + Send>,
    root: TypeId,
    policy: SignaturePolicy,
}

impl Default for ContractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractEngine {
    pub fn new() -> Self {
        Self::with_config(&StrakeConfig::default())
    }

    /// Create an engine configured from a `StrakeConfig`.
    pub fn with_config(config: &StrakeConfig) -> Self {
        let mut store = TypeRegistry::new();
        let record = store
            .resolve(&TypeSpec::new(&config.root_name))
            .expect("an empty registry accepts a base-less root type");
        let root = store.commit(record);
        Self {
            store: Box::new(store),
            root,
            policy: config.policy,
        }
    }

    /// Id of the contract root type.
    pub fn root(&self) -> TypeId {
        self.root
    }

    pub fn policy(&self) -> SignaturePolicy {
        self.policy
    }

    pub fn store(&self) -> &dyn TypeStore {
        self.store.as_ref()
    }

    /// Register a new type. For participating types this runs the full
    /// contract validation before anything is stored; on failure the
    /// registry is left exactly as it was, and the same name may be
    /// resubmitted with a fixed declaration.
    pub fn register(&mut self, spec: TypeSpec) -> Result<TypeId, EnforceError> {
        let record = self.store.resolve(&spec)?;
        if record.linearization.contains(&self.root) {
            tracing::debug!(
                "validating contract for `{}` ({} ancestors)",
                record.name,
                record.linearization.len() - 1
            );
            self.validate(&record)?;
        } else {
            tracing::trace!("`{}` does not participate, skipping validation", record.name);
        }
        Ok(self.store.commit(record))
    }

    /// Run contract validation for a record without touching the store.
    ///
    /// `register` calls this on every participating type; it is public so
    /// validation can be re-run standalone. It derives everything from the
    /// record and the registry on each call — no state carries over, so
    /// repeated runs yield identical outcomes.
    pub fn validate(&self, record: &TypeRecord) -> Result<(), EnforceError> {
        let store = self.store.as_ref();
        let exempt = walker::assumed_concrete_names(store, record, self.root);
        let mut defined: HashMap<String, (TypeId, MemberDecl)> = HashMap::new();
        let mut covered: HashSet<String> = HashSet::new();

        for (tp, member) in walker::members_to_verify(store, record, self.root) {
            if exempt.contains(&member.name) {
                continue;
            }

            if signature::is_abstract(member) {
                if let Some((prev_tp, prev_member)) = defined.get(&member.name) {
                    return Err(ContractViolation::NameConflict {
                        current: self.member_ref(record, tp, member),
                        pre_defined: self.member_ref(record, *prev_tp, prev_member),
                    }
                    .into());
                }
                defined.insert(member.name.clone(), (tp, member.clone()));
            } else if let Some((def_tp, def_member)) = defined.get(&member.name) {
                let expected =
                    signature::signature_of(self.type_name(record, *def_tp), def_member, self.policy)?;
                let actual = signature::signature_of(self.type_name(record, tp), member, self.policy)?;
                if actual != expected {
                    return Err(ContractViolation::WrongImpl {
                        current: self.member_ref(record, tp, member),
                        pre_defined: self.member_ref(record, *def_tp, def_member),
                    }
                    .into());
                }
                covered.insert(member.name.clone());
            }
            // Names never declared abstract are ordinary members, ignored.
        }

        // A type extending the root directly is declaring itself a contract
        // root; it is allowed to stay fully abstract.
        if !record.bases.contains(&self.root) {
            let mut missing: Vec<String> = defined
                .keys()
                .filter(|name| !covered.contains(*name))
                .cloned()
                .collect();
            missing.sort();
            if !missing.is_empty() {
                return Err(ContractViolation::MissingImpl {
                    type_name: record.name.clone(),
                    missing,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Resolve a member name through a committed type's linearization, the
    /// way an attribute lookup would see it: most-derived declaration wins,
    /// and within one type the latest same-name declaration wins.
    pub fn resolve_member(&self, id: TypeId, name: &str) -> Option<(TypeId, &MemberDecl)> {
        let record = self.store.get(id)?;
        for &tp in &record.linearization {
            let Some(ancestor) = self.store.get(tp) else {
                continue;
            };
            if let Some(member) = ancestor.members.iter().rev().find(|m| m.name == name) {
                return Some((tp, member));
            }
        }
        None
    }

    fn member_ref(&self, record: &TypeRecord, tp: TypeId, member: &MemberDecl) -> MemberRef {
        MemberRef::new(self.type_name(record, tp), member)
    }

    fn type_name<'a>(&'a self, record: &'a TypeRecord, tp: TypeId) -> &'a str {
        if tp == record.id {
            &record.name
        } else {
            self.store.get(tp).map_or("<detached>", |r| r.name.as_str())
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
