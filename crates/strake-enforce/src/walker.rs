//! The hierarchy walker: turns a record's linearization into the ordered
//! member stream the validator consumes.
//!
//! The walk is base-to-derived: reverse the linearization, skip everything
//! above the contract root, keep only ancestors that participate in the
//! contract hierarchy, then enumerate each survivor's own members in
//! declaration order. Ordering is what makes conflict detection
//! deterministic — the first abstract declaration of a name wins as the
//! canonical definition.

use std::collections::BTreeSet;

use strake_core::store::TypeStore;
use strake_core::types::{MemberDecl, TypeId, TypeRecord};

/// The ancestors whose members take part in verification, base-to-derived.
///
/// `record` itself is included last. It may not be committed yet — the
/// validator runs before commit — so it is recognized by id rather than
/// looked up.
fn verified_ancestors(store: &dyn TypeStore, record: &TypeRecord, root: TypeId) -> Vec<TypeId> {
    record
        .linearization
        .iter()
        .rev()
        .copied()
        .skip_while(|&tp| tp != root)
        .filter(|&tp| tp == record.id || store.is_ancestor(root, tp))
        .collect()
}

/// Ordered `(declaring_type, member)` sequence to verify for `record`.
pub fn members_to_verify<'a>(
    store: &'a dyn TypeStore,
    record: &'a TypeRecord,
    root: TypeId,
) -> Vec<(TypeId, &'a MemberDecl)> {
    let mut out = Vec::new();
    for tp in verified_ancestors(store, record, root) {
        let members: &[MemberDecl] = if tp == record.id {
            &record.members
        } else {
            match store.get(tp) {
                Some(ancestor) => &ancestor.members,
                None => continue,
            }
        };
        out.extend(members.iter().map(|m| (tp, m)));
    }
    out
}

/// Union of the assumed-concrete name sets over the same ancestor range.
/// These names bypass both the conflict and the completeness checks.
pub fn assumed_concrete_names(
    store: &dyn TypeStore,
    record: &TypeRecord,
    root: TypeId,
) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for tp in verified_ancestors(store, record, root) {
        let assumed: &[String] = if tp == record.id {
            &record.assumed_concrete
        } else {
            match store.get(tp) {
                Some(ancestor) => &ancestor.assumed_concrete,
                None => continue,
            }
        };
        names.extend(assumed.iter().cloned());
    }
    names
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
