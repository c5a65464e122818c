//! In-memory implementation of [`TypeStore`].
//!
//! Records live in a dense `Vec` indexed by id; the inheritance structure
//! is mirrored into a petgraph `DiGraphMap` (child -> parent edges) so
//! ancestry and descendant queries are plain reachability walks.

use std::collections::HashMap;

use petgraph::algo::has_path_connecting;
use petgraph::graphmap::DiGraphMap;

use crate::linearize::linearize;
use crate::store::TypeStore;
use crate::types::{RegistryError, TypeId, TypeRecord, TypeSpec};

#[derive(Debug, Default)]
pub struct TypeRegistry {
    records: Vec<TypeRecord>,
    by_name: HashMap<String, TypeId>,
    graph: DiGraphMap<TypeId, ()>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeStore for TypeRegistry {
    fn resolve(&self, spec: &TypeSpec) -> Result<TypeRecord, RegistryError> {
        if self.by_name.contains_key(&spec.name) {
            return Err(RegistryError::DuplicateType(spec.name.clone()));
        }

        let mut base_chains = Vec::with_capacity(spec.bases.len());
        for (i, &base) in spec.bases.iter().enumerate() {
            let Some(record) = self.get(base) else {
                return Err(RegistryError::UnknownBase {
                    type_name: spec.name.clone(),
                    base,
                });
            };
            if spec.bases[..i].contains(&base) {
                return Err(RegistryError::DuplicateBase {
                    type_name: spec.name.clone(),
                    base,
                });
            }
            base_chains.push(record.linearization.clone());
        }

        let id = TypeId(self.records.len() as u32);
        let linearization = linearize(id, &spec.name, &spec.bases, &base_chains)?;

        Ok(TypeRecord {
            id,
            name: spec.name.clone(),
            bases: spec.bases.clone(),
            members: spec.members.clone(),
            assumed_concrete: spec.assumed_concrete.clone(),
            linearization,
        })
    }

    fn commit(&mut self, record: TypeRecord) -> TypeId {
        debug_assert_eq!(record.id.0 as usize, self.records.len());
        let id = record.id;
        self.graph.add_node(id);
        for &base in &record.bases {
            self.graph.add_edge(id, base, ());
        }
        self.by_name.insert(record.name.clone(), id);
        self.records.push(record);
        id
    }

    fn get(&self, id: TypeId) -> Option<&TypeRecord> {
        self.records.get(id.0 as usize)
    }

    fn get_by_name(&self, name: &str) -> Option<&TypeRecord> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    fn is_ancestor(&self, ancestor: TypeId, descendant: TypeId) -> bool {
        if !self.graph.contains_node(ancestor) || !self.graph.contains_node(descendant) {
            return false;
        }
        has_path_connecting(&self.graph, descendant, ancestor, None)
    }

    fn descendants_of(&self, id: TypeId) -> Vec<TypeId> {
        let mut out: Vec<TypeId> = self
            .graph
            .nodes()
            .filter(|&n| n != id && self.is_ancestor(id, n))
            .collect();
        out.sort();
        out
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
