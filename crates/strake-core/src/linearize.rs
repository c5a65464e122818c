//! C3 linearization over already-registered base chains.
//!
//! The registry resolves each base to its stored linearization before
//! calling in here, so the merge never needs to look types up — it only
//! orders ids. The resulting chain is most-derived-first and duplicate-free,
//! and respects both each base's own chain and the direct base order.

use crate::types::{RegistryError, TypeId};

/// Linearize a new type against its bases' chains.
///
/// `base_chains[i]` must be the stored linearization of `bases[i]`. Returns
/// `InconsistentHierarchy` when no total order satisfies every chain (the
/// classic criss-cross base order).
pub fn linearize(
    id: TypeId,
    type_name: &str,
    bases: &[TypeId],
    base_chains: &[Vec<TypeId>],
) -> Result<Vec<TypeId>, RegistryError> {
    let mut chain = vec![id];
    if bases.is_empty() {
        return Ok(chain);
    }

    // Merge inputs: every base's chain, then the direct base order itself.
    let mut sequences: Vec<Vec<TypeId>> = base_chains.to_vec();
    sequences.push(bases.to_vec());

    while !sequences.is_empty() {
        // A head is a valid candidate when it appears in no other sequence's
        // tail; the first valid head wins.
        let mut candidate = None;
        for (i, seq) in sequences.iter().enumerate() {
            let Some(&head) = seq.first() else { continue };
            let in_a_tail = sequences
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other.iter().skip(1).any(|&tp| tp == head));
            if !in_a_tail {
                candidate = Some(head);
                break;
            }
        }

        let Some(next) = candidate else {
            return Err(RegistryError::InconsistentHierarchy {
                type_name: type_name.to_string(),
            });
        };

        chain.push(next);
        for seq in &mut sequences {
            seq.retain(|&tp| tp != next);
        }
        sequences.retain(|seq| !seq.is_empty());
    }

    Ok(chain)
}

#[cfg(test)]
#[path = "linearize_tests.rs"]
mod tests;
