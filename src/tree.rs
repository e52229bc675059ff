//! Builds the nested family tree out of the flat generation list.
//!
//! People are laid out in an arena (a dense vector of records) with
//! index-based child lists, so father links resolve to indexes rather than
//! shared mutable copies. Index equality makes degenerate links (a person
//! fathering themselves, or a cycle of fathers) visible, and
//! materialization carries a visited set so such links are dropped rather
//! than recursed into.

use std::collections::HashMap;

use crate::model::{FamilyData, Generation, Person};

/// Convert the flat generation list into a single synthetic generation
/// holding the root people of generation 0, each carrying its descendants
/// through the `children` chains.
///
/// This function is total: an empty or unlinkable dataset yields an empty
/// generation with the given title, never an error.
///
/// People without an `id` are excluded from linking and from the root set.
/// A `father_id` that resolves to no id, or to the person itself, is
/// silently dropped. Duplicate ids keep the last occurrence.
pub fn build_family_tree(data: &FamilyData, title: &str) -> FamilyData {
    if data.generations.is_empty() {
        return empty_tree(title);
    }

    // Arena pass: one slot per person carrying an id, in dataset order.
    let mut arena: Vec<Person> = Vec::new();
    let mut children: Vec<Vec<usize>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for generation in &data.generations {
        for person in &generation.people {
            if let Some(id) = person.id.as_deref() {
                slots.insert(id, arena.len());
                arena.push(person.clone());
                children.push(Vec::new());
            }
        }
    }

    // Linking pass: append each child to its father's list, in dataset
    // order, so sibling order is stable without any sort.
    for generation in &data.generations {
        for person in &generation.people {
            let (Some(id), Some(father_id)) = (person.id.as_deref(), person.father_id.as_deref())
            else {
                continue;
            };
            let (Some(&child), Some(&father)) = (slots.get(id), slots.get(father_id)) else {
                continue;
            };
            if father != child {
                children[father].push(child);
            }
        }
    }

    // Roots are the generation-0 people that made it into the arena.
    let people = data.generations[0]
        .people
        .iter()
        .filter_map(|p| p.id.as_deref().and_then(|id| slots.get(id).copied()))
        .map(|root| materialize(root, &arena, &children, &mut vec![false; arena.len()]))
        .collect();

    FamilyData {
        generations: vec![Generation {
            title: title.to_string(),
            people,
        }],
    }
}

fn empty_tree(title: &str) -> FamilyData {
    FamilyData {
        generations: vec![Generation {
            title: title.to_string(),
            people: Vec::new(),
        }],
    }
}

// Recursion depth is bounded by the arena size since every slot is
// materialized at most once per root.
fn materialize(index: usize, arena: &[Person], children: &[Vec<usize>], visited: &mut [bool]) -> Person {
    visited[index] = true;
    let mut person = arena[index].clone();
    let mut nested = Vec::with_capacity(children[index].len());
    for &child in &children[index] {
        // A cycle of father links shows up as an already visited index;
        // the back edge is dropped instead of recursed into.
        if !visited[child] {
            nested.push(materialize(child, arena, children, visited));
        }
    }
    person.children = nested;
    person
}
