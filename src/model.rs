//! The shape of family data: generations of people, linked by father ids.
//!
//! These are plain serde-derived records matching the JSON dataset format.
//! Field names are camelCase on the wire (`birthYear`, `fatherId`, ...).
//! Nothing in the crate mutates a loaded [`FamilyData`]; the tree builder
//! and the search engine both derive new structures from it.

use serde::{Deserialize, Serialize};

/// A single person in the dataset.
///
/// `id` is optional; a person without one can neither be a father nor be
/// linked to one. `children` is empty in raw source data and is populated
/// only by the tree builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Person>,
}

/// A named grouping of people. The title doubles as a search filter key,
/// so titles should be unique within a dataset (duplicates make filtered
/// reconstruction ambiguous, see [`crate::search::create_filtered_family_data`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Generation {
    pub title: String,
    #[serde(default)]
    pub people: Vec<Person>,
}

/// The whole dataset. Generation order is display-significant: the first
/// generation holds the tree roots.
///
/// Older dataset files used a singular `generation` key; the alias accepts
/// them transparently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyData {
    #[serde(default, alias = "generation")]
    pub generations: Vec<Generation>,
}

impl FamilyData {
    /// Iterate over every person across every generation, in dataset order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.generations.iter().flat_map(|g| g.people.iter())
    }
}
