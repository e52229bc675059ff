//! Kindred – a small web service for browsing a family genealogy.
//!
//! The dataset is a hierarchy of generations and people, loaded once from
//! a single JSON file and held read-only for the process lifetime. On top
//! of it the crate provides:
//! * A [`tree`] builder that links people to their fathers by id and
//!   emits a nested tree for the collapsible tree view.
//! * A [`search`] engine that scans all people under configurable
//!   filters (text term, info-field opt-in, generation selection, year
//!   range), ranks matches, and can rebuild a filtered generation list
//!   for the list view.
//! * A [`token`] scheme gating casual access by name. The token is a
//!   reversible base64/JSON bundle with a 24 hour expiry — deliberately
//!   unsigned, an obfuscation rather than a security control.
//!
//! ## Modules
//! * [`model`] – The serde-derived dataset shapes ([`model::Person`],
//!   [`model::Generation`], [`model::FamilyData`]).
//! * [`tree`] – Arena-based father-link tree assembly.
//! * [`search`] – Matching, ranking, filtered reconstruction and
//!   highlight markup.
//! * [`token`] – Token issue/verify and the login allow-list check.
//! * [`settings`] – Layered configuration (defaults, file, environment),
//!   loaded once and passed explicitly.
//! * [`persist`] – Read-only JSON file loading with degrade-to-empty
//!   semantics.
//! * [`server`] – The axum HTTP boundary (`/auth`, `/config`,
//!   `/family-data`).
//! * [`error`] – Crate error type and `Result` alias.
//!
//! ## Failure model
//! Nothing in the core is fatal: an absent or malformed dataset loads as
//! empty, an unlinkable tree builds as an empty generation, a bad token
//! is simply unauthenticated. HTTP statuses (401/400) exist only at the
//! boundary layer.
//!
//! ## Quick Start
//! ```
//! use kindred::model::{FamilyData, Generation, Person};
//! use kindred::search::{SearchFilters, search_family_data};
//! use kindred::tree::build_family_tree;
//!
//! let data = FamilyData {
//!     generations: vec![Generation {
//!         title: "First".to_string(),
//!         people: vec![Person {
//!             id: Some("p1".to_string()),
//!             name: "Anna".to_string(),
//!             ..Person::default()
//!         }],
//!     }],
//! };
//! let results = search_family_data(&data, "ann", &SearchFilters::default());
//! assert_eq!(results.len(), 1);
//! let nested = build_family_tree(&data, "Family Tree");
//! assert_eq!(nested.generations.len(), 1);
//! ```

pub mod error;
pub mod model;
pub mod persist;
pub mod search;
pub mod server;
pub mod settings;
pub mod token;
pub mod tree;
