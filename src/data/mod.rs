//! Data layer: classmark codec, CSV loading, and the search index.
//!
//! Architecture:
//! ```text
//!  subjects.csv   locations.csv
//!        │              │
//!        ▼              ▼
//!   ┌──────────────────────┐
//!   │        loader         │  validate rows → SubjectsMap / LocationsMap
//!   └──────────────────────┘
//!              │
//!              ▼
//!       ┌────────────┐
//!       │   Catalog   │  classmark / subject / location indexes
//!       └────────────┘
//!              │
//!              ▼
//!     search_by_subject / search_by_classmark / search_by_location
//! ```
//!
//! The `classmark` module underpins the ranged locations schema: it maps
//! 1–2 letter classmarks onto dense integer ranks and expands inclusive
//! ranges between two marks.

pub mod catalog;
pub mod classmark;
pub mod loader;
pub mod model;
