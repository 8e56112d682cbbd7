//! Rule-based parser turning noisy recognized tag text into a structured
//! plant identity (genus / species-or-grex / clone name / hybrid flag).
//!
//! ## Quickstart
//!
//! ```
//! use orchid_judge_tag::parse_tag;
//!
//! let id = parse_tag("Cattleya labiata \"Fire Dragon\"", 0.9);
//! assert_eq!(id.genus, "Cattleya");
//! assert_eq!(id.species_or_grex, "labiata");
//! assert_eq!(id.clone_name, "Fire Dragon");
//! assert!(!id.is_hybrid);
//! ```
//!
//! The parser is a pure function of its input: no lookups, no state, no
//! botanical validation. Unparseable fields come back as empty strings and
//! recognition failures yield an all-empty identity, never an error.

mod identity;
mod parse;

pub use identity::TagIdentity;
pub use parse::{normalize_tag_text, parse_tag};
