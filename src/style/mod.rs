//! Layer styling - the rule tables the engine evaluates per frame.
//!
//! ## Modules
//!
//! - `expression` - `RuleTable` / `Predicate` and their engine JSON form
//! - `palette` - variety names to fill colours, legend rows
//! - `layers` - source and layer registrations, the serialisable style document

mod expression;
mod layers;
mod palette;

pub use expression::{Predicate, Rule, RuleTable, StyleContext};
pub use layers::*;
pub use palette::*;
