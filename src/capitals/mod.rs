//! Capital lookup subsystem for Capital Quest.
//!
//! Provides the built-in region → capital tables for the US, India and the
//! UK, tiered fuzzy matching over them, random picks, and curated fun facts.

pub mod data;
pub mod lookup;
pub mod types;

pub use data::regions;
pub use lookup::{fun_fact, random_pick, random_pick_key, resolve, resolve_key};
pub use types::{CapitalMatch, CountryKey, Region};
