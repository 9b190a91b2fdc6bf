//! Seed import for demo and fixture data
//!
//! - Seed Format v0 schema (YAML)
//! - parser with validation
//! - transactional importer

pub mod format_v0;
pub mod importer;
pub mod parser;

pub use format_v0::SeedV0;
pub use importer::{import_seed, import_seed_str, SeedReport};
pub use parser::{parse_seed_file, parse_seed_str};
