//! Profile export to the AntiMicroX XML format.
//!
//! This module walks the profile data model and emits the consumer's
//! structured XML document, grouping controls by category and resolving
//! key names through the translator.

pub mod antimicrox;
pub mod schema;

// Re-export the export surface
pub use antimicrox::{
    generate_profile_xml, save_profile_xml, ExportOptions, CONFIG_VERSION, DEFAULT_APP_VERSION,
};
pub use schema::{schema_target, SchemaTarget};
