//! padbind core library
//!
//! This library provides the core functionality of padbind: the controller
//! mapping data model, the key-name translator, the AntiMicroX profile
//! serializer, project persistence, and integrity checks.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod doctor;
pub mod export;
pub mod models;
pub mod parser;
pub mod translator;
