//! Bot API Type Generator
//!
//! Generates client-side Rust types from a machine-readable bot API
//! description. Types with fields become structs; zero-field types with
//! subtypes become families (object-safe traits) that concrete structs
//! implement.
//!
//! ## Features
//!
//! - **Classification**: every schema type is a struct, an empty struct or a
//!   family; unknown zero-field types abort the run
//! - **Discriminated families**: members encode a `"type"` tag derived from
//!   their name (`InlineQueryResultCachedMpeg4Gif` -> `mpeg4_gif`)
//! - **Attachable media**: media members route uploads through a side-table
//!   before encoding (see the `botapi-runtime` package)
//! - **Reply markup**: a synthetic family over the four keyboard markups
//! - **Drift checks**: regenerate in memory and diff against committed code
//!
//! ## Pipeline
//!
//! ```text
//! api.json -> ApiDescription -> Classifier -> FieldProjector + Binder
//!          -> Declarations -> Rust emitter -> gen_types.rs
//! ```

pub mod checksum;
pub mod codegen;
pub mod config;
pub mod drift;
pub mod error;
pub mod graph;
pub mod schema;

pub use checksum::Checksum;
pub use codegen::{generate_rust, CodegenContext, Declaration, GenerateOptions, GeneratedOutput};
pub use config::GeneratorConfig;
pub use drift::DriftReport;
pub use error::{Result, SchemaError};
pub use graph::{Catalog, Classifier, FamilyKind, TypeKind};
pub use schema::{ApiDescription, FieldDescriptor, TypeDescriptor};
