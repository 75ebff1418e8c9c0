//! Error types for type generation

use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema errors. All of them abort the generation run.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("unknown type {type_name} has no fields - please check if this requires implementation")]
    UnclassifiedEmptyType { type_name: String },

    #[error("unable to handle parent type {family} while generating for type {type_name}")]
    UnknownParentFamily { family: String, type_name: String },

    #[error("failed to get preferred type of field {field} on {type_name}: cannot choose between {alternatives:?}")]
    UnresolvableFieldType {
        type_name: String,
        field: String,
        alternatives: Vec<String>,
    },

    #[error("type {type_name} would carry a discriminator for each of {families:?}")]
    ConflictingDiscriminators {
        type_name: String,
        families: Vec<String>,
    },

    #[error("type name {type_name} is reserved for a generated family")]
    ReservedTypeName { type_name: String },

    #[error("field {field} on {type_name} declares no types")]
    EmptyFieldTypes { type_name: String, field: String },

    #[error("duplicate field {field} on {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("field name {field} on {type_name} is not snake_case")]
    InvalidFieldName { type_name: String, field: String },

    #[error("type registered under key {key} is named {name}")]
    NameMismatch { key: String, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl SchemaError {
    /// Name of the schema type the error is about, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::UnclassifiedEmptyType { type_name }
            | Self::UnknownParentFamily { type_name, .. }
            | Self::UnresolvableFieldType { type_name, .. }
            | Self::ConflictingDiscriminators { type_name, .. }
            | Self::ReservedTypeName { type_name }
            | Self::EmptyFieldTypes { type_name, .. }
            | Self::DuplicateField { type_name, .. }
            | Self::InvalidFieldName { type_name, .. } => Some(type_name),
            Self::NameMismatch { key, .. } => Some(key),
            Self::Io(_) | Self::Json(_) | Self::Config(_) => None,
        }
    }
}
