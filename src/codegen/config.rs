//! Render Profile
//!
//! Rust-specific rendering configuration: primitive mappings, the runtime
//! crate generated code links against, derive sets and keyword escaping.
//!
//! Key principle: classification, projection and binding are config-free.
//! Only emission uses the profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::catalog::INPUT_FILE;
use crate::schema::Primitive;

/// Rust rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderProfile {
    /// Type mappings for wire primitives
    pub types: TypeMappings,

    /// Path of the runtime support crate used by generated code
    pub runtime_crate: String,

    /// Families provided by the runtime instead of being generated
    /// (family name -> type name inside the runtime crate)
    pub runtime_types: BTreeMap<String, String>,

    /// Derives for structs that hold only owned data
    pub derives: Vec<String>,

    /// Derives for structs holding family trait objects
    pub family_holder_derives: Vec<String>,

    /// Keyword escape (`r#` for raw identifiers, otherwise a suffix)
    pub keyword_escape: String,
}

/// Type mappings for wire primitives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMappings {
    pub integer: String,
    pub float: String,
    pub string: String,
    pub boolean: String,
    /// Rendering of marker families: any JSON value
    pub any: String,
}

impl Default for TypeMappings {
    fn default() -> Self {
        Self {
            integer: "i64".to_string(),
            float: "f64".to_string(),
            string: "String".to_string(),
            boolean: "bool".to_string(),
            any: "serde_json::Value".to_string(),
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            types: TypeMappings::default(),
            runtime_crate: "botapi_runtime".to_string(),
            runtime_types: [(INPUT_FILE.to_string(), "InputFile".to_string())]
                .into_iter()
                .collect(),
            derives: ["Debug", "Clone", "Default", "Serialize", "Deserialize"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            family_holder_derives: ["Debug", "Serialize"].iter().map(|s| s.to_string()).collect(),
            keyword_escape: "r#".to_string(),
        }
    }
}

// =============================================================================
// Render Helpers
// =============================================================================

impl RenderProfile {
    /// Use a different runtime crate path
    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    /// Get the type string for a primitive
    pub fn primitive_type(&self, primitive: Primitive) -> &str {
        match primitive {
            Primitive::Integer => &self.types.integer,
            Primitive::Float => &self.types.float,
            Primitive::String => &self.types.string,
            Primitive::Boolean | Primitive::True => &self.types.boolean,
        }
    }

    /// Fully qualified path of a runtime item
    pub fn runtime_path(&self, item: &str) -> String {
        format!("{}::{}", self.runtime_crate, item)
    }

    /// Runtime type standing in for a family, if any
    pub fn runtime_type(&self, family: &str) -> Option<&str> {
        self.runtime_types.get(family).map(String::as_str)
    }

    /// Wrap a type to make it optional
    pub fn wrap_optional(&self, type_str: &str) -> String {
        format!("Option<{}>", type_str)
    }

    /// Wrap a type in a list
    pub fn wrap_array(&self, type_str: &str) -> String {
        format!("Vec<{}>", type_str)
    }

    /// Heap indirection for optional struct references (breaks cycles)
    pub fn wrap_box(&self, type_str: &str) -> String {
        format!("Box<{}>", type_str)
    }

    /// Owned trait object for a discriminated family
    pub fn wrap_dyn(&self, family: &str) -> String {
        format!("Box<dyn {}>", family)
    }
}
