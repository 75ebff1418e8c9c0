//! Schema Model
//!
//! In-memory description of the remote API's types, fields and subtype edges.
//! Loaded once from the JSON description and never mutated during generation.

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// Format of `release_date` in the description (e.g. "September 22, 2023")
const RELEASE_DATE_FORMAT: &str = "%B %d, %Y";

// =============================================================================
// API Description
// =============================================================================

/// The whole API description. `types` keeps declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiDescription {
    /// Human readable API version (e.g. "Bot API 6.9")
    #[serde(default)]
    pub version: Option<String>,

    /// Raw release date as published
    #[serde(default, rename = "release_date")]
    pub release: Option<String>,

    /// Link to the changelog entry of this release
    #[serde(default)]
    pub changelog: Option<String>,

    /// All described types, keyed by name
    #[serde(default)]
    pub types: IndexMap<String, TypeDescriptor>,
}

impl ApiDescription {
    /// Parse a description from JSON text and validate it
    pub fn from_json_str(source: &str) -> Result<Self> {
        let description: Self = serde_json::from_str(source)?;
        description.validate()?;
        Ok(description)
    }

    /// Read and parse a description file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded API description");
        Self::from_json_str(&source)
    }

    /// Build a description from types in declaration order
    pub fn from_types(types: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.name.clone(), t)).collect(),
            ..Self::default()
        }
    }

    /// Look up a type by name
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Whether `name` is a type declared by the schema (as opposed to a primitive)
    pub fn is_schema_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Types in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Parsed release date. Unparsable dates are logged and ignored.
    pub fn release_date(&self) -> Option<NaiveDate> {
        let raw = self.release.as_deref()?;
        match NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::warn!(release_date = raw, error = %e, "ignoring unparsable release date");
                None
            }
        }
    }

    /// Structural checks the generator relies on
    pub fn validate(&self) -> Result<()> {
        for (key, ty) in &self.types {
            if key != &ty.name {
                return Err(SchemaError::NameMismatch {
                    key: key.clone(),
                    name: ty.name.clone(),
                });
            }
            ty.validate()?;
        }
        Ok(())
    }
}

// =============================================================================
// Type Descriptor
// =============================================================================

/// One schema-declared type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,

    #[serde(default)]
    pub href: String,

    #[serde(default)]
    pub description: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Members of this type when it is itself a family
    #[serde(default)]
    pub subtypes: Vec<String>,

    /// Families this type belongs to
    #[serde(default)]
    pub subtype_of: Vec<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_subtypes<I, S>(mut self, subtypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subtypes.extend(subtypes.into_iter().map(Into::into));
        self
    }

    pub fn with_parent(mut self, family: impl Into<String>) -> Self {
        self.subtype_of.push(family.into());
        self
    }

    pub fn has_subtypes(&self) -> bool {
        !self.subtypes.is_empty()
    }

    pub fn is_subtype_of(&self, family: &str) -> bool {
        self.subtype_of.iter().any(|parent| parent == family)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !wire_name_pattern().is_match(&field.name) {
                return Err(SchemaError::InvalidFieldName {
                    type_name: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    type_name: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if field.types.is_empty() {
                return Err(SchemaError::EmptyFieldTypes {
                    type_name: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn wire_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid wire name pattern"))
}

// =============================================================================
// Field Descriptor
// =============================================================================

/// One field within a type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Wire name (snake_case)
    pub name: String,

    /// Declared alternatives, e.g. `["Integer", "String"]` or `["Array of PhotoSize"]`
    pub types: Vec<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            types: vec![ty.into()],
            required,
            description: String::new(),
        }
    }

    /// Field accepting several alternative types
    pub fn union<I, S>(name: impl Into<String>, types: I, required: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            required,
            description: String::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declared alternatives, parsed
    pub fn type_refs(&self) -> Vec<TypeRef> {
        self.types.iter().map(|t| TypeRef::parse(t)).collect()
    }
}

// =============================================================================
// Type References
// =============================================================================

/// Wire-level primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Integer,
    Float,
    String,
    Boolean,
    /// Always-true flag; rendered like a boolean
    True,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Integer" => Some(Self::Integer),
            "Float" => Some(Self::Float),
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "True" => Some(Self::True),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::True => "True",
        }
    }
}

/// A parsed declared type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Primitive(Primitive),
    /// Reference to a schema type (or family) by name
    Named(String),
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Parse `Integer`, `PhotoSize`, `Array of Array of PhotoSize`, ...
    pub fn parse(declared: &str) -> Self {
        let declared = declared.trim();
        if let Some(inner) = declared.strip_prefix("Array of ") {
            return Self::Array(Box::new(Self::parse(inner)));
        }
        match Primitive::from_name(declared) {
            Some(p) => Self::Primitive(p),
            None => Self::Named(declared.to_string()),
        }
    }

    /// The element type after stripping all `Array of` layers
    pub fn element(&self) -> &TypeRef {
        match self {
            Self::Array(inner) => inner.element(),
            other => other,
        }
    }

    pub fn array_depth(&self) -> usize {
        match self {
            Self::Array(inner) => 1 + inner.array_depth(),
            _ => 0,
        }
    }

    /// Same array nesting with a different element
    pub fn with_element(&self, element: TypeRef) -> TypeRef {
        match self {
            Self::Array(inner) => Self::Array(Box::new(inner.with_element(element))),
            _ => element,
        }
    }

    pub fn named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Named(name) => f.write_str(name),
            Self::Array(inner) => write!(f, "Array of {}", inner),
        }
    }
}
