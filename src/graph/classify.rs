//! Type Classification
//!
//! Decides what each schema type becomes:
//! - a concrete struct (it has fields, or it is a whitelisted empty type)
//! - a family: marker (no shared method) or discriminated (shared encode method)
//!
//! Zero-field types are only accepted when the catalog knows them. Anything
//! else aborts generation so the catalog is kept in sync with the API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, FamilyRole, REPLY_MARKUP};
use crate::error::{Result, SchemaError};
use crate::schema::{ApiDescription, TypeDescriptor};

// =============================================================================
// Family Kind
// =============================================================================

/// Encode contract shared by the members of a discriminated family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeContract {
    /// `family(&self) -> bytes`
    Plain,
    /// `family_params(&self, name, attachments) -> bytes`
    Attachable,
}

/// Generated shape of a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyKind {
    /// Interface with no methods
    Marker,
    /// Interface with one encode-capable method
    Discriminated(EncodeContract),
}

impl FamilyKind {
    pub fn is_discriminated(&self) -> bool {
        matches!(self, Self::Discriminated(_))
    }
}

// =============================================================================
// Type Kind
// =============================================================================

/// What kind of declaration a schema type produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// Struct with the type's fields
    Struct,
    /// Whitelisted struct with no fields
    EmptyStruct,
    /// Abstract family
    Family { role: FamilyRole, kind: FamilyKind },
}

// =============================================================================
// Classification Result
// =============================================================================

/// Classification of every type plus the family registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classifications {
    kinds: IndexMap<String, TypeKind>,
    families: IndexMap<String, FamilyKind>,
}

impl Classifications {
    pub fn kind(&self, name: &str) -> Option<TypeKind> {
        self.kinds.get(name).copied()
    }

    /// Family kind for a family name, including the synthetic reply-markup family
    pub fn family(&self, name: &str) -> Option<FamilyKind> {
        self.families.get(name).copied()
    }

    /// All families in registration order (reply markup first)
    pub fn families(&self) -> impl Iterator<Item = (&str, FamilyKind)> {
        self.families.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// =============================================================================
// Classifier
// =============================================================================

/// Classifies all types of an API description
pub struct Classifier<'a> {
    api: &'a ApiDescription,
    catalog: &'a Catalog,
}

impl<'a> Classifier<'a> {
    pub fn new(api: &'a ApiDescription, catalog: &'a Catalog) -> Self {
        Self { api, catalog }
    }

    /// Classify all types, failing on the first unknown zero-field type
    pub fn classify_all(&self) -> Result<Classifications> {
        let mut result = Classifications::default();

        // reply_markup accepts several unrelated shapes; the schema has no edge for it
        result.families.insert(
            REPLY_MARKUP.to_string(),
            FamilyKind::Discriminated(EncodeContract::Plain),
        );

        for ty in self.api.iter() {
            let kind = self.classify(ty)?;
            tracing::debug!(type_name = %ty.name, ?kind, "classified");
            if let TypeKind::Family { kind: family, .. } = kind {
                result.families.insert(ty.name.clone(), family);
            }
            result.kinds.insert(ty.name.clone(), kind);
        }

        Ok(result)
    }

    /// Classify a single type
    pub fn classify(&self, ty: &TypeDescriptor) -> Result<TypeKind> {
        if ty.name == REPLY_MARKUP {
            return Err(SchemaError::ReservedTypeName {
                type_name: ty.name.clone(),
            });
        }

        if !ty.fields.is_empty() {
            return Ok(TypeKind::Struct);
        }

        if let Some(role) = FamilyRole::of(&ty.name)
            .filter(|role| FamilyRole::SCHEMA_FAMILIES.contains(role))
        {
            let kind = match (role, ty.has_subtypes()) {
                (_, false) => FamilyKind::Marker,
                (FamilyRole::AttachableMedia, true) => {
                    FamilyKind::Discriminated(EncodeContract::Attachable)
                }
                (_, true) => FamilyKind::Discriminated(EncodeContract::Plain),
            };
            return Ok(TypeKind::Family { role, kind });
        }

        if self.catalog.is_empty_struct(&ty.name) {
            return Ok(TypeKind::EmptyStruct);
        }

        Err(SchemaError::UnclassifiedEmptyType {
            type_name: ty.name.clone(),
        })
    }
}
