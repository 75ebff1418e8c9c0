//! Field Projection
//!
//! Maps each schema field of a struct-shaped type to a generated field:
//! picks the preferred type, drops discriminator fields that the binder
//! injects, forces the upload type onto media fields and decides optionality.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::graph::catalog::{FamilyRole, INPUT_FILE, INPUT_MEDIA};
use crate::graph::{Classifications, FamilyKind, Membership};
use crate::schema::{ApiDescription, FieldDescriptor, Primitive, TypeDescriptor, TypeRef};

/// Wire field holding the discriminator of tagged families
pub const TYPE_FIELD: &str = "type";

/// Field of attachable media that carries the upload
pub const MEDIA_FIELD: &str = "media";

// =============================================================================
// Preferred Type Resolution
// =============================================================================

/// Reduces a field's declared alternatives to one type
pub trait TypeResolver {
    fn preferred(&self, owner: &TypeDescriptor, field: &FieldDescriptor) -> Result<TypeRef>;
}

/// Default resolver: single type, then common family, then priority list
pub struct PriorityResolver<'a> {
    membership: &'a Membership,
    priority: &'a [String],
}

impl<'a> PriorityResolver<'a> {
    pub fn new(membership: &'a Membership, priority: &'a [String]) -> Self {
        Self { membership, priority }
    }

    fn common_family(&self, refs: &[TypeRef]) -> Option<TypeRef> {
        let first = refs.first()?;
        let depth = first.array_depth();
        if refs.iter().any(|r| r.array_depth() != depth) {
            return None;
        }
        let names: Option<Vec<&str>> = refs.iter().map(|r| r.element().named()).collect();
        let family = self.membership.common_family(names?)?;
        Some(first.with_element(TypeRef::Named(family.to_string())))
    }
}

impl TypeResolver for PriorityResolver<'_> {
    fn preferred(&self, owner: &TypeDescriptor, field: &FieldDescriptor) -> Result<TypeRef> {
        let refs = field.type_refs();
        if let [only] = refs.as_slice() {
            return Ok(only.clone());
        }

        if let Some(family) = self.common_family(&refs) {
            return Ok(family);
        }

        for preferred in self.priority {
            if let Some(found) = refs.iter().find(|r| &r.to_string() == preferred) {
                return Ok(found.clone());
            }
        }

        Err(SchemaError::UnresolvableFieldType {
            type_name: owner.name.clone(),
            field: field.name.clone(),
            alternatives: field.types.clone(),
        })
    }
}

// =============================================================================
// Projected Fields
// =============================================================================

/// Resolved type of a generated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Primitive(Primitive),
    /// Concrete schema type, embedded by value
    Struct(String),
    /// Family (marker or discriminated)
    Family { name: String, kind: FamilyKind },
    Array(Box<FieldType>),
}

impl FieldType {
    /// Whether values of this type are trait objects of a discriminated family
    pub fn holds_family_object(&self) -> bool {
        match self {
            Self::Family { kind, .. } => kind.is_discriminated(),
            Self::Array(inner) => inner.holds_family_object(),
            Self::Primitive(_) | Self::Struct(_) => false,
        }
    }

    /// Whether this names another schema type directly (not a primitive, not a list)
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Struct(_) | Self::Family { .. })
    }
}

/// One generated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedField {
    /// Wire name (snake_case)
    pub wire_name: String,
    pub description: String,
    pub required: bool,
    pub ty: FieldType,
    /// May be absent, distinguishable from the type's zero value
    pub nullable: bool,
}

// =============================================================================
// Projector
// =============================================================================

/// Projects the fields of struct-shaped types
pub struct FieldProjector<'a> {
    api: &'a ApiDescription,
    classes: &'a Classifications,
    resolver: &'a dyn TypeResolver,
}

impl<'a> FieldProjector<'a> {
    pub fn new(
        api: &'a ApiDescription,
        classes: &'a Classifications,
        resolver: &'a dyn TypeResolver,
    ) -> Self {
        Self { api, classes, resolver }
    }

    /// Generated fields of `ty`, in schema order
    pub fn project(&self, ty: &TypeDescriptor) -> Result<Vec<ProjectedField>> {
        let suppress_type = ty
            .subtype_of
            .iter()
            .filter_map(|parent| FamilyRole::of(parent))
            .any(|role| role.suppresses_type_field());
        let is_media = ty.is_subtype_of(INPUT_MEDIA);

        let mut fields = Vec::with_capacity(ty.fields.len());
        for field in &ty.fields {
            // set by the discriminator injection, never by users
            if suppress_type && field.name == TYPE_FIELD {
                continue;
            }

            let field_type = if is_media && field.name == MEDIA_FIELD {
                let kind = self.classes.family(INPUT_FILE).ok_or_else(|| {
                    SchemaError::UnresolvableFieldType {
                        type_name: ty.name.clone(),
                        field: field.name.clone(),
                        alternatives: vec![INPUT_FILE.to_string()],
                    }
                })?;
                FieldType::Family {
                    name: INPUT_FILE.to_string(),
                    kind,
                }
            } else {
                let preferred = self.resolver.preferred(ty, field)?;
                self.field_type(ty, field, &preferred)?
            };

            let nullable = field_type.is_reference() && !field.required;
            fields.push(ProjectedField {
                wire_name: field.name.clone(),
                description: field.description.clone(),
                required: field.required,
                ty: field_type,
                nullable,
            });
        }

        Ok(fields)
    }

    fn field_type(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        type_ref: &TypeRef,
    ) -> Result<FieldType> {
        match type_ref {
            TypeRef::Primitive(p) => Ok(FieldType::Primitive(*p)),
            TypeRef::Array(inner) => Ok(FieldType::Array(Box::new(
                self.field_type(owner, field, inner)?,
            ))),
            TypeRef::Named(name) => {
                if let Some(kind) = self.classes.family(name) {
                    Ok(FieldType::Family {
                        name: name.clone(),
                        kind,
                    })
                } else if self.api.is_schema_type(name) {
                    Ok(FieldType::Struct(name.clone()))
                } else {
                    Err(SchemaError::UnresolvableFieldType {
                        type_name: owner.name.clone(),
                        field: field.name.clone(),
                        alternatives: field.types.clone(),
                    })
                }
            }
        }
    }
}
