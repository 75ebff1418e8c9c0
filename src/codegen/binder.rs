//! Polymorphism Binding
//!
//! For every (concrete type, parent family) pair, decides the glue that makes
//! the type satisfy its family: nothing for markers, a discriminator-injecting
//! encode plus accessor for tagged families, or a plain accessor.
//! Pairs are independent; bindings come out in `subtype_of` order, followed
//! by the reply-markup accessor for allow-listed types.

use serde::{Deserialize, Serialize};

use super::names::title_to_snake;
use crate::error::{Result, SchemaError};
use crate::graph::catalog::{FamilyRole, CACHED_INFIX, REPLY_MARKUP};
use crate::graph::{Catalog, Classifications, EncodeContract, FamilyKind};
use crate::schema::TypeDescriptor;

/// Conformance glue for one parent family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binding {
    /// Marker family: conformance is implicit
    Marker { family: String },
    /// Encode injects `"type": tag`; the family method returns the encoded bytes
    Tagged {
        family: String,
        tag: String,
        contract: EncodeContract,
    },
    /// Family method returns the plain encoded bytes
    Accessor { family: String },
}

impl Binding {
    pub fn family(&self) -> &str {
        match self {
            Self::Marker { family } | Self::Tagged { family, .. } | Self::Accessor { family } => {
                family
            }
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tagged { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

/// Discriminator of a tagged family member: the type name without the family
/// prefix (and, for query results, without a leading `Cached`), snake-cased.
pub fn discriminator_tag(role: FamilyRole, type_name: &str) -> String {
    let mut short = type_name.strip_prefix(role.name()).unwrap_or(type_name);
    if role == FamilyRole::QueryResult {
        short = short.strip_prefix(CACHED_INFIX).unwrap_or(short);
    }
    title_to_snake(short)
}

/// Binds concrete types to their parent families
pub struct Binder<'a> {
    classes: &'a Classifications,
    catalog: &'a Catalog,
}

impl<'a> Binder<'a> {
    pub fn new(classes: &'a Classifications, catalog: &'a Catalog) -> Self {
        Self { classes, catalog }
    }

    /// All bindings of a concrete type
    pub fn bind(&self, ty: &TypeDescriptor) -> Result<Vec<Binding>> {
        let mut bindings = ty
            .subtype_of
            .iter()
            .map(|family| self.bind_family(ty, family))
            .collect::<Result<Vec<_>>>()?;

        // the encoded form has a single "type" slot
        let tagged: Vec<String> = bindings
            .iter()
            .filter(|b| b.tag().is_some())
            .map(|b| b.family().to_string())
            .collect();
        if tagged.len() > 1 {
            return Err(SchemaError::ConflictingDiscriminators {
                type_name: ty.name.clone(),
                families: tagged,
            });
        }

        if self.catalog.is_reply_markup_member(&ty.name) {
            bindings.push(Binding::Accessor {
                family: REPLY_MARKUP.to_string(),
            });
        }

        Ok(bindings)
    }

    /// Binding of a concrete type to one declared parent family
    pub fn bind_family(&self, ty: &TypeDescriptor, family: &str) -> Result<Binding> {
        let role = FamilyRole::of(family).filter(|role| *role != FamilyRole::ReplyMarkup);
        let kind = self.classes.family(family);

        let binding = match role {
            Some(role @ FamilyRole::AttachableMedia)
                if kind == Some(FamilyKind::Discriminated(EncodeContract::Attachable)) =>
            {
                Binding::Tagged {
                    family: family.to_string(),
                    tag: discriminator_tag(role, &ty.name),
                    contract: EncodeContract::Attachable,
                }
            }
            Some(role @ FamilyRole::QueryResult)
                if kind == Some(FamilyKind::Discriminated(EncodeContract::Plain)) =>
            {
                Binding::Tagged {
                    family: family.to_string(),
                    tag: discriminator_tag(role, &ty.name),
                    contract: EncodeContract::Plain,
                }
            }
            Some(FamilyRole::MessageContent | FamilyRole::ElementError)
                if kind == Some(FamilyKind::Discriminated(EncodeContract::Plain)) =>
            {
                Binding::Accessor {
                    family: family.to_string(),
                }
            }
            Some(FamilyRole::CallbackGame | FamilyRole::InputFile)
                if kind == Some(FamilyKind::Marker) =>
            {
                Binding::Marker {
                    family: family.to_string(),
                }
            }
            _ => {
                return Err(SchemaError::UnknownParentFamily {
                    family: family.to_string(),
                    type_name: ty.name.clone(),
                })
            }
        };

        Ok(binding)
    }
}
