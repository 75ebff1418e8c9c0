//! Family Graph
//!
//! Subtype edges between concrete types and the families they belong to.
//! Shared by the classifier, the field projector (preferred-type resolution)
//! and the binder.

pub mod catalog;
pub mod classify;

pub use catalog::{Catalog, FamilyRole, CACHED_INFIX, REPLY_MARKUP, REPLY_MARKUP_TYPES};
pub use classify::{
    Classifications, Classifier, EncodeContract, FamilyKind, TypeKind,
};

use std::collections::HashMap;

use crate::schema::ApiDescription;

/// Member → families index, built from `subtype_of` plus the reply-markup allow-list
#[derive(Debug, Clone, Default)]
pub struct Membership {
    families_of: HashMap<String, Vec<String>>,
}

impl Membership {
    pub fn build(api: &ApiDescription) -> Self {
        let mut families_of: HashMap<String, Vec<String>> = HashMap::new();

        for ty in api.iter() {
            for parent in &ty.subtype_of {
                families_of
                    .entry(ty.name.clone())
                    .or_default()
                    .push(parent.clone());
            }
        }

        for member in REPLY_MARKUP_TYPES {
            families_of
                .entry(member.to_string())
                .or_default()
                .push(REPLY_MARKUP.to_string());
        }

        Self { families_of }
    }

    /// Families `member` belongs to, in declaration order
    pub fn families_of(&self, member: &str) -> &[String] {
        self.families_of
            .get(member)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The single family every one of `members` belongs to, if any
    pub fn common_family<'m>(&self, members: impl IntoIterator<Item = &'m str>) -> Option<&str> {
        let mut members = members.into_iter();
        let first = members.next()?;
        let mut candidates: Vec<&str> = self.families_of(first).iter().map(String::as_str).collect();

        for member in members {
            let families = self.families_of(member);
            candidates.retain(|c| families.iter().any(|f| f == c));
        }

        match candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
