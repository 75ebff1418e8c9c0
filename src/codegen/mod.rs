//! Code Generation
//!
//! Turns an API description into declarations and renders them.
//!
//! Architecture:
//! - CodegenContext: immutable after build() - holds the classification and
//!   membership index shared by the projector and the binder
//! - Declaration: pure projection of one type (or family) for the emitter
//! - Emitters: render Declarations; they never read the raw description

pub mod binder;
pub mod config;
pub mod fields;
pub mod names;
pub mod rust;

pub use binder::{discriminator_tag, Binder, Binding};
pub use config::RenderProfile;
pub use fields::{FieldProjector, FieldType, PriorityResolver, ProjectedField, TypeResolver};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::checksum::Checksum;
use crate::error::Result;
use crate::graph::{
    Catalog, Classifications, Classifier, EncodeContract, FamilyKind, FamilyRole, Membership,
    TypeKind, REPLY_MARKUP,
};
use crate::schema::ApiDescription;

// =============================================================================
// Declarations
// =============================================================================

/// A family interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyDecl {
    pub name: String,
    pub description: Vec<String>,
    pub href: String,
    pub role: FamilyRole,
    pub kind: FamilyKind,
}

/// A concrete struct with its family bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    pub description: Vec<String>,
    pub href: String,
    pub fields: Vec<ProjectedField>,
    pub bindings: Vec<Binding>,
    /// Holds family trait objects, directly or through other structs
    pub holds_family_objects: bool,
}

impl StructDecl {
    /// Discriminator injected on encode, if the struct is a tagged member
    pub fn tag(&self) -> Option<&str> {
        self.bindings.iter().find_map(Binding::tag)
    }

    pub fn field(&self, wire_name: &str) -> Option<&ProjectedField> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// One generated declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum Declaration {
    Family(FamilyDecl),
    Struct(StructDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Family(f) => &f.name,
            Self::Struct(s) => &s.name,
        }
    }

    pub fn as_struct(&self) -> Option<&StructDecl> {
        match self {
            Self::Struct(s) => Some(s),
            Self::Family(_) => None,
        }
    }

    pub fn as_family(&self) -> Option<&FamilyDecl> {
        match self {
            Self::Family(f) => Some(f),
            Self::Struct(_) => None,
        }
    }
}

// =============================================================================
// Options
// =============================================================================

/// Inputs to generation beyond the description itself
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub catalog: Catalog,
    /// Priority order for fields with several alternative types
    pub preferred: Vec<String>,
    pub profile: RenderProfile,
    /// Digest of the description source, recorded in the header
    pub source_checksum: Option<Checksum>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            preferred: default_preferred(),
            profile: RenderProfile::default(),
            source_checksum: None,
        }
    }
}

/// Default priority list for multi-type fields
pub fn default_preferred() -> Vec<String> {
    ["InputFile", "Integer", "String"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// =============================================================================
// CodegenContext
// =============================================================================

/// Immutable codegen context - frozen after build().
pub struct CodegenContext<'a> {
    api: &'a ApiDescription,
    catalog: Catalog,
    classes: Classifications,
    membership: Membership,
    preferred: Vec<String>,
}

impl<'a> CodegenContext<'a> {
    /// Classify the description. Fails on the first unclassifiable type.
    pub fn build(api: &'a ApiDescription, options: &GenerateOptions) -> Result<Self> {
        let classes = Classifier::new(api, &options.catalog).classify_all()?;
        let membership = Membership::build(api);

        Ok(Self {
            api,
            catalog: options.catalog.clone(),
            classes,
            membership,
            preferred: options.preferred.clone(),
        })
    }

    pub fn classes(&self) -> &Classifications {
        &self.classes
    }

    /// Declarations in emission order: the synthetic reply-markup family,
    /// then every type in declaration order.
    pub fn declarations(&self) -> Result<Vec<Declaration>> {
        let resolver = PriorityResolver::new(&self.membership, &self.preferred);
        let projector = FieldProjector::new(self.api, &self.classes, &resolver);
        let binder = Binder::new(&self.classes, &self.catalog);

        let mut declarations = Vec::with_capacity(self.api.types.len() + 1);
        declarations.push(Declaration::Family(reply_markup_decl()));

        for ty in self.api.iter() {
            let kind = self
                .classes
                .kind(&ty.name)
                .unwrap_or(TypeKind::Struct);

            let declaration = match kind {
                TypeKind::Family { role, kind } => Declaration::Family(FamilyDecl {
                    name: ty.name.clone(),
                    description: ty.description.clone(),
                    href: ty.href.clone(),
                    role,
                    kind,
                }),
                TypeKind::Struct | TypeKind::EmptyStruct => Declaration::Struct(StructDecl {
                    name: ty.name.clone(),
                    description: ty.description.clone(),
                    href: ty.href.clone(),
                    fields: projector.project(ty)?,
                    bindings: binder.bind(ty)?,
                    holds_family_objects: false,
                }),
            };
            declarations.push(declaration);
        }

        mark_family_holders(&mut declarations);
        Ok(declarations)
    }
}

fn reply_markup_decl() -> FamilyDecl {
    FamilyDecl {
        name: REPLY_MARKUP.to_string(),
        description: vec![
            "Any of the keyboard markups accepted by the reply_markup field.".to_string(),
        ],
        href: String::new(),
        role: FamilyRole::ReplyMarkup,
        kind: FamilyKind::Discriminated(EncodeContract::Plain),
    }
}

/// Propagate "holds family objects" through struct references until stable
fn mark_family_holders(declarations: &mut [Declaration]) {
    let mut holders: HashSet<String> = declarations
        .iter()
        .filter_map(Declaration::as_struct)
        .filter(|s| s.fields.iter().any(|f| f.ty.holds_family_object()))
        .map(|s| s.name.clone())
        .collect();

    loop {
        let before = holders.len();
        for s in declarations.iter().filter_map(Declaration::as_struct) {
            if !holders.contains(&s.name)
                && s.fields.iter().any(|f| references_holder(&f.ty, &holders))
            {
                holders.insert(s.name.clone());
            }
        }
        if holders.len() == before {
            break;
        }
    }

    for declaration in declarations.iter_mut() {
        if let Declaration::Struct(s) = declaration {
            s.holds_family_objects = holders.contains(&s.name);
        }
    }
}

fn references_holder(ty: &FieldType, holders: &HashSet<String>) -> bool {
    match ty {
        FieldType::Struct(name) => holders.contains(name),
        FieldType::Array(inner) => references_holder(inner, holders),
        FieldType::Primitive(_) | FieldType::Family { .. } => false,
    }
}

// =============================================================================
// Generated Output
// =============================================================================

/// Output from code generation
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Generated code as a string
    pub code: String,
    /// Number of structs generated
    pub struct_count: usize,
    /// Number of families generated (including reply markup)
    pub family_count: usize,
}

// =============================================================================
// Public API
// =============================================================================

/// Classify, project, bind and render a description as Rust source.
///
/// Any schema error aborts the whole run; no partial output is returned.
pub fn generate_rust(api: &ApiDescription, options: &GenerateOptions) -> Result<GeneratedOutput> {
    let ctx = CodegenContext::build(api, options)?;
    let declarations = ctx.declarations()?;

    let mut code = rust::emit_header(api, options);
    let mut struct_count = 0;
    let mut family_count = 0;

    for declaration in &declarations {
        match declaration {
            Declaration::Family(_) => family_count += 1,
            Declaration::Struct(_) => struct_count += 1,
        }
        code.push_str(&rust::emit_declaration(declaration, &options.profile));
    }

    tracing::info!(structs = struct_count, families = family_count, "generated types");

    Ok(GeneratedOutput {
        code,
        struct_count,
        family_count,
    })
}
