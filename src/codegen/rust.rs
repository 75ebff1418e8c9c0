//! Rust Code Emitter
//!
//! Generates Rust code from Declarations using RenderProfile for configuration.
//!
//! Key constraints:
//! - This module ONLY receives Declarations + RenderProfile - no raw JSON
//! - Families become object-safe traits whose method returns the member's
//!   encoded bytes; marker families become aliases or runtime re-exports
//! - Tagged members carry the discriminator through serde's internal tagging

use crate::checksum::HEADER_PREFIX;
use crate::graph::{EncodeContract, FamilyKind};
use crate::schema::{ApiDescription, Primitive};

use super::fields::{FieldType, ProjectedField, MEDIA_FIELD, TYPE_FIELD};
use super::names::{family_method, family_params_method, field_ident};
use super::{Binding, Declaration, FamilyDecl, GenerateOptions, RenderProfile, StructDecl};

// =============================================================================
// Public API
// =============================================================================

/// File header: provenance comment and imports
pub fn emit_header(api: &ApiDescription, options: &GenerateOptions) -> String {
    let profile = &options.profile;
    let mut output = String::new();

    output.push_str("// Code generated by botapi-typegen. DO NOT EDIT.\n");
    output.push_str("//\n");
    if let Some(version) = &api.version {
        match api.release_date() {
            Some(date) => output.push_str(&format!(
                "// {}, released {}\n",
                version,
                date.format("%Y-%m-%d")
            )),
            None => output.push_str(&format!("// {}\n", version)),
        }
    }
    if let Some(changelog) = &api.changelog {
        output.push_str(&format!("// Changelog: {}\n", changelog));
    }
    if let Some(checksum) = &options.source_checksum {
        output.push_str(&format!("{}{}\n", HEADER_PREFIX, checksum));
    }

    output.push('\n');
    output.push_str("use serde::{Deserialize, Serialize};\n\n");
    output.push_str("#[allow(unused_imports)]\n");
    output.push_str(&format!(
        "use {}::{{Attachments, EncodingError}};\n",
        profile.runtime_crate
    ));

    output
}

/// Emit Rust code for one declaration, preceded by a blank line
pub fn emit_declaration(declaration: &Declaration, profile: &RenderProfile) -> String {
    let mut output = String::from("\n");
    match declaration {
        Declaration::Family(family) => emit_family(&mut output, family, profile),
        Declaration::Struct(decl) => emit_struct(&mut output, decl, profile),
    }
    output
}

// =============================================================================
// Family Emission
// =============================================================================

fn emit_family(output: &mut String, family: &FamilyDecl, profile: &RenderProfile) {
    emit_docs(output, &family.description, &family.href);

    if let Some(runtime) = profile.runtime_type(&family.name) {
        let path = profile.runtime_path(runtime);
        if runtime == family.name {
            output.push_str(&format!("pub use {};\n", path));
        } else {
            output.push_str(&format!("pub type {} = {};\n", family.name, path));
        }
        return;
    }

    match family.kind {
        FamilyKind::Marker => {
            output.push_str(&format!("pub type {} = {};\n", family.name, profile.types.any));
        }
        FamilyKind::Discriminated(contract) => {
            emit_family_trait(output, family, contract, profile);
        }
    }
}

fn emit_family_trait(
    output: &mut String,
    family: &FamilyDecl,
    contract: EncodeContract,
    profile: &RenderProfile,
) {
    let serialize_call = match contract {
        EncodeContract::Plain => {
            let method = family_method(&family.name);
            output.push_str(&format!("pub trait {}: std::fmt::Debug {{\n", family.name));
            output.push_str(&format!(
                "    fn {}(&self) -> Result<Vec<u8>, EncodingError>;\n",
                method
            ));
            output.push_str("}\n");
            format!(
                "{}(self.{}(), serializer)",
                profile.runtime_path("serialize_encoded"),
                method
            )
        }
        EncodeContract::Attachable => {
            let method = family_params_method(&family.name);
            output.push_str(&format!("pub trait {}: std::fmt::Debug {{\n", family.name));
            output.push_str(&format!(
                "    fn {}(&self, media_name: &str, attachments: &mut Attachments) -> Result<Vec<u8>, EncodingError>;\n",
                method
            ));
            output.push_str("}\n");
            format!(
                "{}(|attachments| self.{}(\"\", attachments), serializer)",
                profile.runtime_path("serialize_detached"),
                method
            )
        }
    };

    output.push('\n');
    output.push_str(&format!("impl Serialize for dyn {} {{\n", family.name));
    output.push_str(
        "    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {\n",
    );
    output.push_str(&format!("        {}\n", serialize_call));
    output.push_str("    }\n");
    output.push_str("}\n");
}

// =============================================================================
// Struct Emission
// =============================================================================

fn emit_struct(output: &mut String, decl: &StructDecl, profile: &RenderProfile) {
    emit_docs(output, &decl.description, &decl.href);

    let derives = if decl.holds_family_objects {
        &profile.family_holder_derives
    } else {
        &profile.derives
    };
    output.push_str(&format!("#[derive({})]\n", derives.join(", ")));

    if let Some(tag) = decl.tag() {
        output.push_str(&format!(
            "#[serde(tag = \"{}\", rename = \"{}\")]\n",
            TYPE_FIELD, tag
        ));
    }

    let deserializes = derives.iter().any(|d| d == "Deserialize");
    output.push_str(&format!("pub struct {} {{\n", decl.name));
    for field in &decl.fields {
        emit_field(output, field, deserializes, profile);
    }
    output.push_str("}\n");

    for binding in &decl.bindings {
        emit_binding(output, decl, binding, profile);
    }
}

fn emit_field(output: &mut String, field: &ProjectedField, deserializes: bool, profile: &RenderProfile) {
    for line in field.description.lines() {
        output.push_str(&format!("    /// {}\n", line));
    }

    let (ident, needs_rename) = field_ident(&field.wire_name, &profile.keyword_escape);

    let mut attrs = Vec::new();
    if needs_rename {
        attrs.push(format!("rename = \"{}\"", field.wire_name));
    }
    if let Some(skip) = skip_predicate(field, profile) {
        if deserializes {
            attrs.push("default".to_string());
        }
        attrs.push(format!("skip_serializing_if = \"{}\"", skip));
    }
    if !attrs.is_empty() {
        output.push_str(&format!("    #[serde({})]\n", attrs.join(", ")));
    }

    output.push_str(&format!("    pub {}: {},\n", ident, field_type(field, profile)));
}

/// Full Rust type of a field, including optionality
fn field_type(field: &ProjectedField, profile: &RenderProfile) -> String {
    let rendered = render_type(&field.ty, profile);
    if !field.nullable {
        return rendered;
    }
    match field.ty {
        FieldType::Struct(_) => profile.wrap_optional(&profile.wrap_box(&rendered)),
        _ => profile.wrap_optional(&rendered),
    }
}

fn render_type(ty: &FieldType, profile: &RenderProfile) -> String {
    match ty {
        FieldType::Primitive(p) => profile.primitive_type(*p).to_string(),
        FieldType::Struct(name) => name.clone(),
        FieldType::Family { name, kind } => {
            if profile.runtime_type(name).is_some() || !kind.is_discriminated() {
                name.clone()
            } else {
                profile.wrap_dyn(name)
            }
        }
        FieldType::Array(inner) => profile.wrap_array(&render_type(inner, profile)),
    }
}

/// Predicate that omits an absent or empty field on encode.
/// Required struct values and required trait objects are always written.
fn skip_predicate(field: &ProjectedField, profile: &RenderProfile) -> Option<String> {
    if field.nullable {
        return Some("Option::is_none".to_string());
    }
    match &field.ty {
        FieldType::Primitive(Primitive::String) => Some("String::is_empty".to_string()),
        FieldType::Primitive(_) => Some(profile.runtime_path("is_default")),
        FieldType::Array(_) => Some("Vec::is_empty".to_string()),
        FieldType::Family { name, kind } => match profile.runtime_type(name) {
            Some(runtime) => Some(format!("{}::is_empty", profile.runtime_path(runtime))),
            None if !kind.is_discriminated() => Some(format!("{}::is_null", profile.types.any)),
            None => None,
        },
        FieldType::Struct(_) => None,
    }
}

// =============================================================================
// Binding Emission
// =============================================================================

fn emit_binding(output: &mut String, decl: &StructDecl, binding: &Binding, profile: &RenderProfile) {
    let family = binding.family();
    let encode = profile.runtime_path("encode");

    let body = match binding {
        Binding::Marker { .. } => return,
        Binding::Tagged {
            contract: EncodeContract::Attachable,
            ..
        } => {
            let method = family_params_method(family);
            let encode_body = if decl.field(MEDIA_FIELD).is_some() {
                format!(
                    "        let {media} = self.{media}.attach(media_name, attachments)?;\n        {}(&{} {{ {media}, ..self.clone() }})\n",
                    encode,
                    decl.name,
                    media = MEDIA_FIELD
                )
            } else {
                format!("        let _ = (media_name, attachments);\n        {}(self)\n", encode)
            };
            format!(
                "    fn {}(&self, media_name: &str, attachments: &mut Attachments) -> Result<Vec<u8>, EncodingError> {{\n{}    }}\n",
                method, encode_body
            )
        }
        Binding::Tagged { .. } | Binding::Accessor { .. } => format!(
            "    fn {}(&self) -> Result<Vec<u8>, EncodingError> {{\n        {}(self)\n    }}\n",
            family_method(family),
            encode
        ),
    };

    output.push('\n');
    output.push_str(&format!("impl {} for {} {{\n", family, decl.name));
    output.push_str(&body);
    output.push_str("}\n");
}

// =============================================================================
// Helper Utilities
// =============================================================================

fn emit_docs(output: &mut String, description: &[String], href: &str) {
    for line in description {
        output.push_str(&format!("/// {}\n", line));
    }
    if !href.is_empty() {
        if !description.is_empty() {
            output.push_str("///\n");
        }
        output.push_str(&format!("/// <{}>\n", href));
    }
}
