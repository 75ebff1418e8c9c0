//! Naming Utilities
//!
//! Casing transforms between schema names (TitleCase types, snake_case wire
//! fields) and the generated identifiers.

/// Convert a TitleCase name to lowercase-with-underscores.
///
/// A separator goes before every uppercase letter that follows a lowercase
/// letter or a digit, so `Mpeg4Gif` becomes `mpeg4_gif`.
pub fn title_to_snake(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            result.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    result
}

/// Rust identifier for a wire field name, and whether it needs a serde rename.
///
/// `r#` produces raw identifiers; any other escape is appended as a suffix.
pub fn field_ident(wire_name: &str, keyword_escape: &str) -> (String, bool) {
    if !is_rust_keyword(wire_name) {
        return (wire_name.to_string(), false);
    }
    // these cannot be raw identifiers
    let raw_allowed = !matches!(wire_name, "self" | "Self" | "super" | "crate");
    if keyword_escape == "r#" && raw_allowed {
        (format!("r#{}", wire_name), false)
    } else {
        let suffix = if keyword_escape == "r#" { "_" } else { keyword_escape };
        (format!("{}{}", wire_name, suffix), true)
    }
}

/// Name of the accessor method a family member implements
pub fn family_method(family: &str) -> String {
    title_to_snake(family)
}

/// Name of the attachment-aware encode method of an attachable family
pub fn family_params_method(family: &str) -> String {
    format!("{}_params", title_to_snake(family))
}

/// Check if a string is a Rust keyword
fn is_rust_keyword(s: &str) -> bool {
    matches!(
        s,
        "as" | "async" | "await" | "break" | "const" | "continue" | "crate" | "dyn" |
        "else" | "enum" | "extern" | "false" | "fn" | "for" | "if" | "impl" |
        "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" |
        "ref" | "return" | "self" | "Self" | "static" | "struct" | "super" |
        "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while" |
        // Reserved for future use
        "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" |
        "priv" | "try" | "typeof" | "unsized" | "virtual" | "yield"
    )
}
