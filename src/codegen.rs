//! Record module generator.
//!
//! Registering a new table means writing the same boilerplate every time:
//! the struct, its derives, and the `grid_record!` field list. The generator
//! renders that module from a `field:kind` description so the file can be
//! dropped straight into `src/`.

use crate::error::{RowmapError, RowmapResult};

/// Kinds the generator accepts on the command line.
///
/// `DateTime` produces a chrono member registered as `Unsupported`: blank on
/// export, ignored on import, exactly like [`crate::user::User::update_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Text,
    Integer,
    Real,
    Boolean,
    DateTime,
}

impl MemberKind {
    /// Parse a kind spec. Accepts a few aliases (`int`, `float`, `bool`).
    fn parse(spec: &str) -> Option<Self> {
        match spec {
            "text" | "string" => Some(MemberKind::Text),
            "integer" | "int" => Some(MemberKind::Integer),
            "real" | "float" => Some(MemberKind::Real),
            "boolean" | "bool" => Some(MemberKind::Boolean),
            "datetime" => Some(MemberKind::DateTime),
            _ => None,
        }
    }

    /// The member type in the generated struct
    fn rust_type(&self) -> &'static str {
        match self {
            MemberKind::Text => "String",
            MemberKind::Integer => "i64",
            MemberKind::Real => "f64",
            MemberKind::Boolean => "bool",
            MemberKind::DateTime => "Option<DateTime<Utc>>",
        }
    }

    /// The kind token in the generated `grid_record!` registration
    fn registration(&self) -> &'static str {
        match self {
            MemberKind::Text => "Text",
            MemberKind::Integer => "Integer",
            MemberKind::Real => "Real",
            MemberKind::Boolean => "Boolean",
            MemberKind::DateTime => "Unsupported",
        }
    }
}

/// Parsed description of a record module to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSpec {
    /// snake_case record name, as given on the command line
    pub name: String,
    pub fields: Vec<(String, MemberKind)>,
}

impl RecordSpec {
    /// Parse a record name plus `field:kind` specs (e.g. `user_name:text`).
    pub fn parse(name: &str, field_specs: &[String]) -> RowmapResult<Self> {
        if !is_ident(name) {
            return Err(RowmapError::Codegen(format!(
                "'{}' is not a valid record name",
                name
            )));
        }
        if field_specs.is_empty() {
            return Err(RowmapError::Codegen(
                "a record needs at least one field spec".to_string(),
            ));
        }

        let mut fields = Vec::with_capacity(field_specs.len());
        for spec in field_specs {
            let Some((field_name, kind_spec)) = spec.split_once(':') else {
                return Err(RowmapError::Codegen(format!(
                    "invalid field spec '{}', expected name:kind",
                    spec
                )));
            };
            if !is_ident(field_name) {
                return Err(RowmapError::Codegen(format!(
                    "'{}' is not a valid field name",
                    field_name
                )));
            }
            let Some(kind) = MemberKind::parse(kind_spec) else {
                return Err(RowmapError::Codegen(format!(
                    "unknown kind '{}' in '{}' (expected text, integer, real, boolean or datetime)",
                    kind_spec, spec
                )));
            };
            fields.push((field_name.to_string(), kind));
        }

        Ok(Self {
            name: name.to_string(),
            fields,
        })
    }

    /// PascalCase struct name derived from the record name
    pub fn struct_name(&self) -> String {
        to_pascal_case(&self.name)
    }
}

/// Render the complete module source for a record spec.
pub fn render_module(spec: &RecordSpec) -> String {
    let struct_name = spec.struct_name();
    let has_datetime = spec
        .fields
        .iter()
        .any(|(_, kind)| *kind == MemberKind::DateTime);

    let mut out = String::new();
    out.push_str(&format!("//! `{}` record.\n\n", struct_name));
    if has_datetime {
        out.push_str("use chrono::{DateTime, Utc};\n");
    }
    out.push_str("use serde::{Deserialize, Serialize};\n\n");

    out.push_str("#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]\n");
    out.push_str(&format!("pub struct {} {{\n", struct_name));
    for (name, kind) in &spec.fields {
        if *kind == MemberKind::DateTime {
            out.push_str("    #[serde(default, skip_serializing_if = \"Option::is_none\")]\n");
        }
        out.push_str(&format!("    pub {}: {},\n", name, kind.rust_type()));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("crate::grid_record!({} {{\n", struct_name));
    for (name, kind) in &spec.fields {
        out.push_str(&format!("    {}: {},\n", name, kind.registration()));
    }
    out.push_str("});\n");

    out
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
