//! Document parsing — deserialize and validate one JSON input.

use crate::model::{ApiDocument, FunctionDef, Module, Peripheral, SchemaVersion, TypeDef};
use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Raw document shape. `modules` and `globals` are required; a document
/// missing either fails deserialization as malformed. The remaining
/// collections discriminate the schema version.
#[derive(Deserialize)]
struct RawDocument {
    modules: Vec<Module>,
    globals: Vec<FunctionDef>,
    peripherals: Option<Vec<Peripheral>>,
    types: Option<Vec<TypeDef>>,
    #[serde(rename = "globalModules")]
    global_modules: Option<Vec<Module>>,
}

/// Parse one document from raw file bytes (UTF-8 JSON).
pub fn parse_document(bytes: &[u8]) -> Result<ApiDocument> {
    let raw: RawDocument =
        serde_json::from_slice(bytes).context("not a valid API description document")?;

    let version = if raw.peripherals.is_some() || raw.types.is_some() || raw.global_modules.is_some()
    {
        SchemaVersion::Extended
    } else {
        SchemaVersion::Core
    };

    let doc = ApiDocument {
        version,
        modules: raw.modules,
        globals: raw.globals,
        peripherals: raw.peripherals.unwrap_or_default(),
        types: raw.types.unwrap_or_default(),
        global_modules: raw.global_modules.unwrap_or_default(),
    };

    validate(&doc)?;
    Ok(doc)
}

/// Every name that becomes a class declaration or binding must be a valid
/// Lua identifier, otherwise the emitted stub file would not parse.
fn validate(doc: &ApiDocument) -> Result<()> {
    for name in doc
        .modules
        .iter()
        .chain(&doc.global_modules)
        .map(|m| m.name.as_str())
        .chain(doc.peripherals.iter().map(|p| p.name.as_str()))
        .chain(doc.types.iter().map(|t| t.name.as_str()))
    {
        if !is_identifier(name) {
            bail!("invalid class name: {:?}", name);
        }
    }
    Ok(())
}

/// ASCII identifier check: leading alpha or underscore, then alphanumerics
/// and underscores.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scope;

    #[test]
    fn core_document() {
        let doc = parse_document(br#"{"modules": [], "globals": []}"#).unwrap();
        assert_eq!(doc.version, SchemaVersion::Core);
        assert!(doc.peripherals.is_empty());
        assert!(doc.types.is_empty());
        assert!(doc.global_modules.is_empty());
    }

    #[test]
    fn extended_document() {
        let doc =
            parse_document(br#"{"modules": [], "globals": [], "peripherals": []}"#).unwrap();
        assert_eq!(doc.version, SchemaVersion::Extended);
    }

    #[test]
    fn missing_modules_is_malformed() {
        assert!(parse_document(br#"{"globals": []}"#).is_err());
    }

    #[test]
    fn missing_globals_is_malformed() {
        assert!(parse_document(br#"{"modules": []}"#).is_err());
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(parse_document(b"term.clear()").is_err());
    }

    #[test]
    fn module_scope_defaults_to_local() {
        let doc = parse_document(
            br#"{"modules": [{"name": "term", "functions": []}], "globals": []}"#,
        )
        .unwrap();
        assert_eq!(doc.modules[0].scope, Scope::Local);
    }

    #[test]
    fn module_scope_from_input() {
        let doc = parse_document(
            br#"{"modules": [{"name": "term", "scope": "global", "functions": []}], "globals": []}"#,
        )
        .unwrap();
        assert_eq!(doc.modules[0].scope, Scope::Global);
    }

    #[test]
    fn invalid_class_name_rejected() {
        let err = parse_document(
            br#"{"modules": [{"name": "2term", "functions": []}], "globals": []}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid class name"));
    }

    #[test]
    fn identifier_check() {
        assert!(is_identifier("term"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("fs2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fs"));
        assert!(!is_identifier("my module"));
        assert!(!is_identifier("a.b"));
    }
}
