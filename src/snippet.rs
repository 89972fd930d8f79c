//! Editor completion snippets derived from function definitions.
//!
//! Pure derivation, kept out of the generation pipeline: snippets are only
//! written when the `--snippets` flag names an output file.

use crate::model::{ApiDocument, FunctionDef};
use serde::Serialize;
use std::collections::BTreeMap;

/// One completion template in the editor snippet-file shape.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Snippet {
    /// Trigger text: the fully qualified function name.
    pub prefix: String,
    /// Templated call with `${N:param}` placeholders and a `$0` cursor.
    pub body: String,
    pub description: String,
}

/// Derive the snippet for one function, qualified by its owning module
/// name when there is one.
pub fn derive(func: &FunctionDef, owner: Option<&str>) -> Snippet {
    let name = match owner {
        Some(owner) => format!("{}.{}", owner, func.name),
        None => func.name.clone(),
    };

    let placeholders: Vec<String> = func
        .parameters
        .iter()
        .enumerate()
        .map(|(i, param)| format!("${{{}:{}}}", i + 1, param.name))
        .collect();
    let body = format!("{}({})$0", name, placeholders.join(", "));

    Snippet {
        prefix: name,
        body,
        description: func.description.clone(),
    }
}

/// Collect snippets for a document's completable surface: top-level
/// functions plus module and global-module members. Peripherals describe
/// factory return types, not directly completable names.
pub fn collect(doc: &ApiDocument, into: &mut BTreeMap<String, Snippet>) {
    for func in &doc.globals {
        into.insert(func.name.clone(), derive(func, None));
    }
    for module in doc.modules.iter().chain(&doc.global_modules) {
        for func in &module.functions {
            let key = format!("{}.{}", module.name, func.name);
            into.insert(key, derive(func, Some(&module.name)));
        }
    }
}
