//! Data model for API-description documents — format-agnostic.
//!
//! Mirrors the JSON shape of the CC-Tweaked API dumps: a document holds
//! modules and top-level functions, and newer dumps add peripherals,
//! plain-record types, and globally reachable modules.

use serde::Deserialize;
use std::fmt;

/// Which document shape a file was parsed from.
///
/// `Core` documents carry only `modules` and `globals`. `Extended`
/// documents additionally carry any of `peripherals`, `types`, or
/// `globalModules`. The variant is fixed once at parse time so emission
/// never re-inspects option presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    Core,
    Extended,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::Core => f.write_str("core schema"),
            SchemaVersion::Extended => f.write_str("extended schema"),
        }
    }
}

/// Binding scope for a module's empty-table declaration.
///
/// Sourced from the document's explicit `scope` field — never inferred —
/// because the upstream dumps disagree on whether wrapper modules are
/// global or file-local.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    #[default]
    Local,
}

/// One fully parsed API-description document.
#[derive(Debug)]
pub struct ApiDocument {
    pub version: SchemaVersion,
    /// Table-like API groupings, bound per their `scope` field.
    pub modules: Vec<Module>,
    /// Top-level functions, emitted unqualified.
    pub globals: Vec<FunctionDef>,
    /// Return-type classes for objects produced by factory functions.
    pub peripherals: Vec<Peripheral>,
    /// Plain data records with fields and no functions.
    pub types: Vec<TypeDef>,
    /// Modules that are globally reachable; always bound global.
    pub global_modules: Vec<Module>,
}

/// A named table-like API grouping (e.g. `term`, `fs`).
#[derive(Debug, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}

/// A class describing what a factory function returns.
#[derive(Debug, Deserialize)]
pub struct Peripheral {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Supertype name, recorded in the class header when present.
    pub extends: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}

/// A plain data-record description: fields only, no binding, no functions.
#[derive(Debug, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One member of a [`TypeDef`].
#[derive(Debug, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub description: String,
}

/// One callable signature. Parameter and return order is significant and
/// preserved in the emitted output.
#[derive(Debug, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    /// Display string only — the emitted declaration is built from
    /// `parameters`, not from this.
    #[serde(default)]
    #[allow(dead_code)]
    pub signature: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub returns: Vec<Return>,
    #[serde(default)]
    #[allow(dead_code)]
    pub example: Option<String>,
}

/// One argument of a [`FunctionDef`].
#[derive(Debug, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub description: String,
}

/// One return value of a [`FunctionDef`]. The name may be empty.
#[derive(Debug, Deserialize)]
pub struct Return {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub description: String,
}
