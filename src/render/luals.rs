//! lua-language-server renderer.
//!
//! Emits `---@meta` ambient-definition stubs in the EmmyLua annotation
//! syntax: class/field/param/return lines followed by empty-bodied forward
//! declarations. Pure fold over the document — a fresh buffer per call,
//! nothing shared between documents.

use crate::model::{ApiDocument, Field, FunctionDef, Module, Peripheral, Scope, TypeDef};
use crate::render::Renderer;

/// Marks the output as ambient definitions with no runtime semantics.
const META_MARKER: &str = "---@meta";

/// Factory functions whose return type callers narrow via a generic.
const CAPABILITY_FACTORIES: &[&str] = &["wrap", "find"];

/// The closed set of peripheral types such a factory may return.
const CAPABILITY_TYPES: &str = "monitor|printer|modem|drive|speaker|command";

pub struct LuaLsRenderer;

impl Renderer for LuaLsRenderer {
    fn render(&self, doc: &ApiDocument) -> String {
        let mut out = String::new();
        out.push_str(META_MARKER);
        out.push_str("\n\n");

        for func in &doc.globals {
            out.push_str(&render_function(func, None));
        }

        for module in &doc.modules {
            out.push_str(&render_module(module, module.scope));
        }

        // Globally reachable modules are always bound global, whatever
        // their own scope field says.
        for module in &doc.global_modules {
            out.push_str(&render_module(module, Scope::Global));
        }

        for peripheral in &doc.peripherals {
            out.push_str(&render_peripheral(peripheral));
        }

        for ty in &doc.types {
            out.push_str(&render_type(ty));
        }

        out
    }

    fn file_extension(&self) -> &str {
        "lua"
    }
}

fn render_module(module: &Module, scope: Scope) -> String {
    let mut out = String::new();
    out.push_str(&format!("---@class {}\n", module.name));
    out.push_str(&format!("---{}\n", flatten(&module.description)));
    out.push_str(&binding(&module.name, scope));

    for func in &module.functions {
        out.push_str(&render_function(func, Some(&module.name)));
    }
    out
}

fn render_peripheral(peripheral: &Peripheral) -> String {
    let mut out = String::new();
    match peripheral.extends {
        Some(ref parent) => {
            out.push_str(&format!("---@class {} : {}\n", peripheral.name, parent))
        }
        None => out.push_str(&format!("---@class {}\n", peripheral.name)),
    }
    out.push_str(&format!("---{}\n", flatten(&peripheral.description)));
    out.push_str(&binding(&peripheral.name, Scope::Local));

    for func in &peripheral.functions {
        out.push_str(&render_function(func, Some(&peripheral.name)));
    }
    out
}

fn render_type(ty: &TypeDef) -> String {
    let mut out = String::new();
    out.push_str(&format!("---@class {}\n", ty.name));
    out.push_str(&format!("---{}\n", flatten(&ty.description)));
    for Field {
        name,
        ty: field_ty,
        description,
    } in &ty.fields
    {
        out.push_str(&format!(
            "---@field {} {} {}\n",
            name,
            field_ty,
            flatten(description)
        ));
    }
    out.push('\n');
    out
}

/// The empty-table declaration that gives the class a name to attach to.
fn binding(name: &str, scope: Scope) -> String {
    match scope {
        Scope::Global => format!("{} = {{}}\n\n", name),
        Scope::Local => format!("local {} = {{}}\n\n", name),
    }
}

/// One function block: comment, annotations, forward declaration.
fn render_function(func: &FunctionDef, owner: Option<&str>) -> String {
    let mut out = String::new();

    if !func.description.is_empty() {
        out.push_str(&format!("--{}\n", flatten(&func.description)));
    }

    if CAPABILITY_FACTORIES.contains(&func.name.as_str()) {
        out.push_str(&format!("---@generic T: {}\n", CAPABILITY_TYPES));
    }

    for param in &func.parameters {
        out.push_str(&format!(
            "---@param {} {} {}\n",
            param.name,
            param.ty,
            flatten(&param.description)
        ));
    }

    for ret in &func.returns {
        out.push_str(&format!(
            "---@return {} {} {}\n",
            ret.ty,
            ret.name,
            flatten(&ret.description)
        ));
    }

    let qualified = match owner {
        Some(owner) => format!("{}.{}", owner, func.name),
        None => func.name.clone(),
    };
    let params: Vec<&str> = func.parameters.iter().map(|p| p.name.as_str()).collect();
    out.push_str(&format!("function {}({}) end\n\n", qualified, params.join(", ")));

    out
}

/// Collapse embedded newlines so every annotation stays on one line.
fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
