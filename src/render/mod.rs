//! Renderer module — trait-based format dispatch.
//!
//! The annotation tokens a consumer expects (`---@meta`, `---@class`, …)
//! are that consumer's contract, so they live behind a renderer rather
//! than as crate-wide constants.

pub mod luals;

use crate::model::ApiDocument;
use anyhow::{anyhow, Result};

/// Trait for rendering an ApiDocument into one definition-file format.
pub trait Renderer {
    fn render(&self, doc: &ApiDocument) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "luals" | "emmylua" => Ok(Box::new(luals::LuaLsRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use luals", format)),
    }
}
