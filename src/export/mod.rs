// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
pub mod model;

pub use logic::ExportLogic;
pub use model::ExportTable;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Worksheets that can be exported.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SheetKind {
    Todos,
    Errors,
    Products,
}

impl SheetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Todos => "todos",
            SheetKind::Errors => "errors",
            SheetKind::Products => "products",
        }
    }
}
