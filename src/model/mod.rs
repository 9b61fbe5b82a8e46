//! Core data model: documents, tabs, and disk access

pub mod document;
pub mod filesystem;
pub mod tabs;
