//! Component model: immutable records supplied by the backend.
//!
//! - `component`: a single tool or toolchain piece and the matching rule
//! - `tool_installer`: package source descriptors for third-party tools
//! - `kit`: a named, versioned bundle of components

pub mod component;
pub mod kit;
pub mod tool_installer;

pub use component::{Component, OTHERS_CATEGORY, is_restricted};
pub use kit::Kit;
pub use tool_installer::{ToolInstaller, ToolSource};
