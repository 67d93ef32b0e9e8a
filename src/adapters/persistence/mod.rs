//! Filesystem adapters.

pub mod fs_export;

pub use fs_export::FsCodeExporter;
