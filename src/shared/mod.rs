//! Geteilte Typen für Loader und Render-Übergabe.

pub mod options;

pub use options::MapOptions;
