//! Extension traits to provide helper utilities.

mod toml_table;

pub use toml_table::TomlTableExt;
