//! Writers for descriptor output formats.
pub mod yaml;
pub use yaml::write_yaml_sidecar;
