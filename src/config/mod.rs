//! Config module.
//! Provides configuration types, default paths and XML loading.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};
