//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registrar: RegistrarConfig,
}

/// Registrar configuration.
///
/// `base_package` is a delimited list of search locations; recognized
/// delimiters are `;`, `,`, space, tab and newline. `entities` lists
/// fully-qualified type names registered ahead of discovery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub base_package: String,

    #[serde(default)]
    pub entities: Vec<String>,
}
