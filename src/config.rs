//! Configuration management for the type generator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (typegen.toml)
//! - Environment variables (TYPEGEN__*)
//!
//! ## Example config file (typegen.toml):
//! ```toml
//! [schema]
//! path = "api.json"
//!
//! [output]
//! path = "src/gen_types.rs"
//!
//! [render]
//! runtime_crate = "botapi_runtime"
//!
//! [types]
//! preferred = ["InputFile", "Integer", "String"]
//! empty_structs = ["VoiceChatStarted", "ForumTopicReopened"]
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::checksum::Checksum;
use crate::codegen::{default_preferred, GenerateOptions, RenderProfile};
use crate::error::Result;
use crate::graph::catalog::VOICE_CHAT_STARTED;
use crate::graph::Catalog;

/// Main configuration for the type generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Schema input
    #[serde(default)]
    pub schema: SchemaSource,

    /// Generated file
    #[serde(default)]
    pub output: OutputConfig,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Type resolution and classification settings
    #[serde(default)]
    pub types: TypesConfig,
}

/// Where the API description is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSource {
    #[serde(default = "default_schema_path")]
    pub path: PathBuf,
}

/// Where generated code is written. Stdout when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Path of the runtime crate generated code links against
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesConfig {
    /// Priority list for fields declaring several alternative types
    #[serde(default = "default_preferred")]
    pub preferred: Vec<String>,

    /// Zero-field types generated as empty structs
    #[serde(default = "default_empty_structs")]
    pub empty_structs: Vec<String>,
}

// Default value functions
fn default_schema_path() -> PathBuf {
    PathBuf::from("api.json")
}

fn default_runtime_crate() -> String {
    "botapi_runtime".to_string()
}

fn default_empty_structs() -> Vec<String> {
    vec![VOICE_CHAT_STARTED.to_string()]
}

impl Default for SchemaSource {
    fn default() -> Self {
        Self {
            path: default_schema_path(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            runtime_crate: default_runtime_crate(),
        }
    }
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            preferred: default_preferred(),
            empty_structs: default_empty_structs(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the defaults
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["typegen.toml", ".typegen.toml", "config/typegen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("org", "botapi", "typegen") {
            let xdg_config = config_dir.config_dir().join("typegen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // Load from environment variables (TYPEGEN__SECTION__KEY)
        builder = builder.add_source(
            Environment::with_prefix("TYPEGEN")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("types.preferred")
                .with_list_parse_key("types.empty_structs")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(schema = %loaded.schema.path.display(), "loaded configuration");
        Ok(loaded)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Classification catalog with the configured empty-struct whitelist
    pub fn catalog(&self) -> Catalog {
        Catalog::with_empty_structs(&self.types.empty_structs)
    }

    /// Rendering profile with the configured runtime crate
    pub fn render_profile(&self) -> RenderProfile {
        RenderProfile::default().with_runtime_crate(&self.render.runtime_crate)
    }

    /// Generation options for a schema source with the given digest
    pub fn generate_options(&self, source_checksum: Option<Checksum>) -> GenerateOptions {
        GenerateOptions {
            catalog: self.catalog(),
            preferred: self.types.preferred.clone(),
            profile: self.render_profile(),
            source_checksum,
        }
    }
}
