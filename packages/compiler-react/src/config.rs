use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "framecraft.config.json";

/// Options for React compilation.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Spaces per indentation level
    pub indent_width: usize,

    /// Appended to the component name unless the name already ends with it
    pub component_suffix: String,

    /// `src` used for image nodes without content
    pub placeholder_src: String,

    /// Body used for text nodes without content
    pub default_text: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            component_suffix: "Page".to_string(),
            placeholder_src: "/placeholder.jpg".to_string(),
            default_text: "Text".to_string(),
        }
    }
}

impl CompileOptions {
    /// Load options from `framecraft.config.json` in `dir`, falling back to
    /// the defaults when the file does not exist
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let options: CompileOptions = serde_json::from_str(&content)?;
            Ok(options)
        } else {
            Ok(CompileOptions::default())
        }
    }
}
