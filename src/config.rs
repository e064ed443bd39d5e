use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::html::PageIndex;
use crate::model::PageRef;

/// Rendering options shared by every table in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Inline style applied to each table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Pages combined into the output document, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageRef>,
}

impl RenderConfig {
    pub fn load(path: &Path) -> RenderResult<Self> {
        debug!("loading render config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> RenderResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RenderResult<()> {
        if let Some(style) = &self.style {
            if style.trim().is_empty() {
                return Err(RenderError::Config {
                    field: "style".into(),
                    reason: "cannot be blank".into(),
                });
            }
        }
        Ok(())
    }

    /// The page index for multi-page output, or `None` when no pages are
    /// configured and ids can be used as-is.
    pub fn page_index(&self) -> Option<PageIndex> {
        if self.pages.is_empty() {
            None
        } else {
            Some(self.pages.iter().cloned().collect())
        }
    }
}
