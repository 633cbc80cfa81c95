use super::ParamLoadError;
use crate::core::obc::model::ObcType;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// `[model]` table of a settings file. Absent keys fall back to the model defaults.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ModelSection {
    pub obc_type: Option<ObcType>,
    pub solvent_dielectric: Option<f64>,
    pub solute_dielectric: Option<f64>,
    pub probe_radius: Option<f64>,
}

/// `[boundary]` table of a settings file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BoundarySection {
    pub cutoff: Option<f64>,
    pub periodic_box: Option<[f64; 3]>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub model: ModelSection,
    #[serde(default)]
    pub boundary: BoundarySection,
}

impl SettingsFile {
    pub fn read_from_path(path: &Path) -> Result<Self, ParamLoadError> {
        debug!("Loading OBC settings from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
