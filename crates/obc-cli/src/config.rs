use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use obcpp::core::io::settings::SettingsFile;
use obcpp::engine::config::{ObcSettings, ObcSettingsBuilder};
use obcpp::workflows::AssemblyError;
use std::path::Path;
use tracing::debug;

pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    debug!("Loading configuration from file: {:?}", path);
    SettingsFile::read_from_path(path).map_err(|e| CliError::ObcCore(AssemblyError::from(e)))
}

/// Layers command-line overrides on top of the values found in the settings file.
pub fn merge_with_cli(file: &SettingsFile, args: &CheckArgs) -> Result<ObcSettings> {
    let mut builder = ObcSettingsBuilder::from_file(file);

    if let Some(obc_type) = args.obc_type {
        builder = builder.obc_type(obc_type);
    }
    if let Some(value) = args.solvent_dielectric {
        builder = builder.solvent_dielectric(value);
    }
    if let Some(value) = args.solute_dielectric {
        builder = builder.solute_dielectric(value);
    }
    if let Some(value) = args.probe_radius {
        builder = builder.probe_radius(value);
    }
    if let Some(distance) = args.cutoff {
        builder = builder.cutoff(distance);
    }
    if let Some(box_size) = args.periodic_box {
        builder = builder.periodic_box(box_size);
    }

    builder.build().map_err(|e| {
        CliError::Config(format!(
            "{}. Set `model.obc-type` in the settings file or pass --obc-type.",
            e
        ))
    })
}
