use super::AssemblyError;
use crate::core::io::atoms::AtomTable;
use crate::core::io::settings::SettingsFile;
use crate::core::obc::params::ObcParameters;
use crate::engine::config::{ObcSettings, ObcSettingsBuilder};
use std::path::Path;
use tracing::{info, instrument};

/// Builds a store sized to `atoms`, fills both per-atom arrays, applies `settings` and
/// re-validates the result.
#[instrument(skip_all, name = "assemble_obc_parameters", fields(atoms = atoms.len()))]
pub fn run(settings: &ObcSettings, atoms: &AtomTable) -> Result<ObcParameters, AssemblyError> {
    if atoms.is_empty() {
        return Err(AssemblyError::EmptySystem);
    }

    let mut params = ObcParameters::new(atoms.len(), settings.obc_type);
    params.set_atomic_radii(&atoms.radii)?;
    params.set_scaled_radius_factors(&atoms.scale_factors)?;
    settings.apply_to(&mut params)?;
    params.validate()?;

    info!(
        "Assembled {} parameters for {} atoms (alpha={}, beta={}, gamma={}).",
        params.obc_type(),
        params.atom_count(),
        params.alpha(),
        params.beta(),
        params.gamma()
    );
    if params.periodic_enabled() {
        let b = params.periodic_box_size();
        info!(
            "Periodic box {:.4} x {:.4} x {:.4} with cutoff {:.4}.",
            b.x,
            b.y,
            b.z,
            params.cutoff_distance()
        );
    } else if params.cutoff_enabled() {
        info!("Non-periodic with cutoff {:.4}.", params.cutoff_distance());
    }

    Ok(params)
}

/// Loads a settings file and an atom table from disk and assembles them.
#[instrument(skip_all)]
pub fn from_files(
    settings_path: &Path,
    atoms_path: &Path,
) -> Result<ObcParameters, AssemblyError> {
    let file = SettingsFile::read_from_path(settings_path)?;
    let settings = ObcSettingsBuilder::from_file(&file).build()?;
    let atoms = AtomTable::read_from_path(atoms_path)?;
    run(&settings, &atoms)
}
