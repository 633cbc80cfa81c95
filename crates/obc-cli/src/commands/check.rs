use crate::cli::CheckArgs;
use crate::config;
use crate::error::Result;
use obcpp::core::io::atoms::AtomTable;
use obcpp::core::obc::params::ObcParameters;
use obcpp::workflows::{AssemblyError, assemble};
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let file = config::load_settings_file(&args.params)?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = config::merge_with_cli(&file, &args)?;

    info!("Loading per-atom parameters from {:?}", &args.atoms);
    let atoms = AtomTable::read_from_path(&args.atoms).map_err(AssemblyError::from)?;

    let params = assemble::run(&settings, &atoms)?;
    print!("{}", render_summary(&params));
    Ok(())
}

pub fn render_summary(params: &ObcParameters) -> String {
    let c = params.coefficients();
    let cutoff = match params.cutoff() {
        Some(distance) => distance.to_string(),
        None => "none".to_string(),
    };
    let periodic_box = match params.periodic_box() {
        Some(b) => format!("{} x {} x {}", b.x, b.y, b.z),
        None => "none".to_string(),
    };

    format!(
        "Atoms:               {}\n\
         OBC type:            {} (alpha={}, beta={}, gamma={})\n\
         Solvent dielectric:  {}\n\
         Solute dielectric:   {}\n\
         Probe radius:        {}\n\
         Cutoff:              {}\n\
         Periodic box:        {}\n",
        params.atom_count(),
        params.obc_type(),
        c.alpha,
        c.beta,
        c.gamma,
        params.solvent_dielectric(),
        params.solute_dielectric(),
        params.probe_radius(),
        cutoff,
        periodic_box,
    )
}
