use crate::cli::DefaultsArgs;
use obcpp::core::constants::{
    DEFAULT_DIELECTRIC_OFFSET, DEFAULT_PROBE_RADIUS, DEFAULT_SOLUTE_DIELECTRIC,
    DEFAULT_SOLVENT_DIELECTRIC, NONPOLAR_SURFACE_COEFFICIENT, ONE_4PI_EPS0,
};
use obcpp::core::obc::model::ObcType;

pub fn run(args: DefaultsArgs) {
    print!("{}", render(args.obc_type));
}

fn render(only: Option<ObcType>) -> String {
    let mut out = format!(
        "Solvent dielectric:        {}\n\
         Solute dielectric:         {}\n\
         Probe radius:              {}\n\
         Dielectric offset:         {}\n\
         Electric constant:         {}\n\
         Nonpolar surface coeff.:   {}\n",
        DEFAULT_SOLVENT_DIELECTRIC,
        DEFAULT_SOLUTE_DIELECTRIC,
        DEFAULT_PROBE_RADIUS,
        DEFAULT_DIELECTRIC_OFFSET,
        -0.5 * ONE_4PI_EPS0,
        NONPOLAR_SURFACE_COEFFICIENT,
    );

    let types: Vec<ObcType> = match only {
        Some(ty) => vec![ty],
        None => ObcType::ALL.to_vec(),
    };
    for ty in types {
        let c = ty.coefficients();
        out.push_str(&format!(
            "{}: alpha={}, beta={}, gamma={}\n",
            ty, c.alpha, c.beta, c.gamma
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_both_variants_by_default() {
        let out = render(None);
        assert!(out.contains("obc1: alpha=0.8, beta=0, gamma=2.91"));
        assert!(out.contains("obc2: alpha=1, beta=0.8, gamma=4.85"));
        assert!(out.contains("Solvent dielectric:        78.3"));
    }

    #[test]
    fn render_filters_to_requested_variant() {
        let out = render(Some(ObcType::ObcII));
        assert!(!out.contains("obc1:"));
        assert!(out.contains("obc2:"));
    }
}
