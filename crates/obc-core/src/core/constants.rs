/// Coulomb prefactor 1/(4πε₀) in kJ·nm/(mol·e²).
pub const ONE_4PI_EPS0: f64 = 138.935456;

/// `4π·A_solv` used by the ACE approximation of the nonpolar term, in kJ/(mol·nm²).
/// A_solv is the OBC surface tension of 0.0054 kcal/(mol·Å²).
pub const NONPOLAR_SURFACE_COEFFICIENT: f64 = 28.3919551;

pub const DEFAULT_SOLVENT_DIELECTRIC: f64 = 78.3;
pub const DEFAULT_SOLUTE_DIELECTRIC: f64 = 1.0;

/// Solvent probe radius in nm.
pub const DEFAULT_PROBE_RADIUS: f64 = 0.14;

/// Offset subtracted from atomic radii before screening, in nm.
pub const DEFAULT_DIELECTRIC_OFFSET: f64 = 0.009;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electric_constant_prefactor_matches_coulomb_constant() {
        assert!((-0.5 * ONE_4PI_EPS0 - (-69.467728)).abs() < 1e-12);
    }

    #[test]
    fn nonpolar_coefficient_is_four_pi_times_obc_surface_tension() {
        // kcal/(mol·Å²) -> kJ/(mol·nm²)
        let expected = std::f64::consts::PI * 4.0 * 0.0054 * 4.184 * 100.0;
        assert!((NONPOLAR_SURFACE_COEFFICIENT - expected).abs() < 1e-6);
    }
}
