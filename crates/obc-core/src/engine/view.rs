use crate::core::obc::model::{ObcCoefficients, ObcType};
use crate::core::obc::params::ObcParameters;
use nalgebra::Vector3;

/// Read-only bundle of everything a Born-radius or energy kernel reads in one step.
///
/// Borrowing keeps the store immutable for as long as any view is alive, and the view is
/// `Copy + Sync` so parallel workers can each hold one.
#[derive(Debug, Clone, Copy)]
pub struct ObcView<'a> {
    pub obc_type: ObcType,
    pub coefficients: ObcCoefficients,
    pub solvent_dielectric: f64,
    pub solute_dielectric: f64,
    pub electric_constant: f64,
    pub probe_radius: f64,
    pub nonpolar_surface_coefficient: f64,
    pub dielectric_offset: f64,
    pub atomic_radii: &'a [f64],
    pub scaled_radius_factors: &'a [f64],
    /// `Some(distance)` when a cutoff is enabled.
    pub cutoff: Option<f64>,
    /// `Some(widths)` when periodic boundaries are enabled.
    pub periodic_box: Option<&'a Vector3<f64>>,
    pub generation: Generation,
}

impl ObcView<'_> {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atomic_radii.len()
    }
}

/// Stamp of the store state a kernel last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    #[inline]
    pub fn of(params: &ObcParameters) -> Self {
        Self(params.generation())
    }

    /// True when `params` was mutated after this stamp was taken.
    #[inline]
    pub fn is_stale(&self, params: &ObcParameters) -> bool {
        self.0 != params.generation()
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl ObcParameters {
    pub fn view(&self) -> ObcView<'_> {
        ObcView {
            obc_type: self.obc_type(),
            coefficients: self.coefficients(),
            solvent_dielectric: self.solvent_dielectric(),
            solute_dielectric: self.solute_dielectric(),
            electric_constant: self.electric_constant(),
            probe_radius: self.probe_radius(),
            nonpolar_surface_coefficient: self.nonpolar_surface_coefficient(),
            dielectric_offset: self.dielectric_offset(),
            atomic_radii: self.atomic_radii(),
            scaled_radius_factors: self.scaled_radius_factors(),
            cutoff: self.cutoff(),
            periodic_box: self.periodic_box(),
            generation: Generation::of(self),
        }
    }
}
