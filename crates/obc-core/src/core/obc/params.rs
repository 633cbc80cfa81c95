use super::error::{ParamError, PerAtomField, Precondition};
use super::model::{ObcCoefficients, ObcType};
use crate::core::constants::{
    DEFAULT_DIELECTRIC_OFFSET, DEFAULT_PROBE_RADIUS, DEFAULT_SOLUTE_DIELECTRIC,
    DEFAULT_SOLVENT_DIELECTRIC, NONPOLAR_SURFACE_COEFFICIENT, ONE_4PI_EPS0,
};
use nalgebra::Vector3;
use tracing::{debug, warn};

/// Per-system inputs of the GBSA-OBC model.
///
/// The per-atom arrays are allocated once at construction and never resized. Every mutation
/// either succeeds completely or leaves the store untouched, and each successful mutation
/// advances [`generation`](Self::generation).
#[derive(Debug, Clone, PartialEq)]
pub struct ObcParameters {
    atom_count: usize,
    obc_type: ObcType,
    coefficients: ObcCoefficients,

    solvent_dielectric: f64,
    solute_dielectric: f64,
    electric_constant: f64,
    probe_radius: f64,
    nonpolar_surface_coefficient: f64,
    dielectric_offset: f64,

    atomic_radii: Box<[f64]>,
    scaled_radius_factors: Box<[f64]>,

    cutoff_enabled: bool,
    cutoff_distance: f64,
    periodic_enabled: bool,
    periodic_box_size: Vector3<f64>,

    generation: u64,
}

impl ObcParameters {
    pub fn new(atom_count: usize, obc_type: ObcType) -> Self {
        Self {
            atom_count,
            obc_type,
            coefficients: obc_type.coefficients(),
            solvent_dielectric: DEFAULT_SOLVENT_DIELECTRIC,
            solute_dielectric: DEFAULT_SOLUTE_DIELECTRIC,
            electric_constant: -0.5 * ONE_4PI_EPS0,
            probe_radius: DEFAULT_PROBE_RADIUS,
            nonpolar_surface_coefficient: NONPOLAR_SURFACE_COEFFICIENT,
            dielectric_offset: DEFAULT_DIELECTRIC_OFFSET,
            atomic_radii: vec![0.0; atom_count].into_boxed_slice(),
            scaled_radius_factors: vec![0.0; atom_count].into_boxed_slice(),
            cutoff_enabled: false,
            cutoff_distance: 0.0,
            periodic_enabled: false,
            periodic_box_size: Vector3::zeros(),
            generation: 0,
        }
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn set_obc_type(&mut self, obc_type: ObcType) {
        self.obc_type = obc_type;
        self.coefficients = obc_type.coefficients();
        self.touch();
        debug!(obc_type = %obc_type, "OBC type set");
    }

    pub fn set_atomic_radii(&mut self, values: &[f64]) -> Result<(), ParamError> {
        Self::replace_per_atom(&mut self.atomic_radii, PerAtomField::AtomicRadii, values)?;
        self.touch();
        Ok(())
    }

    pub fn set_scaled_radius_factors(&mut self, values: &[f64]) -> Result<(), ParamError> {
        Self::replace_per_atom(
            &mut self.scaled_radius_factors,
            PerAtomField::ScaledRadiusFactors,
            values,
        )?;
        self.touch();
        Ok(())
    }

    fn replace_per_atom(
        target: &mut [f64],
        field: PerAtomField,
        values: &[f64],
    ) -> Result<(), ParamError> {
        if values.len() != target.len() {
            warn!(
                "Rejected {}: input size {} does not match atom count {}",
                field,
                values.len(),
                target.len()
            );
            return Err(ParamError::SizeMismatch {
                field,
                provided: values.len(),
                expected: target.len(),
            });
        }
        target.copy_from_slice(values);
        debug!("Replaced {} for {} atoms", field, values.len());
        Ok(())
    }

    pub fn set_solvent_dielectric(&mut self, value: f64) {
        self.solvent_dielectric = value;
        self.touch();
    }

    pub fn set_solute_dielectric(&mut self, value: f64) {
        self.solute_dielectric = value;
        self.touch();
    }

    pub fn set_probe_radius(&mut self, value: f64) {
        self.probe_radius = value;
        self.touch();
    }

    /// Enables the cutoff, or overwrites the distance of an existing one.
    ///
    /// The distance is not range checked. It is not re-checked against an already accepted
    /// periodic box either; call [`validate`](Self::validate) after changing the cutoff of a
    /// periodic system.
    pub fn enable_cutoff(&mut self, distance: f64) {
        self.cutoff_enabled = true;
        self.cutoff_distance = distance;
        self.touch();
        debug!(distance, "Cutoff enabled");
    }

    /// Enables periodic boundaries with the given box widths.
    ///
    /// Requires an enabled cutoff and every box width to be at least twice the cutoff
    /// distance, so that no pair interacts with more than one periodic image.
    pub fn enable_periodic(&mut self, box_size: Vector3<f64>) -> Result<(), ParamError> {
        if let Err(violation) = Self::check_periodic_box(self.cutoff(), &box_size) {
            warn!("Rejected periodic box {:?}: {}", box_size.as_slice(), violation);
            return Err(violation.into());
        }
        self.periodic_enabled = true;
        self.periodic_box_size = box_size;
        self.touch();
        debug!(
            x = box_size.x,
            y = box_size.y,
            z = box_size.z,
            "Periodic boundaries enabled"
        );
        Ok(())
    }

    /// Checks a periodic box against a cutoff, `None` meaning no cutoff is enabled.
    pub fn check_periodic_box(
        cutoff: Option<f64>,
        box_size: &Vector3<f64>,
    ) -> Result<(), Precondition> {
        let Some(cutoff_distance) = cutoff else {
            return Err(Precondition::CutoffRequired);
        };
        let minimum = 2.0 * cutoff_distance;
        for (axis, &length) in box_size.iter().enumerate() {
            // NaN widths fail this comparison as well.
            if !(length >= minimum) {
                return Err(Precondition::BoxTooSmall {
                    axis,
                    length,
                    minimum,
                });
            }
        }
        Ok(())
    }

    /// Re-checks every cross-field invariant and reports the first violation.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (field, len) in [
            (PerAtomField::AtomicRadii, self.atomic_radii.len()),
            (
                PerAtomField::ScaledRadiusFactors,
                self.scaled_radius_factors.len(),
            ),
        ] {
            if len != self.atom_count {
                return Err(ParamError::SizeMismatch {
                    field,
                    provided: len,
                    expected: self.atom_count,
                });
            }
        }
        if self.periodic_enabled {
            Self::check_periodic_box(self.cutoff(), &self.periodic_box_size)?;
        }
        Ok(())
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    #[inline]
    pub fn obc_type(&self) -> ObcType {
        self.obc_type
    }

    #[inline]
    pub fn coefficients(&self) -> ObcCoefficients {
        self.coefficients
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.coefficients.alpha
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.coefficients.beta
    }

    #[inline]
    pub fn gamma(&self) -> f64 {
        self.coefficients.gamma
    }

    #[inline]
    pub fn solvent_dielectric(&self) -> f64 {
        self.solvent_dielectric
    }

    #[inline]
    pub fn solute_dielectric(&self) -> f64 {
        self.solute_dielectric
    }

    /// `-0.5 / (4πε₀)`, the prefactor of the polarization energy.
    #[inline]
    pub fn electric_constant(&self) -> f64 {
        self.electric_constant
    }

    #[inline]
    pub fn probe_radius(&self) -> f64 {
        self.probe_radius
    }

    #[inline]
    pub fn nonpolar_surface_coefficient(&self) -> f64 {
        self.nonpolar_surface_coefficient
    }

    #[inline]
    pub fn dielectric_offset(&self) -> f64 {
        self.dielectric_offset
    }

    #[inline]
    pub fn atomic_radii(&self) -> &[f64] {
        &self.atomic_radii
    }

    #[inline]
    pub fn scaled_radius_factors(&self) -> &[f64] {
        &self.scaled_radius_factors
    }

    #[inline]
    pub fn cutoff_enabled(&self) -> bool {
        self.cutoff_enabled
    }

    /// Meaningful only when [`cutoff_enabled`](Self::cutoff_enabled); `0.0` before that.
    #[inline]
    pub fn cutoff_distance(&self) -> f64 {
        self.cutoff_distance
    }

    /// `Some(distance)` when a cutoff is enabled.
    #[inline]
    pub fn cutoff(&self) -> Option<f64> {
        self.cutoff_enabled.then_some(self.cutoff_distance)
    }

    #[inline]
    pub fn periodic_enabled(&self) -> bool {
        self.periodic_enabled
    }

    /// Meaningful only when [`periodic_enabled`](Self::periodic_enabled); zero before that.
    #[inline]
    pub fn periodic_box_size(&self) -> &Vector3<f64> {
        &self.periodic_box_size
    }

    /// `Some(widths)` when periodic boundaries are enabled.
    #[inline]
    pub fn periodic_box(&self) -> Option<&Vector3<f64>> {
        self.periodic_enabled.then_some(&self.periodic_box_size)
    }

    /// Mutation counter; advances on every successful mutation and never on a rejected one.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
