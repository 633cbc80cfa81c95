use crate::core::constants::{
    DEFAULT_PROBE_RADIUS, DEFAULT_SOLUTE_DIELECTRIC, DEFAULT_SOLVENT_DIELECTRIC,
};
use crate::core::io::settings::SettingsFile;
use crate::core::obc::error::ParamError;
use crate::core::obc::model::ObcType;
use crate::core::obc::params::ObcParameters;
use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryConfig {
    pub cutoff: Option<f64>,
    pub periodic_box: Option<Vector3<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObcSettings {
    pub obc_type: ObcType,
    pub solvent_dielectric: f64,
    pub solute_dielectric: f64,
    pub probe_radius: f64,
    pub boundary: BoundaryConfig,
}

impl ObcSettings {
    /// Applies the settings to `params`, or leaves it untouched when the resulting boundary
    /// setup would violate the periodic precondition.
    ///
    /// The check covers both a box given here and a box the store already holds, since a
    /// larger cutoff must still fit into it.
    pub fn apply_to(&self, params: &mut ObcParameters) -> Result<(), ParamError> {
        let cutoff = self.boundary.cutoff.or(params.cutoff());
        let periodic_box = self
            .boundary
            .periodic_box
            .as_ref()
            .or(params.periodic_box());
        if let Some(box_size) = periodic_box {
            ObcParameters::check_periodic_box(cutoff, box_size)?;
        }

        params.set_obc_type(self.obc_type);
        params.set_solvent_dielectric(self.solvent_dielectric);
        params.set_solute_dielectric(self.solute_dielectric);
        params.set_probe_radius(self.probe_radius);
        if let Some(cutoff) = self.boundary.cutoff {
            params.enable_cutoff(cutoff);
        }
        if let Some(box_size) = self.boundary.periodic_box {
            params.enable_periodic(box_size)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ObcSettingsBuilder {
    obc_type: Option<ObcType>,
    solvent_dielectric: Option<f64>,
    solute_dielectric: Option<f64>,
    probe_radius: Option<f64>,
    cutoff: Option<f64>,
    periodic_box: Option<Vector3<f64>>,
}

impl ObcSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder with every value present in a settings file.
    pub fn from_file(file: &SettingsFile) -> Self {
        Self {
            obc_type: file.model.obc_type,
            solvent_dielectric: file.model.solvent_dielectric,
            solute_dielectric: file.model.solute_dielectric,
            probe_radius: file.model.probe_radius,
            cutoff: file.boundary.cutoff,
            periodic_box: file.boundary.periodic_box.map(Vector3::from),
        }
    }

    pub fn obc_type(mut self, obc_type: ObcType) -> Self {
        self.obc_type = Some(obc_type);
        self
    }
    pub fn solvent_dielectric(mut self, value: f64) -> Self {
        self.solvent_dielectric = Some(value);
        self
    }
    pub fn solute_dielectric(mut self, value: f64) -> Self {
        self.solute_dielectric = Some(value);
        self
    }
    pub fn probe_radius(mut self, value: f64) -> Self {
        self.probe_radius = Some(value);
        self
    }
    pub fn cutoff(mut self, distance: f64) -> Self {
        self.cutoff = Some(distance);
        self
    }
    pub fn periodic_box(mut self, box_size: Vector3<f64>) -> Self {
        self.periodic_box = Some(box_size);
        self
    }

    pub fn build(self) -> Result<ObcSettings, ConfigError> {
        Ok(ObcSettings {
            obc_type: self
                .obc_type
                .ok_or(ConfigError::MissingParameter("obc_type"))?,
            solvent_dielectric: self
                .solvent_dielectric
                .unwrap_or(DEFAULT_SOLVENT_DIELECTRIC),
            solute_dielectric: self.solute_dielectric.unwrap_or(DEFAULT_SOLUTE_DIELECTRIC),
            probe_radius: self.probe_radius.unwrap_or(DEFAULT_PROBE_RADIUS),
            boundary: BoundaryConfig {
                cutoff: self.cutoff,
                periodic_box: self.periodic_box,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::obc::error::Precondition;

    #[test]
    fn build_fails_without_obc_type() {
        let result = ObcSettingsBuilder::new().cutoff(1.0).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("obc_type")));
    }

    #[test]
    fn build_fills_model_defaults() {
        let settings = ObcSettingsBuilder::new()
            .obc_type(ObcType::ObcII)
            .build()
            .unwrap();
        assert_eq!(settings.solvent_dielectric, 78.3);
        assert_eq!(settings.solute_dielectric, 1.0);
        assert_eq!(settings.probe_radius, 0.14);
        assert_eq!(settings.boundary.cutoff, None);
        assert_eq!(settings.boundary.periodic_box, None);
    }

    #[test]
    fn later_builder_calls_override_file_values() {
        let file = SettingsFile::from_toml_str(
            r#"
            [model]
            obc-type = "obc1"
            solvent-dielectric = 80.0
            [boundary]
            cutoff = 1.0
            "#,
        )
        .unwrap();

        let settings = ObcSettingsBuilder::from_file(&file)
            .solvent_dielectric(4.0)
            .cutoff(1.5)
            .build()
            .unwrap();

        assert_eq!(settings.obc_type, ObcType::ObcI);
        assert_eq!(settings.solvent_dielectric, 4.0);
        assert_eq!(settings.boundary.cutoff, Some(1.5));
    }

    #[test]
    fn apply_to_sets_scalars_and_boundaries() {
        let settings = ObcSettingsBuilder::new()
            .obc_type(ObcType::ObcI)
            .solvent_dielectric(80.0)
            .solute_dielectric(2.0)
            .probe_radius(0.15)
            .cutoff(1.2)
            .periodic_box(Vector3::new(2.4, 2.4, 2.4))
            .build()
            .unwrap();
        let mut params = ObcParameters::new(2, ObcType::ObcII);

        settings.apply_to(&mut params).unwrap();

        assert_eq!(params.obc_type(), ObcType::ObcI);
        assert_eq!(params.solvent_dielectric(), 80.0);
        assert_eq!(params.solute_dielectric(), 2.0);
        assert_eq!(params.probe_radius(), 0.15);
        assert_eq!(params.cutoff_distance(), 1.2);
        assert_eq!(params.periodic_box_size(), &Vector3::new(2.4, 2.4, 2.4));
    }

    #[test]
    fn apply_to_propagates_periodic_without_cutoff() {
        let settings = ObcSettingsBuilder::new()
            .obc_type(ObcType::ObcII)
            .periodic_box(Vector3::new(3.0, 3.0, 3.0))
            .build()
            .unwrap();
        let mut params = ObcParameters::new(2, ObcType::ObcII);

        let result = settings.apply_to(&mut params);

        assert_eq!(
            result,
            Err(ParamError::PreconditionViolation(
                Precondition::CutoffRequired
            ))
        );
        assert_eq!(params, ObcParameters::new(2, ObcType::ObcII));
    }

    #[test]
    fn rejected_apply_to_leaves_periodic_store_unchanged() {
        let mut params = ObcParameters::new(2, ObcType::ObcI);
        params.enable_cutoff(1.2);
        params.enable_periodic(Vector3::new(2.4, 2.4, 2.4)).unwrap();
        let before = params.clone();
        let settings = ObcSettingsBuilder::new()
            .obc_type(ObcType::ObcII)
            .solvent_dielectric(4.0)
            .cutoff(1.5)
            .periodic_box(Vector3::new(2.4, 2.4, 2.4))
            .build()
            .unwrap();

        let result = settings.apply_to(&mut params);

        assert_eq!(
            result,
            Err(ParamError::PreconditionViolation(
                Precondition::BoxTooSmall {
                    axis: 0,
                    length: 2.4,
                    minimum: 3.0,
                }
            ))
        );
        assert_eq!(params, before);
        assert_eq!(params.generation(), before.generation());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn apply_to_checks_new_cutoff_against_existing_box() {
        let mut params = ObcParameters::new(2, ObcType::ObcI);
        params.enable_cutoff(1.0);
        params.enable_periodic(Vector3::new(2.0, 3.0, 3.0)).unwrap();
        let before = params.clone();
        let settings = ObcSettingsBuilder::new()
            .obc_type(ObcType::ObcI)
            .cutoff(1.2)
            .build()
            .unwrap();

        let result = settings.apply_to(&mut params);

        assert!(matches!(
            result,
            Err(ParamError::PreconditionViolation(
                Precondition::BoxTooSmall { axis: 0, .. }
            ))
        ));
        assert_eq!(params, before);
    }

    #[test]
    fn apply_to_accepts_cutoff_that_fits_existing_box() {
        let mut params = ObcParameters::new(2, ObcType::ObcI);
        params.enable_cutoff(1.0);
        params.enable_periodic(Vector3::new(3.0, 3.0, 3.0)).unwrap();
        let settings = ObcSettingsBuilder::new()
            .obc_type(ObcType::ObcII)
            .cutoff(1.5)
            .build()
            .unwrap();

        settings.apply_to(&mut params).unwrap();

        assert_eq!(params.cutoff(), Some(1.5));
        assert_eq!(params.periodic_box(), Some(&Vector3::new(3.0, 3.0, 3.0)));
        assert!(params.validate().is_ok());
    }
}
