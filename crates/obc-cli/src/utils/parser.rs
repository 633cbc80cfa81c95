use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid box size '{0}'. Expected three comma-separated widths (e.g., '2.4,2.4,2.4').")]
    InvalidBoxFormat(String),

    #[error("Invalid width '{value}' on axis {axis} of box size '{input}'.")]
    InvalidWidth {
        axis: usize,
        value: String,
        input: String,
    },
}

pub fn parse_box_size(input: &str) -> Result<Vector3<f64>, ParseError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidBoxFormat(input.to_string()));
    }

    let mut widths = [0.0; 3];
    for (axis, part) in parts.iter().enumerate() {
        widths[axis] = part.parse().map_err(|_| ParseError::InvalidWidth {
            axis,
            value: part.to_string(),
            input: input.to_string(),
        })?;
    }
    Ok(Vector3::from(widths))
}
