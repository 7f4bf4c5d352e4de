//! # Envelope, Zone and Support Payloads
//!
//! Schedules, curves, materials, constructions, thermal zones and surfaces.

use serde::{Deserialize, Serialize};

use crate::{Autosizable, Handle};

// =============================================================================
// SCHEDULES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTypeLimits {
    #[serde(default)]
    pub lower_limit_value: Option<f64>,
    #[serde(default)]
    pub upper_limit_value: Option<f64>,
    /// `Continuous` or `Discrete`.
    #[serde(default)]
    pub numeric_type: Option<String>,
    #[serde(default)]
    pub unit_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConstant {
    #[serde(default)]
    pub schedule_type_limits: Option<Handle>,
    pub value: f64,
}

// =============================================================================
// CURVES
// =============================================================================

/// Shape of a single-equation performance curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveForm {
    Quadratic,
    Cubic,
    Biquadratic,
}

impl CurveForm {
    /// Number of coefficients the equation takes.
    #[must_use]
    pub const fn coefficient_count(self) -> usize {
        match self {
            Self::Quadratic => 3,
            Self::Cubic => 4,
            Self::Biquadratic => 6,
        }
    }

    /// Whether the curve has a second independent variable.
    #[must_use]
    pub const fn is_two_dimensional(self) -> bool {
        matches!(self, Self::Biquadratic)
    }
}

/// Coefficients and limits shared by every curve kind.
///
/// Coefficients are stored in equation order (constant term first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub minimum_x: Option<f64>,
    #[serde(default)]
    pub maximum_x: Option<f64>,
    #[serde(default)]
    pub minimum_y: Option<f64>,
    #[serde(default)]
    pub maximum_y: Option<f64>,
    #[serde(default)]
    pub minimum_output: Option<f64>,
    #[serde(default)]
    pub maximum_output: Option<f64>,
}

impl Curve {
    /// A curve with the given coefficients and no limits.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self {
            coefficients,
            ..Self::default()
        }
    }

    /// Set the independent-variable range.
    #[must_use]
    pub fn with_x_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_x = Some(minimum);
        self.maximum_x = Some(maximum);
        self
    }

    /// Set the second independent-variable range.
    #[must_use]
    pub fn with_y_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_y = Some(minimum);
        self.maximum_y = Some(maximum);
        self
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialNoMass {
    pub roughness: String,
    pub thermal_resistance: f64,
    #[serde(default)]
    pub thermal_absorptance: Option<f64>,
    #[serde(default)]
    pub solar_absorptance: Option<f64>,
    #[serde(default)]
    pub visible_absorptance: Option<f64>,
}

/// Layered construction, outside layer first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    #[serde(default)]
    pub layers: Vec<Handle>,
}

/// A conditioned space and its air-side connections.
///
/// `equipment` lists zone equipment in cooling/heating priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermalZone {
    #[serde(default)]
    pub direction_of_relative_north: Option<f64>,
    #[serde(default)]
    pub origin: Option<[f64; 3]>,
    #[serde(default)]
    pub multiplier: Option<i32>,
    #[serde(default)]
    pub ceiling_height: Option<Autosizable>,
    #[serde(default)]
    pub volume: Option<Autosizable>,
    #[serde(default)]
    pub floor_area: Option<Autosizable>,
    #[serde(default)]
    pub part_of_total_floor_area: Option<bool>,
    #[serde(default)]
    pub zone_air_node: Option<Handle>,
    #[serde(default)]
    pub inlet_nodes: Vec<Handle>,
    #[serde(default)]
    pub exhaust_nodes: Vec<Handle>,
    #[serde(default)]
    pub return_nodes: Vec<Handle>,
    #[serde(default)]
    pub equipment: Vec<Handle>,
}

/// A planar heat-transfer surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// `Floor`, `Wall`, `Ceiling` or `Roof`.
    pub surface_type: String,
    #[serde(default)]
    pub construction: Option<Handle>,
    #[serde(default)]
    pub zone: Option<Handle>,
    /// `Outdoors`, `Ground`, `Adiabatic` or `Surface`.
    pub outside_boundary_condition: String,
    /// The matching surface on the other side when the condition is `Surface`.
    #[serde(default)]
    pub adjacent_surface: Option<Handle>,
    #[serde(default)]
    pub sun_exposure: Option<String>,
    #[serde(default)]
    pub wind_exposure: Option<String>,
    #[serde(default)]
    pub view_factor_to_ground: Option<Autosizable>,
    /// Counter-clockwise vertices seen from outside, in metres.
    #[serde(default)]
    pub vertices: Vec<[f64; 3]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_forms_know_their_arity() {
        assert_eq!(CurveForm::Quadratic.coefficient_count(), 3);
        assert_eq!(CurveForm::Cubic.coefficient_count(), 4);
        assert_eq!(CurveForm::Biquadratic.coefficient_count(), 6);
        assert!(CurveForm::Biquadratic.is_two_dimensional());
        assert!(!CurveForm::Cubic.is_two_dimensional());
    }

    #[test]
    fn zone_defaults_to_no_connections() {
        let zone: ThermalZone = serde_json::from_str("{}").expect("parse");
        assert!(zone.equipment.is_empty());
        assert!(zone.zone_air_node.is_none());
        assert_eq!(zone.multiplier, None);
    }

    #[test]
    fn surface_parses_vertices() {
        let surface: Surface = serde_json::from_str(
            r#"{
                "surface_type": "Floor",
                "outside_boundary_condition": "Ground",
                "vertices": [[0,0,0],[1,0,0],[1,1,0]]
            }"#,
        )
        .expect("parse");
        assert_eq!(surface.vertices.len(), 3);
        assert_eq!(surface.vertices[1], [1.0, 0.0, 0.0]);
    }
}
