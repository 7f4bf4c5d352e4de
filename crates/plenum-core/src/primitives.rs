//! # Translation Primitives
//!
//! Fixed keywords, suffixes and policy defaults used by the translators.
//!
//! These values are part of the output contract: downstream tools and
//! regression baselines depend on the exact spelling of synthesized names,
//! so they are compiled in and never configurable.

/// Keyword written for fields sized by the simulation engine.
pub const AUTOSIZE_KEYWORD: &str = "Autosize";

/// Keyword written for fields calculated by the simulation engine.
pub const AUTOCALCULATE_KEYWORD: &str = "Autocalculate";

/// Simulation engine version written into the `Version` record by default.
pub const DEFAULT_TARGET_VERSION: &str = "24.1";

/// Fan placement written when an assembly has a fan but no placement.
pub const DEFAULT_FAN_PLACEMENT: &str = "DrawThrough";

/// Supply air flow method written for a mode whose coil is present but
/// names no method.
pub const DEFAULT_FLOW_RATE_METHOD: &str = "SupplyAirFlowRate";

/// Supply air flow method written for a mode with no coil.
pub const NO_FLOW_RATE_METHOD: &str = "None";

/// Fuel written for a fuel-fired heating coil that names none.
pub const DEFAULT_HEATING_FUEL: &str = "NaturalGas";

/// Fan placement keyword that puts the fan first in the air path.
pub const BLOW_THROUGH: &str = "BlowThrough";

// =============================================================================
// SYNTHESIZED NAME SUFFIXES
// =============================================================================

/// Suffix of every synthesized connection identifier.
pub const NODE_SUFFIX: &str = "Node";

/// Suffix of a derived multi-speed performance descriptor name.
pub const PERFORMANCE_SUFFIX: &str = "Unitary System Performance";

/// Suffix of a zone's equipment list name.
pub const EQUIPMENT_LIST_SUFFIX: &str = "Equipment List";

/// Suffix of a zone's inlet node list name.
pub const INLET_NODE_LIST_SUFFIX: &str = "Inlet Node List";

/// Suffix of a zone's exhaust node list name.
pub const EXHAUST_NODE_LIST_SUFFIX: &str = "Exhaust Node List";

/// Suffix of a zone's return node list name.
pub const RETURN_NODE_LIST_SUFFIX: &str = "Return Node List";

/// Suffix of a zone's air node when the model names none.
pub const ZONE_AIR_NODE_SUFFIX: &str = "Zone Air Node";

/// Suffix of the outdoor air mixer synthesized for a packaged terminal unit.
pub const OA_MIXER_SUFFIX: &str = "OA Mixer";

/// Suffixes of the three nodes synthesized around a packaged terminal unit's mixer.
pub const MIXED_AIR_NODE_SUFFIX: &str = "Mixed Air Node";
pub const OUTDOOR_AIR_NODE_SUFFIX: &str = "Outdoor Air Node";
pub const RELIEF_AIR_NODE_SUFFIX: &str = "Relief Air Node";

// =============================================================================
// OUTPUT LAYOUT
// =============================================================================

/// Indentation of every field line in the serialized document.
pub const FIELD_INDENT: &str = "  ";

/// Column at which `!-` field comments start.
pub const FIELD_COMMENT_COLUMN: usize = 38;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_keywords_differ() {
        assert_ne!(AUTOSIZE_KEYWORD, AUTOCALCULATE_KEYWORD);
    }

    #[test]
    fn comment_column_clears_indent() {
        assert!(FIELD_COMMENT_COLUMN > FIELD_INDENT.len());
    }
}
