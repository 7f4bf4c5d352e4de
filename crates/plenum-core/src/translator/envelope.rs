//! Materials, constructions, zones and surfaces.
//!
//! Zones and surfaces take part in reference cycles (a zone's equipment
//! names the zone's nodes, paired surfaces name each other), so both publish
//! their primary record before recursing.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{Construction, MaterialNoMass, ModelObject, Surface, ThermalZone};
use crate::primitives::{
    EQUIPMENT_LIST_SUFFIX, EXHAUST_NODE_LIST_SUFFIX, INLET_NODE_LIST_SUFFIX,
    RETURN_NODE_LIST_SUFFIX, ZONE_AIR_NODE_SUFFIX,
};
use crate::schema::RecordType;
use crate::schema::fields::{
    building_surface_detailed, construction, material_no_mass, node_list, zone,
    zone_hvac_equipment_connections, zone_hvac_equipment_list,
};
use crate::session::Session;
use crate::Handle;

use super::{Reference, optional_reference, required_reference};

/// Load distribution written on every zone equipment list.
const LOAD_DISTRIBUTION_SCHEME: &str = "SequentialLoad";

/// Boundary condition that pairs a surface with another one.
const SURFACE_BOUNDARY: &str = "Surface";

/// Written instead of `Surface` when the neighbour cannot be named.
const UNPAIRED_BOUNDARY: &str = "Adiabatic";

pub(super) fn translate_material(
    session: &mut Session<'_>,
    object: &ModelObject,
    material: &MaterialNoMass,
) -> Result<Option<RecordRef>, PlenumError> {
    use material_no_mass as f;
    let mut record = Record::named(RecordType::MaterialNoMass, object.display_name());
    record
        .set(f::ROUGHNESS, material.roughness.as_str())
        .set(f::THERMAL_RESISTANCE, material.thermal_resistance)
        .set_opt(f::THERMAL_ABSORPTANCE, material.thermal_absorptance)
        .set_opt(f::SOLAR_ABSORPTANCE, material.solar_absorptance)
        .set_opt(f::VISIBLE_ABSORPTANCE, material.visible_absorptance);
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_construction(
    session: &mut Session<'_>,
    object: &ModelObject,
    layered: &Construction,
) -> Result<Option<RecordRef>, PlenumError> {
    if layered.layers.is_empty() {
        session.error(object, "Construction has no layers");
        return Ok(None);
    }
    let mut layers = Vec::with_capacity(layered.layers.len());
    for layer in &layered.layers {
        match required_reference(session, object, Some(*layer), "material layer")? {
            Some(reference) => layers.push(reference.name),
            None => return Ok(None),
        }
    }

    let mut record = Record::named(RecordType::Construction, object.display_name());
    for layer in layers {
        record.push_group().set(construction::group::LAYER, layer);
    }
    Ok(Some(session.document_mut().push(record)))
}

// =============================================================================
// ZONES
// =============================================================================

pub(super) fn translate_zone(
    session: &mut Session<'_>,
    object: &ModelObject,
    thermal_zone: &ThermalZone,
) -> Result<Option<RecordRef>, PlenumError> {
    use zone as f;
    let name = object.display_name();

    let mut record = Record::named(RecordType::Zone, name.as_str());
    record
        .set_opt(f::DIRECTION_OF_RELATIVE_NORTH, thermal_zone.direction_of_relative_north)
        .set_opt(f::MULTIPLIER, thermal_zone.multiplier)
        .set_autocalculatable(f::CEILING_HEIGHT, thermal_zone.ceiling_height)
        .set_autocalculatable(f::VOLUME, thermal_zone.volume)
        .set_autocalculatable(f::FLOOR_AREA, thermal_zone.floor_area)
        .set_opt(f::PART_OF_TOTAL_FLOOR_AREA, thermal_zone.part_of_total_floor_area);
    if let Some([x, y, z]) = thermal_zone.origin {
        record
            .set(f::X_ORIGIN, x)
            .set(f::Y_ORIGIN, y)
            .set(f::Z_ORIGIN, z);
    }
    let zone_record = session.document_mut().push(record);
    session.publish(object.handle, zone_record)?;

    let mut equipment: Vec<Reference> = Vec::with_capacity(thermal_zone.equipment.len());
    for handle in &thermal_zone.equipment {
        match session.translate_and_map(*handle)? {
            Some(record) => equipment.push(Reference::of(session, record)?),
            None => {
                let failed = session.object(*handle)?;
                session.warn(
                    object,
                    format!(
                        "Equipment {} could not be translated and was left off the equipment list",
                        failed.display_name()
                    ),
                );
            }
        }
    }
    if equipment.is_empty() {
        return Ok(Some(zone_record));
    }

    let inlets = push_node_list(session, &name, INLET_NODE_LIST_SUFFIX, &thermal_zone.inlet_nodes)?;
    let exhausts =
        push_node_list(session, &name, EXHAUST_NODE_LIST_SUFFIX, &thermal_zone.exhaust_nodes)?;
    let returns =
        push_node_list(session, &name, RETURN_NODE_LIST_SUFFIX, &thermal_zone.return_nodes)?;
    let air_node = match thermal_zone.zone_air_node {
        Some(node) => session.node_name(node)?,
        None => format!("{name} {ZONE_AIR_NODE_SUFFIX}"),
    };

    let list_name = format!("{name} {EQUIPMENT_LIST_SUFFIX}");
    let mut list = Record::named(RecordType::ZoneHvacEquipmentList, list_name.as_str());
    list.set(
        zone_hvac_equipment_list::LOAD_DISTRIBUTION_SCHEME,
        LOAD_DISTRIBUTION_SCHEME,
    );
    for (priority, item) in (1_i64..).zip(&equipment) {
        use zone_hvac_equipment_list::group as g;
        list.push_group()
            .set(g::ZONE_EQUIPMENT_OBJECT_TYPE, item.record_type.name())
            .set(g::ZONE_EQUIPMENT_NAME, item.name.as_str())
            .set(g::ZONE_EQUIPMENT_COOLING_SEQUENCE, priority)
            .set(g::ZONE_EQUIPMENT_HEATING_OR_NO_LOAD_SEQUENCE, priority);
    }
    session.document_mut().push(list);

    use zone_hvac_equipment_connections as c;
    let mut connections = Record::new(RecordType::ZoneHvacEquipmentConnections);
    connections
        .set(c::ZONE_NAME, name.as_str())
        .set(c::ZONE_CONDITIONING_EQUIPMENT_LIST_NAME, list_name)
        .set_opt(c::ZONE_AIR_INLET_NODE_OR_NODE_LIST_NAME, inlets)
        .set_opt(c::ZONE_AIR_EXHAUST_NODE_OR_NODE_LIST_NAME, exhausts)
        .set(c::ZONE_AIR_NODE_NAME, air_node)
        .set_opt(c::ZONE_RETURN_AIR_NODE_OR_NODE_LIST_NAME, returns);
    session.document_mut().push(connections);

    Ok(Some(zone_record))
}

/// Emit a node list for a zone connection group. Returns its name, or
/// `None` when the group is empty.
fn push_node_list(
    session: &mut Session<'_>,
    zone_name: &str,
    suffix: &str,
    nodes: &[Handle],
) -> Result<Option<String>, PlenumError> {
    if nodes.is_empty() {
        return Ok(None);
    }
    let list_name = format!("{zone_name} {suffix}");
    let mut list = Record::named(RecordType::NodeList, list_name.as_str());
    for node in nodes {
        list.push_group()
            .set(node_list::group::NODE_NAME, session.node_name(*node)?);
    }
    session.document_mut().push(list);
    Ok(Some(list_name))
}

// =============================================================================
// SURFACES
// =============================================================================

pub(super) fn translate_surface(
    session: &mut Session<'_>,
    object: &ModelObject,
    surface: &Surface,
) -> Result<Option<RecordRef>, PlenumError> {
    use building_surface_detailed as f;
    if surface.vertices.len() < 3 {
        session.error(
            object,
            format!("Surface has {} vertices, at least 3 required", surface.vertices.len()),
        );
        return Ok(None);
    }
    let Some(zone) = required_reference(session, object, surface.zone, "zone")? else {
        return Ok(None);
    };
    let construction = optional_reference(session, object, surface.construction, "construction")?;

    let mut record = Record::named(RecordType::BuildingSurfaceDetailed, object.display_name());
    record
        .set(f::SURFACE_TYPE, surface.surface_type.as_str())
        .set_opt(f::CONSTRUCTION_NAME, construction.map(|c| c.name))
        .set(f::ZONE_NAME, zone.name)
        .set(f::OUTSIDE_BOUNDARY_CONDITION, surface.outside_boundary_condition.as_str())
        .set_opt(f::SUN_EXPOSURE, surface.sun_exposure.as_deref())
        .set_opt(f::WIND_EXPOSURE, surface.wind_exposure.as_deref())
        .set_autocalculatable(f::VIEW_FACTOR_TO_GROUND, surface.view_factor_to_ground)
        .set(f::NUMBER_OF_VERTICES, surface.vertices.len());
    for [x, y, z] in &surface.vertices {
        use building_surface_detailed::group as g;
        record
            .push_group()
            .set(g::VERTEX_X, *x)
            .set(g::VERTEX_Y, *y)
            .set(g::VERTEX_Z, *z);
    }
    let surface_record = session.document_mut().push(record);
    session.publish(object.handle, surface_record)?;

    let paired = surface
        .outside_boundary_condition
        .eq_ignore_ascii_case(SURFACE_BOUNDARY);
    match (paired, surface.adjacent_surface) {
        (true, adjacent) => {
            if let Some(other) = optional_reference(session, object, adjacent, "adjacent surface")? {
                session.document_mut().set_text(
                    surface_record,
                    f::OUTSIDE_BOUNDARY_CONDITION_OBJECT,
                    other.name,
                )?;
            } else {
                session.document_mut().set_text(
                    surface_record,
                    f::OUTSIDE_BOUNDARY_CONDITION,
                    UNPAIRED_BOUNDARY,
                )?;
                session.warn(
                    object,
                    format!("No adjacent surface to pair with; boundary written as {UNPAIRED_BOUNDARY}"),
                );
            }
        }
        (false, Some(_)) => session.warn(
            object,
            format!(
                "Adjacent surface ignored for boundary condition {}",
                surface.outside_boundary_condition
            ),
        ),
        (false, None) => {}
    }

    Ok(Some(surface_record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::model::{Model, ObjectKind};

    fn floor(zone: Handle) -> Surface {
        Surface {
            surface_type: "Floor".to_string(),
            zone: Some(zone),
            outside_boundary_condition: "Ground".to_string(),
            vertices: vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
            ..Surface::default()
        }
    }

    #[test]
    fn zone_without_equipment_emits_only_the_zone() {
        let mut model = Model::new();
        let zone = model.add("Office", ObjectKind::ThermalZone(ThermalZone::default()));
        let mut session = Session::new(&model, TranslatorOptions::default());
        session.translate_and_map(zone).expect("translate");

        assert_eq!(session.document().len(), 1);
        assert_eq!(session.document().records()[0].record_type(), RecordType::Zone);
    }

    #[test]
    fn surface_requires_a_zone() {
        let mut model = Model::new();
        let zone = Handle::fresh();
        let mut detached = floor(zone);
        detached.zone = None;
        let surface = model.add("Floor", ObjectKind::Surface(detached));
        let mut session = Session::new(&model, TranslatorOptions::default());

        assert_eq!(session.translate_and_map(surface).expect("translate"), None);
        assert!(session.finish().has_errors());
    }

    #[test]
    fn paired_surfaces_name_each_other() {
        let mut model = Model::new();
        let zone = model.add("Office", ObjectKind::ThermalZone(ThermalZone::default()));
        let a = model.add("Wall A", ObjectKind::Surface(floor(zone)));
        let b = model.add("Wall B", ObjectKind::Surface(floor(zone)));
        for (this, other) in [(a, b), (b, a)] {
            if let Some(ObjectKind::Surface(s)) = model.get_mut(this).map(|o| &mut o.kind) {
                s.outside_boundary_condition = "Surface".to_string();
                s.adjacent_surface = Some(other);
            }
        }

        let mut session = Session::new(&model, TranslatorOptions::default());
        let record_a = session.translate_and_map(a).expect("translate").expect("record");
        let record_b = session.mapped(b).flatten().expect("b translated during a");

        let document = session.document();
        let boundary = building_surface_detailed::OUTSIDE_BOUNDARY_CONDITION_OBJECT;
        assert_eq!(document.record(record_a).and_then(|r| r.text(boundary)), Some("Wall B"));
        assert_eq!(document.record(record_b).and_then(|r| r.text(boundary)), Some("Wall A"));
    }

    #[test]
    fn unresolved_neighbour_becomes_adiabatic() {
        let mut model = Model::new();
        let zone = model.add("Office", ObjectKind::ThermalZone(ThermalZone::default()));
        let mut broken = floor(zone);
        broken.vertices.truncate(2);
        let other = model.add("Broken", ObjectKind::Surface(broken));
        let mut wall = floor(zone);
        wall.outside_boundary_condition = "Surface".to_string();
        wall.adjacent_surface = Some(other);
        let wall = model.add("Wall", ObjectKind::Surface(wall));

        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(wall).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(
            record.text(building_surface_detailed::OUTSIDE_BOUNDARY_CONDITION),
            Some("Adiabatic")
        );
        assert_eq!(record.text(building_surface_detailed::OUTSIDE_BOUNDARY_CONDITION_OBJECT), None);
    }

    #[test]
    fn construction_lists_layers_outside_first() {
        let mut model = Model::new();
        let outer = model.add(
            "Outer",
            ObjectKind::MaterialNoMass(MaterialNoMass {
                roughness: "Rough".to_string(),
                thermal_resistance: 0.5,
                ..MaterialNoMass::default()
            }),
        );
        let inner = model.add(
            "Inner",
            ObjectKind::MaterialNoMass(MaterialNoMass {
                roughness: "Smooth".to_string(),
                thermal_resistance: 2.0,
                ..MaterialNoMass::default()
            }),
        );
        let assembly = model.add(
            "Wall",
            ObjectKind::Construction(Construction {
                layers: vec![outer, inner],
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(assembly).expect("translate").expect("record");

        let groups = session.document().record(record).expect("record").groups();
        let layers: Vec<_> = groups
            .iter()
            .filter_map(|g| g.get(construction::group::LAYER))
            .map(ToString::to_string)
            .collect();
        assert_eq!(layers, vec!["Outer", "Inner"]);
    }
}
