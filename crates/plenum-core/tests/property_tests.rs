//! # Property-Based Tests
//!
//! Invariants of the translation engine checked with proptest.

use float_cmp::approx_eq;
use plenum_core::derived::{StageBasis, StagedSide, performance_descriptor};
use plenum_core::model::{Surface, ThermalZone};
use plenum_core::schema::fields::building_surface_detailed;
use plenum_core::topology::{Pipeline, StageRole};
use plenum_core::{
    Autosizable, BuiltinSchema, Document, ForwardTranslator, Handle, Model, ObjectKind, Record,
    RecordType, TranslatorOptions, write_idf,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// HELPERS
// =============================================================================

/// A zone with `targets.len()` paired surfaces; surface `i` names surface
/// `targets[i]` as its neighbour, so arbitrary cycles and self-loops occur.
fn surface_graph(targets: &[usize]) -> (Model, Vec<Handle>) {
    let mut model = Model::new();
    let zone = model.add("Zone", ObjectKind::ThermalZone(ThermalZone::default()));
    let surfaces: Vec<Handle> = (0..targets.len())
        .map(|i| {
            model.add(
                format!("Surface {i:03}"),
                ObjectKind::Surface(Surface {
                    surface_type: "Wall".to_string(),
                    zone: Some(zone),
                    outside_boundary_condition: "Surface".to_string(),
                    vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]],
                    ..Surface::default()
                }),
            )
        })
        .collect();
    for (surface, target) in surfaces.iter().zip(targets) {
        let adjacent = surfaces[*target];
        if let Some(ObjectKind::Surface(s)) = model.get_mut(*surface).map(|o| &mut o.kind) {
            s.adjacent_surface = Some(adjacent);
        }
    }
    (model, surfaces)
}

fn translate(model: &Model) -> Document {
    ForwardTranslator::new(TranslatorOptions::default())
        .translate(model)
        .expect("translate")
        .document
}

const ROLES: [StageRole; 4] = [
    StageRole::Fan,
    StageRole::CoolingCoil,
    StageRole::HeatingCoil,
    StageRole::SupplementalHeatingCoil,
];

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every surface of an arbitrary reference graph is emitted exactly once
    /// and names its neighbour.
    #[test]
    fn reference_graphs_emit_each_object_once(
        raw in vec(0usize..1000, 1..24)
    ) {
        let targets: Vec<usize> = raw.iter().map(|t| t % raw.len()).collect();
        let (model, _) = surface_graph(&targets);
        let document = translate(&model);

        prop_assert_eq!(
            document.records_of_type(RecordType::BuildingSurfaceDetailed).count(),
            targets.len()
        );
        for (i, target) in targets.iter().enumerate() {
            let record = document
                .find(RecordType::BuildingSurfaceDetailed, &format!("Surface {i:03}"))
                .and_then(|r| document.record(r))
                .expect("surface record");
            let expected = format!("Surface {target:03}");
            prop_assert_eq!(
                record.text(building_surface_detailed::OUTSIDE_BOUNDARY_CONDITION_OBJECT),
                Some(expected.as_str())
            );
        }
    }

    /// Two runs over one model produce byte-identical text.
    #[test]
    fn translation_is_deterministic(
        raw in vec(0usize..1000, 1..16)
    ) {
        let targets: Vec<usize> = raw.iter().map(|t| t % raw.len()).collect();
        let (model, _) = surface_graph(&targets);

        let first = write_idf(&translate(&model), &BuiltinSchema, false);
        let second = write_idf(&translate(&model), &BuiltinSchema, false);
        prop_assert_eq!(first, second);
    }

    /// Present stages form one unbroken chain from inlet to outlet.
    #[test]
    fn pipeline_connections_chain(
        present in vec(any::<bool>(), 4),
        blow_through in any::<bool>()
    ) {
        let mut document = Document::new();
        let mut pipeline = Pipeline::new("Unit", "In", "Out", blow_through);
        for (role, keep) in ROLES.iter().zip(&present) {
            let record = keep.then(|| {
                document.push(Record::named(RecordType::CoilHeatingElectric, role.label()))
            });
            pipeline.set_stage(*role, record);
        }

        let connections = pipeline.assign_nodes();
        prop_assert_eq!(connections.len(), present.iter().filter(|p| **p).count());
        if let (Some(first), Some(last)) = (connections.first(), connections.last()) {
            prop_assert_eq!(first.inlet.as_str(), "In");
            prop_assert_eq!(last.outlet.as_str(), "Out");
        }
        for pair in connections.windows(2) {
            prop_assert_eq!(&pair[0].outlet, &pair[1].inlet);
        }
    }

    /// Capacity shares of a fully specified side sum to one.
    #[test]
    fn capacity_ratios_sum_to_one(
        capacities in vec(1.0f64..100_000.0, 1..8)
    ) {
        let side = StagedSide::new(
            capacities.iter().map(|c| StageBasis::NominalCapacity(Some(*c))).collect(),
            None,
        );
        let total: f64 = (0..capacities.len())
            .filter_map(|i| side.ratio(i).value())
            .sum();
        prop_assert!(approx_eq!(f64, total, 1.0, epsilon = 1e-9));
    }

    /// The descriptor has one group per speed of the longer side and fills
    /// the shorter side with unity.
    #[test]
    fn descriptor_covers_the_longer_side(
        heating in 1usize..6,
        cooling in 1usize..6
    ) {
        let heating_side = StagedSide::new(vec![StageBasis::RatedFlow(None); heating], None);
        let cooling_side = StagedSide::new(vec![StageBasis::RatedFlow(None); cooling], None);
        let descriptor = performance_descriptor(Some(&heating_side), Some(&cooling_side))
            .expect("descriptor");

        prop_assert_eq!(descriptor.flow_ratios.len(), heating.max(cooling));
        for ratio in &descriptor.flow_ratios[cooling..] {
            prop_assert_eq!(ratio.cooling, Some(Autosizable::Value(1.0)));
        }
        for ratio in &descriptor.flow_ratios[heating..] {
            prop_assert_eq!(ratio.heating, Some(Autosizable::Value(1.0)));
        }
    }
}
