//! # Translation Tier Tests (T0-T4)
//!
//! Whole-model runs through `ForwardTranslator`.
//!
//! ## Tiers
//! - T0: Emission (at most once, schema-valid)
//! - T1: Reference Cycles
//! - T2: Assembly Topology
//! - T3: Derived Descriptors
//! - T4: Failure Cascades and Stability

use float_cmp::approx_eq;
use plenum_core::document::ExtensibleGroup;
use plenum_core::model::{
    AirLoopHvacUnitarySystem, CoilCoolingDxMultiSpeed, CoilCoolingDxSingleSpeed,
    CoilHeatingDxMultiSpeed, CoilHeatingElectric, CoilHeatingGasMultiStage, Curve, DxCurves,
    DxMultiSpeedStage, FanComponentModel, FanOnOff, GasStage, HeatExchangerAirToAirSensibleAndLatent,
    HeatExchangerAssistedCoil, ScheduleConstant, Surface, ThermalZone, ZoneHvacPackagedTerminalAirConditioner,
};
use plenum_core::schema::fields::{
    air_loop_hvac_unitary_system, building_surface_detailed, coil_cooling_dx_single_speed,
    coil_heating_electric, fan_on_off, heat_exchanger_air_to_air_sensible_and_latent,
    unitary_system_performance_multispeed as perf,
};
use plenum_core::{
    Autosizable, BuiltinSchema, Document, FieldValue, ForwardTranslator, Handle, Model,
    ObjectKind, Record, RecordType, Session, Severity, Translation, TranslatorOptions, write_idf,
};

// =============================================================================
// FIXTURES
// =============================================================================

fn translate(model: &Model) -> Translation {
    ForwardTranslator::new(TranslatorOptions::default())
        .translate(model)
        .expect("translate")
}

fn record<'d>(document: &'d Document, record_type: RecordType, name: &str) -> &'d Record {
    document
        .find(record_type, name)
        .and_then(|r| document.record(r))
        .expect("record present")
}

fn curves(model: &mut Model, prefix: &str) -> DxCurves {
    let mut curve = |suffix: &str| {
        Some(model.add(
            format!("{prefix} {suffix}"),
            ObjectKind::CurveQuadratic(Curve::new(vec![1.0, 0.0, 0.0])),
        ))
    };
    DxCurves {
        capacity_function_of_temperature: curve("Cap-FT"),
        capacity_function_of_flow_fraction: curve("Cap-FF"),
        energy_input_ratio_function_of_temperature: curve("EIR-FT"),
        energy_input_ratio_function_of_flow_fraction: curve("EIR-FF"),
        part_load_fraction_correlation: curve("PLF"),
    }
}

fn single_speed_coil(model: &mut Model, name: &str) -> Handle {
    let curves = curves(model, name);
    model.add(
        name,
        ObjectKind::CoilCoolingDxSingleSpeed(CoilCoolingDxSingleSpeed {
            curves,
            ..CoilCoolingDxSingleSpeed::default()
        }),
    )
}

fn unitary(
    model: &mut Model,
    name: &str,
    build: impl FnOnce(&mut AirLoopHvacUnitarySystem),
) -> Handle {
    let inlet = model.add(format!("{name} Inlet"), ObjectKind::Node);
    let outlet = model.add(format!("{name} Outlet"), ObjectKind::Node);
    let mut system = AirLoopHvacUnitarySystem {
        inlet_node: Some(inlet),
        outlet_node: Some(outlet),
        ..AirLoopHvacUnitarySystem::default()
    };
    build(&mut system);
    model.add(name, ObjectKind::AirLoopHvacUnitarySystem(system))
}

fn square(z: f64) -> Vec<[f64; 3]> {
    vec![[0.0, 0.0, z], [1.0, 0.0, z], [1.0, 1.0, z], [0.0, 1.0, z]]
}

fn number(group: &ExtensibleGroup, index: usize) -> f64 {
    group
        .get(index)
        .and_then(FieldValue::as_number)
        .expect("numeric ratio")
}

// =============================================================================
// TIER T0: EMISSION
// =============================================================================

mod t0_emission {
    use super::*;

    /// T0.1: A shared reference is emitted once and both referrers name it.
    #[test]
    fn shared_reference_emitted_once() {
        let mut model = Model::new();
        let schedule = model.add(
            "Always On",
            ObjectKind::ScheduleConstant(ScheduleConstant {
                schedule_type_limits: None,
                value: 1.0,
            }),
        );
        for name in ["Fan A", "Fan B"] {
            model.add(
                name,
                ObjectKind::FanOnOff(FanOnOff {
                    availability_schedule: Some(schedule),
                    ..FanOnOff::default()
                }),
            );
        }

        let translation = translate(&model);
        let document = &translation.document;
        assert_eq!(document.records_of_type(RecordType::ScheduleConstant).count(), 1);
        for name in ["Fan A", "Fan B"] {
            assert_eq!(
                record(document, RecordType::FanOnOff, name).text(fan_on_off::AVAILABILITY_SCHEDULE_NAME),
                Some("Always On")
            );
        }
    }

    /// T0.2: Asking twice returns the same record without growing the document.
    #[test]
    fn repeated_request_returns_same_record() {
        let mut model = Model::new();
        let fan = model.add("Fan", ObjectKind::FanOnOff(FanOnOff::default()));
        let mut session = Session::new(&model, TranslatorOptions::default());

        let first = session.translate_and_map(fan).expect("first");
        let len = session.document().len();
        let second = session.translate_and_map(fan).expect("second");

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(session.document().len(), len);
    }

    /// T0.3: Every emitted record fits the built-in schema.
    #[test]
    fn every_record_validates() {
        let mut model = Model::new();
        let fan = model.add("Fan", ObjectKind::FanOnOff(FanOnOff::default()));
        let cooling = single_speed_coil(&mut model, "Cool");
        let heating = model.add(
            "Heat",
            ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
        );
        unitary(&mut model, "RTU", |s| {
            s.supply_fan = Some(fan);
            s.cooling_coil = Some(cooling);
            s.heating_coil = Some(heating);
        });

        let translation = translate(&model);
        assert!(!translation.has_errors());
        translation
            .document
            .validate(&BuiltinSchema)
            .expect("schema-valid document");
    }

    /// T0.4: The version record leads the document.
    #[test]
    fn version_record_comes_first() {
        let translation = translate(&Model::new());
        let first = translation.document.records().first().expect("version");
        assert_eq!(first.record_type(), RecordType::Version);
        assert_eq!(first.text(0), Some("24.1"));
    }
}

// =============================================================================
// TIER T1: REFERENCE CYCLES
// =============================================================================

mod t1_cycles {
    use super::*;

    /// T1.1: Paired surfaces name each other through early publication.
    #[test]
    fn paired_surfaces_name_each_other() {
        let mut model = Model::new();
        let zone = model.add("Zone", ObjectKind::ThermalZone(ThermalZone::default()));
        let a = model.add(
            "Ceiling",
            ObjectKind::Surface(Surface {
                surface_type: "Ceiling".to_string(),
                zone: Some(zone),
                outside_boundary_condition: "Surface".to_string(),
                vertices: square(3.0),
                ..Surface::default()
            }),
        );
        let b = model.add(
            "Floor Above",
            ObjectKind::Surface(Surface {
                surface_type: "Floor".to_string(),
                zone: Some(zone),
                outside_boundary_condition: "Surface".to_string(),
                adjacent_surface: Some(a),
                vertices: square(3.0),
                ..Surface::default()
            }),
        );
        if let Some(ObjectKind::Surface(s)) = model.get_mut(a).map(|o| &mut o.kind) {
            s.adjacent_surface = Some(b);
        }

        let translation = translate(&model);
        let document = &translation.document;
        use building_surface_detailed as f;
        assert_eq!(
            record(document, RecordType::BuildingSurfaceDetailed, "Ceiling")
                .text(f::OUTSIDE_BOUNDARY_CONDITION_OBJECT),
            Some("Floor Above")
        );
        assert_eq!(
            record(document, RecordType::BuildingSurfaceDetailed, "Floor Above")
                .text(f::OUTSIDE_BOUNDARY_CONDITION_OBJECT),
            Some("Ceiling")
        );
        assert_eq!(document.records_of_type(RecordType::BuildingSurfaceDetailed).count(), 2);
    }

    /// T1.2: Coil systems wrapping each other terminate with both absent.
    #[test]
    fn mutually_wrapping_coil_systems_terminate() {
        let mut model = Model::new();
        let hx = model.add(
            "HX",
            ObjectKind::HeatExchangerAirToAirSensibleAndLatent(
                HeatExchangerAirToAirSensibleAndLatent::default(),
            ),
        );
        let a = model.add(
            "System A",
            ObjectKind::CoilSystemCoolingDxHeatExchangerAssisted(HeatExchangerAssistedCoil::default()),
        );
        let b = model.add(
            "System B",
            ObjectKind::CoilSystemCoolingDxHeatExchangerAssisted(HeatExchangerAssistedCoil {
                heat_exchanger: Some(hx),
                cooling_coil: Some(a),
            }),
        );
        if let Some(ObjectKind::CoilSystemCoolingDxHeatExchangerAssisted(s)) =
            model.get_mut(a).map(|o| &mut o.kind)
        {
            s.heat_exchanger = Some(hx);
            s.cooling_coil = Some(b);
        }

        let translation = translate(&model);
        let document = &translation.document;
        assert!(document
            .find(RecordType::CoilSystemCoolingDxHeatExchangerAssisted, "System A")
            .is_none());
        assert!(document
            .find(RecordType::CoilSystemCoolingDxHeatExchangerAssisted, "System B")
            .is_none());
        assert!(translation.has_errors());
    }
}

// =============================================================================
// TIER T2: ASSEMBLY TOPOLOGY
// =============================================================================

mod t2_topology {
    use super::*;

    /// T2.1: Blow-through fan, cooling and heating share two named nodes.
    #[test]
    fn blow_through_names_intermediate_nodes() {
        let mut model = Model::new();
        let fan = model.add("Fan", ObjectKind::FanOnOff(FanOnOff::default()));
        let cooling = single_speed_coil(&mut model, "Cool");
        let heating = model.add(
            "Heat",
            ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
        );
        unitary(&mut model, "RTU", |s| {
            s.supply_fan = Some(fan);
            s.cooling_coil = Some(cooling);
            s.heating_coil = Some(heating);
            s.fan_placement = Some("BlowThrough".to_string());
        });

        let translation = translate(&model);
        let document = &translation.document;
        let fan = record(document, RecordType::FanOnOff, "Fan");
        assert_eq!(fan.text(fan_on_off::AIR_INLET_NODE_NAME), Some("RTU Inlet"));
        assert_eq!(fan.text(fan_on_off::AIR_OUTLET_NODE_NAME), Some("RTU Fan - Cooling Coil Node"));

        let cooling = record(document, RecordType::CoilCoolingDxSingleSpeed, "Cool");
        use coil_cooling_dx_single_speed as cc;
        assert_eq!(cooling.text(cc::AIR_INLET_NODE_NAME), Some("RTU Fan - Cooling Coil Node"));
        assert_eq!(
            cooling.text(cc::AIR_OUTLET_NODE_NAME),
            Some("RTU Cooling Coil - Heating Coil Node")
        );

        let heating = record(document, RecordType::CoilHeatingElectric, "Heat");
        assert_eq!(
            heating.text(coil_heating_electric::AIR_INLET_NODE_NAME),
            Some("RTU Cooling Coil - Heating Coil Node")
        );
        assert_eq!(heating.text(coil_heating_electric::AIR_OUTLET_NODE_NAME), Some("RTU Outlet"));
    }

    /// T2.2: A lone heating coil takes both assembly connections.
    #[test]
    fn heating_only_takes_assembly_nodes() {
        let mut model = Model::new();
        let heating = model.add(
            "Heat",
            ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
        );
        unitary(&mut model, "Heater", |s| s.heating_coil = Some(heating));

        let translation = translate(&model);
        let heating = record(&translation.document, RecordType::CoilHeatingElectric, "Heat");
        assert_eq!(heating.text(coil_heating_electric::AIR_INLET_NODE_NAME), Some("Heater Inlet"));
        assert_eq!(heating.text(coil_heating_electric::AIR_OUTLET_NODE_NAME), Some("Heater Outlet"));

        let system = record(&translation.document, RecordType::AirLoopHvacUnitarySystem, "Heater");
        use air_loop_hvac_unitary_system as f;
        assert_eq!(system.text(f::COOLING_SUPPLY_AIR_FLOW_RATE_METHOD), Some("None"));
        assert_eq!(system.text(f::FAN_PLACEMENT), None);
    }

    /// T2.3: A heat-exchanger-assisted coil puts the outer connections on
    /// its exchanger and names the loop around the wrapped coil.
    #[test]
    fn coil_system_wires_through_its_exchanger() {
        let mut model = Model::new();
        let fan = model.add("Fan", ObjectKind::FanOnOff(FanOnOff::default()));
        let hx = model.add(
            "HX",
            ObjectKind::HeatExchangerAirToAirSensibleAndLatent(
                HeatExchangerAirToAirSensibleAndLatent::default(),
            ),
        );
        let coil = single_speed_coil(&mut model, "Wrapped");
        let system = model.add(
            "Assisted",
            ObjectKind::CoilSystemCoolingDxHeatExchangerAssisted(HeatExchangerAssistedCoil {
                heat_exchanger: Some(hx),
                cooling_coil: Some(coil),
            }),
        );
        unitary(&mut model, "DOAS", |s| {
            s.supply_fan = Some(fan);
            s.cooling_coil = Some(system);
        });

        let translation = translate(&model);
        assert!(!translation.has_errors());
        let document = &translation.document;

        let hx = record(document, RecordType::HeatExchangerAirToAirSensibleAndLatent, "HX");
        use heat_exchanger_air_to_air_sensible_and_latent as h;
        assert_eq!(hx.text(h::SUPPLY_AIR_INLET_NODE_NAME), Some("DOAS Inlet"));
        assert_eq!(hx.text(h::EXHAUST_AIR_OUTLET_NODE_NAME), Some("DOAS Cooling Coil - Fan Node"));
        assert_eq!(
            hx.text(h::SUPPLY_AIR_OUTLET_NODE_NAME),
            Some("Assisted Heat Exchanger - Cooling Coil Node")
        );

        let wrapped = record(document, RecordType::CoilCoolingDxSingleSpeed, "Wrapped");
        use coil_cooling_dx_single_speed as cc;
        assert_eq!(
            wrapped.text(cc::AIR_INLET_NODE_NAME),
            Some("Assisted Heat Exchanger - Cooling Coil Node")
        );
        assert_eq!(
            wrapped.text(cc::AIR_OUTLET_NODE_NAME),
            hx.text(h::EXHAUST_AIR_INLET_NODE_NAME)
        );
    }

    /// T2.4: A coil in the wrong role is reported and skipped.
    #[test]
    fn unsupported_role_warns() {
        let mut model = Model::new();
        let fan = model.add("Fan", ObjectKind::FanOnOff(FanOnOff::default()));
        let cooling = single_speed_coil(&mut model, "Cool");
        unitary(&mut model, "RTU", |s| {
            s.supply_fan = Some(fan);
            s.supplemental_heating_coil = Some(cooling);
        });

        let translation = translate(&model);
        assert!(!translation.has_errors());
        assert_eq!(translation.diagnostics_at_least(Severity::Warn).count(), 1);
        let fan = record(&translation.document, RecordType::FanOnOff, "Fan");
        assert_eq!(fan.text(fan_on_off::AIR_INLET_NODE_NAME), Some("RTU Inlet"));
        assert_eq!(fan.text(fan_on_off::AIR_OUTLET_NODE_NAME), Some("RTU Outlet"));
    }
}

// =============================================================================
// TIER T3: DERIVED DESCRIPTORS
// =============================================================================

mod t3_derived {
    use super::*;

    fn dx_stages(model: &mut Model, prefix: &str, count: usize, heating: bool) -> Vec<Handle> {
        (0..count)
            .map(|i| {
                let curves = curves(model, &format!("{prefix} {i}"));
                let stage = DxMultiSpeedStage {
                    curves,
                    ..DxMultiSpeedStage::default()
                };
                let kind = if heating {
                    ObjectKind::CoilHeatingDxMultiSpeedStageData(stage)
                } else {
                    ObjectKind::CoilCoolingDxMultiSpeedStageData(stage)
                };
                model.add_unnamed(kind)
            })
            .collect()
    }

    /// T3.1: Three heating speeds against one cooling speed fill with unity.
    #[test]
    fn ragged_sides_fill_with_unity() {
        let mut model = Model::new();
        let heating_stages = dx_stages(&mut model, "H", 3, true);
        let cooling_stages = dx_stages(&mut model, "C", 1, false);
        let heating = model.add(
            "Heat Pump Heat",
            ObjectKind::CoilHeatingDxMultiSpeed(CoilHeatingDxMultiSpeed {
                stages: heating_stages,
                ..CoilHeatingDxMultiSpeed::default()
            }),
        );
        let cooling = model.add(
            "Heat Pump Cool",
            ObjectKind::CoilCoolingDxMultiSpeed(CoilCoolingDxMultiSpeed {
                stages: cooling_stages,
                ..CoilCoolingDxMultiSpeed::default()
            }),
        );
        unitary(&mut model, "HP", |s| {
            s.heating_coil = Some(heating);
            s.cooling_coil = Some(cooling);
        });

        let translation = translate(&model);
        let descriptor = record(
            &translation.document,
            RecordType::UnitarySystemPerformanceMultispeed,
            "HP Unitary System Performance",
        );
        assert_eq!(descriptor.get(perf::NUMBER_OF_SPEEDS_FOR_HEATING), Some(&FieldValue::Integer(3)));
        assert_eq!(descriptor.get(perf::NUMBER_OF_SPEEDS_FOR_COOLING), Some(&FieldValue::Integer(1)));
        let groups = descriptor.groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups[0].get(perf::group::COOLING_SPEED_SUPPLY_AIR_FLOW_RATIO),
            Some(&FieldValue::Autosize)
        );
        assert_eq!(
            groups[2].get(perf::group::COOLING_SPEED_SUPPLY_AIR_FLOW_RATIO),
            Some(&FieldValue::Number(1.0))
        );
    }

    /// T3.2: Gas stages fall back to their share of the total capacity.
    #[test]
    fn capacity_shares_become_ratios() {
        let mut model = Model::new();
        let stages = [10_000.0, 20_000.0, 30_000.0]
            .into_iter()
            .map(|capacity| {
                model.add_unnamed(ObjectKind::CoilHeatingGasMultiStageStageData(GasStage {
                    gas_burner_efficiency: 0.8,
                    nominal_capacity: Some(Autosizable::Value(capacity)),
                    parasitic_electric_load: None,
                }))
            })
            .collect();
        let furnace = model.add(
            "Furnace",
            ObjectKind::CoilHeatingGasMultiStage(CoilHeatingGasMultiStage {
                stages,
                ..CoilHeatingGasMultiStage::default()
            }),
        );
        unitary(&mut model, "Furnace Unit", |s| s.heating_coil = Some(furnace));

        let translation = translate(&model);
        let descriptor = record(
            &translation.document,
            RecordType::UnitarySystemPerformanceMultispeed,
            "Furnace Unit Unitary System Performance",
        );
        let groups = descriptor.groups();
        let heating = perf::group::HEATING_SPEED_SUPPLY_AIR_FLOW_RATIO;
        assert!(approx_eq!(f64, number(&groups[0], heating), 1.0 / 6.0, ulps = 4));
        assert!(approx_eq!(f64, number(&groups[1], heating), 1.0 / 3.0, ulps = 4));
        assert!(approx_eq!(f64, number(&groups[2], heating), 0.5, ulps = 4));

        let system = record(&translation.document, RecordType::AirLoopHvacUnitarySystem, "Furnace Unit");
        assert_eq!(
            system.text(air_loop_hvac_unitary_system::DESIGN_SPECIFICATION_MULTISPEED_OBJECT_TYPE),
            Some("UnitarySystemPerformance:Multispeed")
        );
    }

    /// T3.3: Single-speed coils get no descriptor.
    #[test]
    fn unstaged_system_gets_no_descriptor() {
        let mut model = Model::new();
        let cooling = single_speed_coil(&mut model, "Cool");
        unitary(&mut model, "RTU", |s| s.cooling_coil = Some(cooling));

        let translation = translate(&model);
        assert_eq!(
            translation
                .document
                .records_of_type(RecordType::UnitarySystemPerformanceMultispeed)
                .count(),
            0
        );
    }
}

// =============================================================================
// TIER T4: FAILURE CASCADES AND STABILITY
// =============================================================================

mod t4_cascades {
    use super::*;

    /// A zone served by a packaged terminal unit whose fan lacks its curves.
    fn zone_with_broken_ptac() -> Model {
        let mut model = Model::new();
        let exhaust = model.add("Zone Exhaust", ObjectKind::Node);
        let inlet = model.add("Zone Inlet", ObjectKind::Node);
        let fan = model.add(
            "Broken Fan",
            ObjectKind::FanComponentModel(FanComponentModel::default()),
        );
        let heating = model.add(
            "PTAC Heat",
            ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
        );
        let cooling = single_speed_coil(&mut model, "PTAC Cool");
        let ptac = model.add(
            "PTAC",
            ObjectKind::ZoneHvacPackagedTerminalAirConditioner(
                ZoneHvacPackagedTerminalAirConditioner {
                    inlet_node: Some(exhaust),
                    outlet_node: Some(inlet),
                    supply_air_fan: Some(fan),
                    heating_coil: Some(heating),
                    cooling_coil: Some(cooling),
                    ..ZoneHvacPackagedTerminalAirConditioner::default()
                },
            ),
        );
        model.add(
            "Office",
            ObjectKind::ThermalZone(ThermalZone {
                inlet_nodes: vec![inlet],
                exhaust_nodes: vec![exhaust],
                equipment: vec![ptac],
                ..ThermalZone::default()
            }),
        );
        model
    }

    /// T4.1: A failed required fan removes the unit and its list entry.
    #[test]
    fn required_reference_failure_cascades() {
        let translation = translate(&zone_with_broken_ptac());
        let document = &translation.document;

        assert!(document
            .find(RecordType::ZoneHvacPackagedTerminalAirConditioner, "PTAC")
            .is_none());
        assert!(document.find(RecordType::OutdoorAirMixer, "PTAC OA Mixer").is_none());
        assert!(document
            .records_of_type(RecordType::ZoneHvacEquipmentList)
            .all(|list| list.groups().is_empty()));
        assert!(document.find(RecordType::Zone, "Office").is_some());
        assert!(translation.has_errors());
        assert!(translation
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warn && d.object_name == "Office"));
    }

    /// T4.2: A dropped unit does not hold on to its components.
    #[test]
    fn dropped_unit_frees_its_components() {
        let mut model = zone_with_broken_ptac();
        let cooling = model
            .find_by_name("PTAC Cool")
            .map(|o| o.handle)
            .expect("cooling coil");
        unitary(&mut model, "RTU", |s| s.cooling_coil = Some(cooling));

        let translation = translate(&model);
        let document = &translation.document;

        assert!(document
            .find(RecordType::ZoneHvacPackagedTerminalAirConditioner, "PTAC")
            .is_none());
        let rtu = record(document, RecordType::AirLoopHvacUnitarySystem, "RTU");
        assert_eq!(
            rtu.text(air_loop_hvac_unitary_system::COOLING_COIL_NAME),
            Some("PTAC Cool")
        );
        assert!(!translation
            .diagnostics
            .iter()
            .any(|d| d.object_name == "RTU" && d.severity == Severity::Error));
    }

    /// T4.3: Two cold runs over one model produce identical text.
    #[test]
    fn repeated_runs_are_identical() {
        let mut model = zone_with_broken_ptac();
        let heat = model.add_unnamed(ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()));
        unitary(&mut model, "RTU", |s| s.heating_coil = Some(heat));

        let first = translate(&model);
        let second = translate(&model);
        assert_eq!(first.document, second.document);
        assert_eq!(
            write_idf(&first.document, &BuiltinSchema, true),
            write_idf(&second.document, &BuiltinSchema, true)
        );
        assert_eq!(first.diagnostics, second.diagnostics);
    }
}
