//! # Field Index Tables
//!
//! One module per record type. Each module exports a `usize` constant per
//! fixed field, the ordered `FIELDS` name table, and a `group` submodule
//! describing the repeating extensible group (empty when the type has none).
//!
//! Indices are derived from declaration order, so the constant for a field
//! and its position in `FIELDS` can never drift apart.

macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $module:ident { $($field:ident = $label:literal),+ $(,)? }
    ) => {
        record_fields!(@emit $(#[$meta])* $module { $($field = $label),+ } groups {});
    };
    (
        $(#[$meta:meta])*
        $module:ident { $($field:ident = $label:literal),+ $(,)? }
        groups { $($group_field:ident = $group_label:literal),+ $(,)? }
    ) => {
        record_fields!(@emit $(#[$meta])* $module { $($field = $label),+ } groups { $($group_field = $group_label),+ });
    };
    (
        @emit $(#[$meta:meta])*
        $module:ident { $($field:ident = $label:literal),+ }
        groups { $($group_field:ident = $group_label:literal),* }
    ) => {
        $(#[$meta])*
        pub mod $module {
            #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
            enum Field {
                $($field),+
            }

            $(pub const $field: usize = Field::$field as usize;)+

            /// Fixed field names in schema order.
            pub const FIELDS: &[&str] = &[$($label),+];

            /// The repeating extensible group.
            pub mod group {
                #[allow(non_camel_case_types, clippy::upper_case_acronyms, dead_code)]
                enum Field {
                    $($group_field),*
                }

                $(pub const $group_field: usize = Field::$group_field as usize;)*

                /// Sub-field names in group order.
                pub const FIELDS: &[&str] = &[$($group_label),*];
            }
        }
    };
}

// =============================================================================
// SIMULATION CONTROL
// =============================================================================

record_fields! {
    version { VERSION_IDENTIFIER = "Version Identifier" }
}

// =============================================================================
// SCHEDULES & CURVES
// =============================================================================

record_fields! {
    schedule_type_limits {
        NAME = "Name",
        LOWER_LIMIT_VALUE = "Lower Limit Value",
        UPPER_LIMIT_VALUE = "Upper Limit Value",
        NUMERIC_TYPE = "Numeric Type",
        UNIT_TYPE = "Unit Type",
    }
}

record_fields! {
    schedule_constant {
        NAME = "Name",
        SCHEDULE_TYPE_LIMITS_NAME = "Schedule Type Limits Name",
        HOURLY_VALUE = "Hourly Value",
    }
}

record_fields! {
    curve_quadratic {
        NAME = "Name",
        COEFFICIENT1_CONSTANT = "Coefficient1 Constant",
        COEFFICIENT2_X = "Coefficient2 x",
        COEFFICIENT3_X2 = "Coefficient3 x**2",
        MINIMUM_VALUE_OF_X = "Minimum Value of x",
        MAXIMUM_VALUE_OF_X = "Maximum Value of x",
        MINIMUM_CURVE_OUTPUT = "Minimum Curve Output",
        MAXIMUM_CURVE_OUTPUT = "Maximum Curve Output",
    }
}

record_fields! {
    curve_cubic {
        NAME = "Name",
        COEFFICIENT1_CONSTANT = "Coefficient1 Constant",
        COEFFICIENT2_X = "Coefficient2 x",
        COEFFICIENT3_X2 = "Coefficient3 x**2",
        COEFFICIENT4_X3 = "Coefficient4 x**3",
        MINIMUM_VALUE_OF_X = "Minimum Value of x",
        MAXIMUM_VALUE_OF_X = "Maximum Value of x",
        MINIMUM_CURVE_OUTPUT = "Minimum Curve Output",
        MAXIMUM_CURVE_OUTPUT = "Maximum Curve Output",
    }
}

record_fields! {
    curve_biquadratic {
        NAME = "Name",
        COEFFICIENT1_CONSTANT = "Coefficient1 Constant",
        COEFFICIENT2_X = "Coefficient2 x",
        COEFFICIENT3_X2 = "Coefficient3 x**2",
        COEFFICIENT4_Y = "Coefficient4 y",
        COEFFICIENT5_Y2 = "Coefficient5 y**2",
        COEFFICIENT6_XY = "Coefficient6 x*y",
        MINIMUM_VALUE_OF_X = "Minimum Value of x",
        MAXIMUM_VALUE_OF_X = "Maximum Value of x",
        MINIMUM_VALUE_OF_Y = "Minimum Value of y",
        MAXIMUM_VALUE_OF_Y = "Maximum Value of y",
        MINIMUM_CURVE_OUTPUT = "Minimum Curve Output",
        MAXIMUM_CURVE_OUTPUT = "Maximum Curve Output",
    }
}

// =============================================================================
// ENVELOPE & ZONES
// =============================================================================

record_fields! {
    material_no_mass {
        NAME = "Name",
        ROUGHNESS = "Roughness",
        THERMAL_RESISTANCE = "Thermal Resistance",
        THERMAL_ABSORPTANCE = "Thermal Absorptance",
        SOLAR_ABSORPTANCE = "Solar Absorptance",
        VISIBLE_ABSORPTANCE = "Visible Absorptance",
    }
}

record_fields! {
    construction { NAME = "Name" }
    groups { LAYER = "Layer" }
}

record_fields! {
    zone {
        NAME = "Name",
        DIRECTION_OF_RELATIVE_NORTH = "Direction of Relative North",
        X_ORIGIN = "X Origin",
        Y_ORIGIN = "Y Origin",
        Z_ORIGIN = "Z Origin",
        TYPE = "Type",
        MULTIPLIER = "Multiplier",
        CEILING_HEIGHT = "Ceiling Height",
        VOLUME = "Volume",
        FLOOR_AREA = "Floor Area",
        ZONE_INSIDE_CONVECTION_ALGORITHM = "Zone Inside Convection Algorithm",
        ZONE_OUTSIDE_CONVECTION_ALGORITHM = "Zone Outside Convection Algorithm",
        PART_OF_TOTAL_FLOOR_AREA = "Part of Total Floor Area",
    }
}

record_fields! {
    building_surface_detailed {
        NAME = "Name",
        SURFACE_TYPE = "Surface Type",
        CONSTRUCTION_NAME = "Construction Name",
        ZONE_NAME = "Zone Name",
        SPACE_NAME = "Space Name",
        OUTSIDE_BOUNDARY_CONDITION = "Outside Boundary Condition",
        OUTSIDE_BOUNDARY_CONDITION_OBJECT = "Outside Boundary Condition Object",
        SUN_EXPOSURE = "Sun Exposure",
        WIND_EXPOSURE = "Wind Exposure",
        VIEW_FACTOR_TO_GROUND = "View Factor to Ground",
        NUMBER_OF_VERTICES = "Number of Vertices",
    }
    groups {
        VERTEX_X = "Vertex X-coordinate",
        VERTEX_Y = "Vertex Y-coordinate",
        VERTEX_Z = "Vertex Z-coordinate",
    }
}

record_fields! {
    node_list { NAME = "Name" }
    groups { NODE_NAME = "Node Name" }
}

record_fields! {
    zone_hvac_equipment_list {
        NAME = "Name",
        LOAD_DISTRIBUTION_SCHEME = "Load Distribution Scheme",
    }
    groups {
        ZONE_EQUIPMENT_OBJECT_TYPE = "Zone Equipment Object Type",
        ZONE_EQUIPMENT_NAME = "Zone Equipment Name",
        ZONE_EQUIPMENT_COOLING_SEQUENCE = "Zone Equipment Cooling Sequence",
        ZONE_EQUIPMENT_HEATING_OR_NO_LOAD_SEQUENCE = "Zone Equipment Heating or No-Load Sequence",
    }
}

record_fields! {
    zone_hvac_equipment_connections {
        ZONE_NAME = "Zone Name",
        ZONE_CONDITIONING_EQUIPMENT_LIST_NAME = "Zone Conditioning Equipment List Name",
        ZONE_AIR_INLET_NODE_OR_NODE_LIST_NAME = "Zone Air Inlet Node or NodeList Name",
        ZONE_AIR_EXHAUST_NODE_OR_NODE_LIST_NAME = "Zone Air Exhaust Node or NodeList Name",
        ZONE_AIR_NODE_NAME = "Zone Air Node Name",
        ZONE_RETURN_AIR_NODE_OR_NODE_LIST_NAME = "Zone Return Air Node or NodeList Name",
    }
}

// =============================================================================
// FANS
// =============================================================================

record_fields! {
    fan_constant_volume {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        FAN_TOTAL_EFFICIENCY = "Fan Total Efficiency",
        PRESSURE_RISE = "Pressure Rise",
        MAXIMUM_FLOW_RATE = "Maximum Flow Rate",
        MOTOR_EFFICIENCY = "Motor Efficiency",
        MOTOR_IN_AIRSTREAM_FRACTION = "Motor In Airstream Fraction",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        END_USE_SUBCATEGORY = "End-Use Subcategory",
    }
}

record_fields! {
    fan_variable_volume {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        FAN_TOTAL_EFFICIENCY = "Fan Total Efficiency",
        PRESSURE_RISE = "Pressure Rise",
        MAXIMUM_FLOW_RATE = "Maximum Flow Rate",
        FAN_POWER_MINIMUM_FLOW_RATE_INPUT_METHOD = "Fan Power Minimum Flow Rate Input Method",
        FAN_POWER_MINIMUM_FLOW_FRACTION = "Fan Power Minimum Flow Fraction",
        FAN_POWER_MINIMUM_AIR_FLOW_RATE = "Fan Power Minimum Air Flow Rate",
        MOTOR_EFFICIENCY = "Motor Efficiency",
        MOTOR_IN_AIRSTREAM_FRACTION = "Motor In Airstream Fraction",
        FAN_POWER_COEFFICIENT_1 = "Fan Power Coefficient 1",
        FAN_POWER_COEFFICIENT_2 = "Fan Power Coefficient 2",
        FAN_POWER_COEFFICIENT_3 = "Fan Power Coefficient 3",
        FAN_POWER_COEFFICIENT_4 = "Fan Power Coefficient 4",
        FAN_POWER_COEFFICIENT_5 = "Fan Power Coefficient 5",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        END_USE_SUBCATEGORY = "End-Use Subcategory",
    }
}

record_fields! {
    fan_on_off {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        FAN_TOTAL_EFFICIENCY = "Fan Total Efficiency",
        PRESSURE_RISE = "Pressure Rise",
        MAXIMUM_FLOW_RATE = "Maximum Flow Rate",
        MOTOR_EFFICIENCY = "Motor Efficiency",
        MOTOR_IN_AIRSTREAM_FRACTION = "Motor In Airstream Fraction",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        FAN_POWER_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME = "Fan Power Ratio Function of Speed Ratio Curve Name",
        FAN_EFFICIENCY_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME = "Fan Efficiency Ratio Function of Speed Ratio Curve Name",
        END_USE_SUBCATEGORY = "End-Use Subcategory",
    }
}

record_fields! {
    fan_system_model {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        DESIGN_MAXIMUM_AIR_FLOW_RATE = "Design Maximum Air Flow Rate",
        SPEED_CONTROL_METHOD = "Speed Control Method",
        ELECTRIC_POWER_MINIMUM_FLOW_RATE_FRACTION = "Electric Power Minimum Flow Rate Fraction",
        DESIGN_PRESSURE_RISE = "Design Pressure Rise",
        MOTOR_EFFICIENCY = "Motor Efficiency",
        MOTOR_IN_AIR_STREAM_FRACTION = "Motor In Air Stream Fraction",
        DESIGN_ELECTRIC_POWER_CONSUMPTION = "Design Electric Power Consumption",
        DESIGN_POWER_SIZING_METHOD = "Design Power Sizing Method",
        FAN_TOTAL_EFFICIENCY = "Fan Total Efficiency",
        ELECTRIC_POWER_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Electric Power Function of Flow Fraction Curve Name",
        END_USE_SUBCATEGORY = "End-Use Subcategory",
        NUMBER_OF_SPEEDS = "Number of Speeds",
    }
    groups {
        SPEED_FLOW_FRACTION = "Speed Flow Fraction",
        SPEED_ELECTRIC_POWER_FRACTION = "Speed Electric Power Fraction",
    }
}

record_fields! {
    fan_component_model {
        NAME = "Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        MAXIMUM_FLOW_RATE = "Maximum Flow Rate",
        MINIMUM_FLOW_RATE = "Minimum Flow Rate",
        FAN_SIZING_FACTOR = "Fan Sizing Factor",
        FAN_WHEEL_DIAMETER = "Fan Wheel Diameter",
        FAN_OUTLET_AREA = "Fan Outlet Area",
        MAXIMUM_FAN_STATIC_EFFICIENCY = "Maximum Fan Static Efficiency",
        EULER_NUMBER_AT_MAXIMUM_FAN_STATIC_EFFICIENCY = "Euler Number at Maximum Fan Static Efficiency",
        MAXIMUM_DIMENSIONLESS_FAN_AIRFLOW = "Maximum Dimensionless Fan Airflow",
        MOTOR_FAN_PULLEY_RATIO = "Motor Fan Pulley Ratio",
        BELT_MAXIMUM_TORQUE = "Belt Maximum Torque",
        MOTOR_MAXIMUM_SPEED = "Motor Maximum Speed",
        MAXIMUM_MOTOR_OUTPUT_POWER = "Maximum Motor Output Power",
        MOTOR_IN_AIRSTREAM_FRACTION = "Motor In Airstream Fraction",
        VFD_EFFICIENCY_TYPE = "VFD Efficiency Type",
        FAN_PRESSURE_RISE_CURVE_NAME = "Fan Pressure Rise Curve Name",
        DUCT_STATIC_PRESSURE_RESET_CURVE_NAME = "Duct Static Pressure Reset Curve Name",
        END_USE_SUBCATEGORY = "End-Use Subcategory",
    }
}

// =============================================================================
// COOLING COILS
// =============================================================================

record_fields! {
    coil_cooling_dx_single_speed {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        GROSS_RATED_TOTAL_COOLING_CAPACITY = "Gross Rated Total Cooling Capacity",
        GROSS_RATED_SENSIBLE_HEAT_RATIO = "Gross Rated Sensible Heat Ratio",
        GROSS_RATED_COOLING_COP = "Gross Rated Cooling COP",
        RATED_AIR_FLOW_RATE = "Rated Air Flow Rate",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Total Cooling Capacity Function of Temperature Curve Name",
        TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Total Cooling Capacity Function of Flow Fraction Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Energy Input Ratio Function of Temperature Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Energy Input Ratio Function of Flow Fraction Curve Name",
        PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Part Load Fraction Correlation Curve Name",
        MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION = "Minimum Outdoor Dry-Bulb Temperature for Compressor Operation",
        CONDENSER_TYPE = "Condenser Type",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
    }
}

record_fields! {
    coil_cooling_dx_single_speed_thermal_storage {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        OPERATING_MODE_CONTROL_METHOD = "Operating Mode Control Method",
        OPERATION_MODE_CONTROL_SCHEDULE_NAME = "Operation Mode Control Schedule Name",
        STORAGE_TYPE = "Storage Type",
        FLUID_STORAGE_VOLUME = "Fluid Storage Volume",
        ICE_STORAGE_CAPACITY = "Ice Storage Capacity",
        STORAGE_CAPACITY_SIZING_FACTOR = "Storage Capacity Sizing Factor",
        STORAGE_TANK_AMBIENT_TEMPERATURE_NODE_NAME = "Storage Tank Ambient Temperature Node Name",
        STORAGE_TANK_TO_AMBIENT_U_VALUE_TIMES_AREA_HEAT_TRANSFER_COEFFICIENT = "Storage Tank to Ambient U-value Times Area Heat Transfer Coefficient",
        RATED_EVAPORATOR_AIR_FLOW_RATE = "Rated Evaporator Air Flow Rate",
        EVAPORATOR_AIR_INLET_NODE_NAME = "Evaporator Air Inlet Node Name",
        EVAPORATOR_AIR_OUTLET_NODE_NAME = "Evaporator Air Outlet Node Name",
        COOLING_ONLY_MODE_AVAILABLE = "Cooling Only Mode Available",
        COOLING_ONLY_MODE_RATED_TOTAL_EVAPORATOR_COOLING_CAPACITY = "Cooling Only Mode Rated Total Evaporator Cooling Capacity",
        COOLING_ONLY_MODE_RATED_SENSIBLE_HEAT_RATIO = "Cooling Only Mode Rated Sensible Heat Ratio",
        COOLING_ONLY_MODE_RATED_COP = "Cooling Only Mode Rated COP",
        COOLING_ONLY_MODE_TOTAL_EVAPORATOR_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Cooling Only Mode Total Evaporator Cooling Capacity Function of Temperature Curve Name",
        COOLING_ONLY_MODE_TOTAL_EVAPORATOR_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Cooling Only Mode Total Evaporator Cooling Capacity Function of Flow Fraction Curve Name",
        COOLING_ONLY_MODE_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Cooling Only Mode Energy Input Ratio Function of Temperature Curve Name",
        COOLING_ONLY_MODE_ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Cooling Only Mode Energy Input Ratio Function of Flow Fraction Curve Name",
        COOLING_ONLY_MODE_PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Cooling Only Mode Part Load Fraction Correlation Curve Name",
        CONDENSER_AIR_INLET_NODE_NAME = "Condenser Air Inlet Node Name",
        CONDENSER_AIR_OUTLET_NODE_NAME = "Condenser Air Outlet Node Name",
        CONDENSER_DESIGN_AIR_FLOW_RATE = "Condenser Design Air Flow Rate",
        CONDENSER_TYPE = "Condenser Type",
    }
}

record_fields! {
    coil_cooling_dx_two_speed {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        HIGH_SPEED_GROSS_RATED_TOTAL_COOLING_CAPACITY = "High Speed Gross Rated Total Cooling Capacity",
        HIGH_SPEED_RATED_SENSIBLE_HEAT_RATIO = "High Speed Rated Sensible Heat Ratio",
        HIGH_SPEED_GROSS_RATED_COOLING_COP = "High Speed Gross Rated Cooling COP",
        HIGH_SPEED_RATED_AIR_FLOW_RATE = "High Speed Rated Air Flow Rate",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Total Cooling Capacity Function of Temperature Curve Name",
        TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Total Cooling Capacity Function of Flow Fraction Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Energy Input Ratio Function of Temperature Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Energy Input Ratio Function of Flow Fraction Curve Name",
        PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Part Load Fraction Correlation Curve Name",
        LOW_SPEED_GROSS_RATED_TOTAL_COOLING_CAPACITY = "Low Speed Gross Rated Total Cooling Capacity",
        LOW_SPEED_GROSS_RATED_SENSIBLE_HEAT_RATIO = "Low Speed Gross Rated Sensible Heat Ratio",
        LOW_SPEED_GROSS_RATED_COOLING_COP = "Low Speed Gross Rated Cooling COP",
        LOW_SPEED_RATED_AIR_FLOW_RATE = "Low Speed Rated Air Flow Rate",
        LOW_SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Low Speed Total Cooling Capacity Function of Temperature Curve Name",
        LOW_SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Low Speed Energy Input Ratio Function of Temperature Curve Name",
        CONDENSER_TYPE = "Condenser Type",
    }
}

record_fields! {
    coil_cooling_dx_multi_speed {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        CONDENSER_TYPE = "Condenser Type",
        MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION = "Minimum Outdoor Dry-Bulb Temperature for Compressor Operation",
        APPLY_PART_LOAD_FRACTION_TO_SPEEDS_GREATER_THAN_1 = "Apply Part Load Fraction to Speeds Greater than 1",
        APPLY_LATENT_DEGRADATION_TO_SPEEDS_GREATER_THAN_1 = "Apply Latent Degradation to Speeds Greater than 1",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
        FUEL_TYPE = "Fuel Type",
        NUMBER_OF_SPEEDS = "Number of Speeds",
    }
    groups {
        SPEED_GROSS_RATED_TOTAL_COOLING_CAPACITY = "Speed Gross Rated Total Cooling Capacity",
        SPEED_GROSS_RATED_SENSIBLE_HEAT_RATIO = "Speed Gross Rated Sensible Heat Ratio",
        SPEED_GROSS_RATED_COOLING_COP = "Speed Gross Rated Cooling COP",
        SPEED_RATED_AIR_FLOW_RATE = "Speed Rated Air Flow Rate",
        SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Total Cooling Capacity Function of Temperature Curve Name",
        SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Speed Total Cooling Capacity Function of Flow Fraction Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Energy Input Ratio Function of Temperature Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Speed Energy Input Ratio Function of Flow Fraction Curve Name",
        SPEED_PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Speed Part Load Fraction Correlation Curve Name",
    }
}

record_fields! {
    coil_cooling_dx_variable_speed {
        NAME = "Name",
        INDOOR_AIR_INLET_NODE_NAME = "Indoor Air Inlet Node Name",
        INDOOR_AIR_OUTLET_NODE_NAME = "Indoor Air Outlet Node Name",
        NUMBER_OF_SPEEDS = "Number of Speeds",
        NOMINAL_SPEED_LEVEL = "Nominal Speed Level",
        GROSS_RATED_TOTAL_COOLING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Gross Rated Total Cooling Capacity At Selected Nominal Speed Level",
        RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Air Flow Rate At Selected Nominal Speed Level",
        NOMINAL_TIME_FOR_CONDENSATE_TO_BEGIN_LEAVING_THE_COIL = "Nominal Time for Condensate to Begin Leaving the Coil",
        INITIAL_MOISTURE_EVAPORATION_RATE_DIVIDED_BY_STEADY_STATE_AC_LATENT_CAPACITY = "Initial Moisture Evaporation Rate Divided by Steady-State AC Latent Capacity",
        ENERGY_PART_LOAD_FRACTION_CURVE_NAME = "Energy Part Load Fraction Curve Name",
        CONDENSER_TYPE = "Condenser Type",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
    }
    groups {
        SPEED_REFERENCE_UNIT_GROSS_RATED_TOTAL_COOLING_CAPACITY = "Speed Reference Unit Gross Rated Total Cooling Capacity",
        SPEED_REFERENCE_UNIT_GROSS_RATED_SENSIBLE_HEAT_RATIO = "Speed Reference Unit Gross Rated Sensible Heat Ratio",
        SPEED_REFERENCE_UNIT_GROSS_RATED_COOLING_COP = "Speed Reference Unit Gross Rated Cooling COP",
        SPEED_REFERENCE_UNIT_RATED_AIR_FLOW_RATE = "Speed Reference Unit Rated Air Flow Rate",
        SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Total Cooling Capacity Function of Temperature Curve Name",
        SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Total Cooling Capacity Function of Air Flow Fraction Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Energy Input Ratio Function of Temperature Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Energy Input Ratio Function of Air Flow Fraction Curve Name",
    }
}

record_fields! {
    coil_cooling_water {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        DESIGN_WATER_FLOW_RATE = "Design Water Flow Rate",
        DESIGN_AIR_FLOW_RATE = "Design Air Flow Rate",
        DESIGN_INLET_WATER_TEMPERATURE = "Design Inlet Water Temperature",
        DESIGN_INLET_AIR_TEMPERATURE = "Design Inlet Air Temperature",
        DESIGN_OUTLET_AIR_TEMPERATURE = "Design Outlet Air Temperature",
        DESIGN_INLET_AIR_HUMIDITY_RATIO = "Design Inlet Air Humidity Ratio",
        DESIGN_OUTLET_AIR_HUMIDITY_RATIO = "Design Outlet Air Humidity Ratio",
        WATER_INLET_NODE_NAME = "Water Inlet Node Name",
        WATER_OUTLET_NODE_NAME = "Water Outlet Node Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        TYPE_OF_ANALYSIS = "Type of Analysis",
        HEAT_EXCHANGER_CONFIGURATION = "Heat Exchanger Configuration",
    }
}

record_fields! {
    coil_cooling_dx_two_stage_with_humidity_control_mode {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
        MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_CRANKCASE_HEATER_OPERATION = "Maximum Outdoor Dry-Bulb Temperature for Crankcase Heater Operation",
        NUMBER_OF_CAPACITY_STAGES = "Number of Capacity Stages",
        NUMBER_OF_ENHANCED_DEHUMIDIFICATION_MODES = "Number of Enhanced Dehumidification Modes",
        NORMAL_MODE_STAGE_1_COIL_PERFORMANCE_OBJECT_TYPE = "Normal Mode Stage 1 Coil Performance Object Type",
        NORMAL_MODE_STAGE_1_COIL_PERFORMANCE_NAME = "Normal Mode Stage 1 Coil Performance Name",
        NORMAL_MODE_STAGE_1_PLUS_2_COIL_PERFORMANCE_OBJECT_TYPE = "Normal Mode Stage 1+2 Coil Performance Object Type",
        NORMAL_MODE_STAGE_1_PLUS_2_COIL_PERFORMANCE_NAME = "Normal Mode Stage 1+2 Coil Performance Name",
        DEHUMIDIFICATION_MODE_1_STAGE_1_COIL_PERFORMANCE_OBJECT_TYPE = "Dehumidification Mode 1 Stage 1 Coil Performance Object Type",
        DEHUMIDIFICATION_MODE_1_STAGE_1_COIL_PERFORMANCE_NAME = "Dehumidification Mode 1 Stage 1 Coil Performance Name",
        DEHUMIDIFICATION_MODE_1_STAGE_1_PLUS_2_COIL_PERFORMANCE_OBJECT_TYPE = "Dehumidification Mode 1 Stage 1+2 Coil Performance Object Type",
        DEHUMIDIFICATION_MODE_1_STAGE_1_PLUS_2_COIL_PERFORMANCE_NAME = "Dehumidification Mode 1 Stage 1+2 Coil Performance Name",
    }
}

record_fields! {
    coil_performance_dx_cooling {
        NAME = "Name",
        GROSS_RATED_TOTAL_COOLING_CAPACITY = "Gross Rated Total Cooling Capacity",
        GROSS_RATED_SENSIBLE_HEAT_RATIO = "Gross Rated Sensible Heat Ratio",
        GROSS_RATED_COOLING_COP = "Gross Rated Cooling COP",
        RATED_AIR_FLOW_RATE = "Rated Air Flow Rate",
        FRACTION_OF_AIR_FLOW_BYPASSED_AROUND_COIL = "Fraction of Air Flow Bypassed Around Coil",
        TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Total Cooling Capacity Function of Temperature Curve Name",
        TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Total Cooling Capacity Function of Flow Fraction Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Energy Input Ratio Function of Temperature Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Energy Input Ratio Function of Flow Fraction Curve Name",
        PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Part Load Fraction Correlation Curve Name",
    }
}

record_fields! {
    coil_cooling_water_to_air_heat_pump_equation_fit {
        NAME = "Name",
        WATER_INLET_NODE_NAME = "Water Inlet Node Name",
        WATER_OUTLET_NODE_NAME = "Water Outlet Node Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        RATED_AIR_FLOW_RATE = "Rated Air Flow Rate",
        RATED_WATER_FLOW_RATE = "Rated Water Flow Rate",
        GROSS_RATED_TOTAL_COOLING_CAPACITY = "Gross Rated Total Cooling Capacity",
        GROSS_RATED_SENSIBLE_COOLING_CAPACITY = "Gross Rated Sensible Cooling Capacity",
        GROSS_RATED_COOLING_COP = "Gross Rated Cooling COP",
        TOTAL_COOLING_CAPACITY_CURVE_NAME = "Total Cooling Capacity Curve Name",
        SENSIBLE_COOLING_CAPACITY_CURVE_NAME = "Sensible Cooling Capacity Curve Name",
        COOLING_POWER_CONSUMPTION_CURVE_NAME = "Cooling Power Consumption Curve Name",
    }
}

record_fields! {
    coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit {
        NAME = "Name",
        WATER_TO_REFRIGERANT_HX_WATER_INLET_NODE_NAME = "Water-to-Refrigerant HX Water Inlet Node Name",
        WATER_TO_REFRIGERANT_HX_WATER_OUTLET_NODE_NAME = "Water-to-Refrigerant HX Water Outlet Node Name",
        INDOOR_AIR_INLET_NODE_NAME = "Indoor Air Inlet Node Name",
        INDOOR_AIR_OUTLET_NODE_NAME = "Indoor Air Outlet Node Name",
        NUMBER_OF_SPEEDS = "Number of Speeds",
        NOMINAL_SPEED_LEVEL = "Nominal Speed Level",
        GROSS_RATED_TOTAL_COOLING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Gross Rated Total Cooling Capacity At Selected Nominal Speed Level",
        RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Air Flow Rate At Selected Nominal Speed Level",
        RATED_WATER_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Water Flow Rate At Selected Nominal Speed Level",
        ENERGY_PART_LOAD_FRACTION_CURVE_NAME = "Energy Part Load Fraction Curve Name",
    }
    groups {
        SPEED_REFERENCE_UNIT_GROSS_RATED_TOTAL_CAPACITY = "Speed Reference Unit Gross Rated Total Capacity",
        SPEED_REFERENCE_UNIT_GROSS_RATED_COP = "Speed Reference Unit Gross Rated COP",
        SPEED_REFERENCE_UNIT_RATED_AIR_FLOW_RATE = "Speed Reference Unit Rated Air Flow Rate",
        SPEED_REFERENCE_UNIT_RATED_WATER_FLOW_RATE = "Speed Reference Unit Rated Water Flow Rate",
        SPEED_TOTAL_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Total Capacity Function of Temperature Curve Name",
        SPEED_TOTAL_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Total Capacity Function of Air Flow Fraction Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Energy Input Ratio Function of Temperature Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Energy Input Ratio Function of Air Flow Fraction Curve Name",
    }
}

record_fields! {
    coil_system_cooling_dx_heat_exchanger_assisted {
        NAME = "Name",
        HEAT_EXCHANGER_OBJECT_TYPE = "Heat Exchanger Object Type",
        HEAT_EXCHANGER_NAME = "Heat Exchanger Name",
        COOLING_COIL_OBJECT_TYPE = "Cooling Coil Object Type",
        COOLING_COIL_NAME = "Cooling Coil Name",
    }
}

record_fields! {
    coil_system_cooling_water_heat_exchanger_assisted {
        NAME = "Name",
        HEAT_EXCHANGER_OBJECT_TYPE = "Heat Exchanger Object Type",
        HEAT_EXCHANGER_NAME = "Heat Exchanger Name",
        COOLING_COIL_OBJECT_TYPE = "Cooling Coil Object Type",
        COOLING_COIL_NAME = "Cooling Coil Name",
    }
}

// =============================================================================
// HEATING COILS
// =============================================================================

record_fields! {
    coil_heating_dx_single_speed {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        GROSS_RATED_HEATING_CAPACITY = "Gross Rated Heating Capacity",
        GROSS_RATED_HEATING_COP = "Gross Rated Heating COP",
        RATED_AIR_FLOW_RATE = "Rated Air Flow Rate",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Heating Capacity Function of Temperature Curve Name",
        HEATING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Heating Capacity Function of Flow Fraction Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Energy Input Ratio Function of Temperature Curve Name",
        ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Energy Input Ratio Function of Flow Fraction Curve Name",
        PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Part Load Fraction Correlation Curve Name",
        DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Defrost Energy Input Ratio Function of Temperature Curve Name",
        MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION = "Minimum Outdoor Dry-Bulb Temperature for Compressor Operation",
        MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_DEFROST_OPERATION = "Maximum Outdoor Dry-Bulb Temperature for Defrost Operation",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
        DEFROST_STRATEGY = "Defrost Strategy",
        DEFROST_CONTROL = "Defrost Control",
    }
}

record_fields! {
    coil_heating_electric {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        EFFICIENCY = "Efficiency",
        NOMINAL_CAPACITY = "Nominal Capacity",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
    }
}

record_fields! {
    coil_heating_electric_multi_stage {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        TEMPERATURE_SETPOINT_NODE_NAME = "Temperature Setpoint Node Name",
        NUMBER_OF_STAGES = "Number of Stages",
    }
    groups {
        STAGE_EFFICIENCY = "Stage Efficiency",
        STAGE_NOMINAL_CAPACITY = "Stage Nominal Capacity",
    }
}

record_fields! {
    coil_heating_fuel {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        FUEL_TYPE = "Fuel Type",
        BURNER_EFFICIENCY = "Burner Efficiency",
        NOMINAL_CAPACITY = "Nominal Capacity",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        TEMPERATURE_SETPOINT_NODE_NAME = "Temperature Setpoint Node Name",
        ON_CYCLE_PARASITIC_ELECTRIC_LOAD = "On Cycle Parasitic Electric Load",
        PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Part Load Fraction Correlation Curve Name",
        OFF_CYCLE_PARASITIC_FUEL_LOAD = "Off Cycle Parasitic Fuel Load",
    }
}

record_fields! {
    coil_heating_water {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        U_FACTOR_TIMES_AREA_VALUE = "U-Factor Times Area Value",
        MAXIMUM_WATER_FLOW_RATE = "Maximum Water Flow Rate",
        WATER_INLET_NODE_NAME = "Water Inlet Node Name",
        WATER_OUTLET_NODE_NAME = "Water Outlet Node Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        PERFORMANCE_INPUT_METHOD = "Performance Input Method",
        RATED_CAPACITY = "Rated Capacity",
        RATED_INLET_WATER_TEMPERATURE = "Rated Inlet Water Temperature",
        RATED_INLET_AIR_TEMPERATURE = "Rated Inlet Air Temperature",
        RATED_OUTLET_WATER_TEMPERATURE = "Rated Outlet Water Temperature",
        RATED_OUTLET_AIR_TEMPERATURE = "Rated Outlet Air Temperature",
        RATED_RATIO_FOR_AIR_AND_WATER_CONVECTION = "Rated Ratio for Air and Water Convection",
    }
}

record_fields! {
    coil_heating_dx_multi_speed {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION = "Minimum Outdoor Dry-Bulb Temperature for Compressor Operation",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
        DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Defrost Energy Input Ratio Function of Temperature Curve Name",
        MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_DEFROST_OPERATION = "Maximum Outdoor Dry-Bulb Temperature for Defrost Operation",
        DEFROST_STRATEGY = "Defrost Strategy",
        DEFROST_CONTROL = "Defrost Control",
        APPLY_PART_LOAD_FRACTION_TO_SPEEDS_GREATER_THAN_1 = "Apply Part Load Fraction to Speeds Greater than 1",
        FUEL_TYPE = "Fuel Type",
        NUMBER_OF_SPEEDS = "Number of Speeds",
    }
    groups {
        SPEED_GROSS_RATED_HEATING_CAPACITY = "Speed Gross Rated Heating Capacity",
        SPEED_GROSS_RATED_HEATING_COP = "Speed Gross Rated Heating COP",
        SPEED_RATED_AIR_FLOW_RATE = "Speed Rated Air Flow Rate",
        SPEED_HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Heating Capacity Function of Temperature Curve Name",
        SPEED_HEATING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Speed Heating Capacity Function of Flow Fraction Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Energy Input Ratio Function of Temperature Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME = "Speed Energy Input Ratio Function of Flow Fraction Curve Name",
        SPEED_PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Speed Part Load Fraction Correlation Curve Name",
    }
}

record_fields! {
    coil_heating_dx_variable_speed {
        NAME = "Name",
        INDOOR_AIR_INLET_NODE_NAME = "Indoor Air Inlet Node Name",
        INDOOR_AIR_OUTLET_NODE_NAME = "Indoor Air Outlet Node Name",
        NUMBER_OF_SPEEDS = "Number of Speeds",
        NOMINAL_SPEED_LEVEL = "Nominal Speed Level",
        RATED_HEATING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Heating Capacity At Selected Nominal Speed Level",
        RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Air Flow Rate At Selected Nominal Speed Level",
        ENERGY_PART_LOAD_FRACTION_CURVE_NAME = "Energy Part Load Fraction Curve Name",
        DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Defrost Energy Input Ratio Function of Temperature Curve Name",
        MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION = "Minimum Outdoor Dry-Bulb Temperature for Compressor Operation",
        CRANKCASE_HEATER_CAPACITY = "Crankcase Heater Capacity",
        DEFROST_STRATEGY = "Defrost Strategy",
        DEFROST_CONTROL = "Defrost Control",
    }
    groups {
        SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_CAPACITY = "Speed Reference Unit Gross Rated Heating Capacity",
        SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_COP = "Speed Reference Unit Gross Rated Heating COP",
        SPEED_REFERENCE_UNIT_RATED_AIR_FLOW_RATE = "Speed Reference Unit Rated Air Flow Rate",
        SPEED_HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Heating Capacity Function of Temperature Curve Name",
        SPEED_TOTAL_HEATING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Total Heating Capacity Function of Air Flow Fraction Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Energy Input Ratio Function of Temperature Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Energy Input Ratio Function of Air Flow Fraction Curve Name",
    }
}

record_fields! {
    coil_heating_gas_multi_stage {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        TEMPERATURE_SETPOINT_NODE_NAME = "Temperature Setpoint Node Name",
        PART_LOAD_FRACTION_CORRELATION_CURVE_NAME = "Part Load Fraction Correlation Curve Name",
        PARASITIC_GAS_LOAD = "Parasitic Gas Load",
        NUMBER_OF_STAGES = "Number of Stages",
    }
    groups {
        STAGE_GAS_BURNER_EFFICIENCY = "Stage Gas Burner Efficiency",
        STAGE_NOMINAL_CAPACITY = "Stage Nominal Capacity",
        STAGE_PARASITIC_ELECTRIC_LOAD = "Stage Parasitic Electric Load",
    }
}

record_fields! {
    coil_heating_desuperheater {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        HEAT_RECLAIM_RECOVERY_EFFICIENCY = "Heat Reclaim Recovery Efficiency",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        HEATING_SOURCE_OBJECT_TYPE = "Heating Source Object Type",
        HEATING_SOURCE_NAME = "Heating Source Name",
        TEMPERATURE_SETPOINT_NODE_NAME = "Temperature Setpoint Node Name",
        PARASITIC_ELECTRIC_LOAD = "Parasitic Electric Load",
    }
}

record_fields! {
    coil_heating_water_to_air_heat_pump_equation_fit {
        NAME = "Name",
        WATER_INLET_NODE_NAME = "Water Inlet Node Name",
        WATER_OUTLET_NODE_NAME = "Water Outlet Node Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        RATED_AIR_FLOW_RATE = "Rated Air Flow Rate",
        RATED_WATER_FLOW_RATE = "Rated Water Flow Rate",
        GROSS_RATED_HEATING_CAPACITY = "Gross Rated Heating Capacity",
        GROSS_RATED_HEATING_COP = "Gross Rated Heating COP",
        HEATING_CAPACITY_CURVE_NAME = "Heating Capacity Curve Name",
        HEATING_POWER_CONSUMPTION_CURVE_NAME = "Heating Power Consumption Curve Name",
    }
}

record_fields! {
    coil_heating_water_to_air_heat_pump_variable_speed_equation_fit {
        NAME = "Name",
        WATER_TO_REFRIGERANT_HX_WATER_INLET_NODE_NAME = "Water-to-Refrigerant HX Water Inlet Node Name",
        WATER_TO_REFRIGERANT_HX_WATER_OUTLET_NODE_NAME = "Water-to-Refrigerant HX Water Outlet Node Name",
        INDOOR_AIR_INLET_NODE_NAME = "Indoor Air Inlet Node Name",
        INDOOR_AIR_OUTLET_NODE_NAME = "Indoor Air Outlet Node Name",
        NUMBER_OF_SPEEDS = "Number of Speeds",
        NOMINAL_SPEED_LEVEL = "Nominal Speed Level",
        RATED_HEATING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Heating Capacity At Selected Nominal Speed Level",
        RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Air Flow Rate At Selected Nominal Speed Level",
        RATED_WATER_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL = "Rated Water Flow Rate At Selected Nominal Speed Level",
        ENERGY_PART_LOAD_FRACTION_CURVE_NAME = "Energy Part Load Fraction Curve Name",
    }
    groups {
        SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_CAPACITY = "Speed Reference Unit Gross Rated Heating Capacity",
        SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_COP = "Speed Reference Unit Gross Rated Heating COP",
        SPEED_REFERENCE_UNIT_RATED_AIR_FLOW = "Speed Reference Unit Rated Air Flow",
        SPEED_REFERENCE_UNIT_RATED_WATER_FLOW_RATE = "Speed Reference Unit Rated Water Flow Rate",
        SPEED_HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Heating Capacity Function of Temperature Curve Name",
        SPEED_TOTAL_HEATING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Total Heating Capacity Function of Air Flow Fraction Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME = "Speed Energy Input Ratio Function of Temperature Curve Name",
        SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME = "Speed Energy Input Ratio Function of Air Flow Fraction Curve Name",
    }
}

// =============================================================================
// HEAT EXCHANGERS
// =============================================================================

record_fields! {
    heat_exchanger_air_to_air_sensible_and_latent {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        NOMINAL_SUPPLY_AIR_FLOW_RATE = "Nominal Supply Air Flow Rate",
        SENSIBLE_EFFECTIVENESS_AT_100_HEATING_AIR_FLOW = "Sensible Effectiveness at 100% Heating Air Flow",
        LATENT_EFFECTIVENESS_AT_100_HEATING_AIR_FLOW = "Latent Effectiveness at 100% Heating Air Flow",
        SENSIBLE_EFFECTIVENESS_AT_100_COOLING_AIR_FLOW = "Sensible Effectiveness at 100% Cooling Air Flow",
        LATENT_EFFECTIVENESS_AT_100_COOLING_AIR_FLOW = "Latent Effectiveness at 100% Cooling Air Flow",
        SUPPLY_AIR_INLET_NODE_NAME = "Supply Air Inlet Node Name",
        SUPPLY_AIR_OUTLET_NODE_NAME = "Supply Air Outlet Node Name",
        EXHAUST_AIR_INLET_NODE_NAME = "Exhaust Air Inlet Node Name",
        EXHAUST_AIR_OUTLET_NODE_NAME = "Exhaust Air Outlet Node Name",
        NOMINAL_ELECTRIC_POWER = "Nominal Electric Power",
        SUPPLY_AIR_OUTLET_TEMPERATURE_CONTROL = "Supply Air Outlet Temperature Control",
        HEAT_EXCHANGER_TYPE = "Heat Exchanger Type",
        FROST_CONTROL_TYPE = "Frost Control Type",
        THRESHOLD_TEMPERATURE = "Threshold Temperature",
        ECONOMIZER_LOCKOUT = "Economizer Lockout",
    }
}

record_fields! {
    heat_exchanger_desiccant_balanced_flow {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        REGENERATION_AIR_INLET_NODE_NAME = "Regeneration Air Inlet Node Name",
        REGENERATION_AIR_OUTLET_NODE_NAME = "Regeneration Air Outlet Node Name",
        PROCESS_AIR_INLET_NODE_NAME = "Process Air Inlet Node Name",
        PROCESS_AIR_OUTLET_NODE_NAME = "Process Air Outlet Node Name",
        ECONOMIZER_LOCKOUT = "Economizer Lockout",
    }
}

// =============================================================================
// ASSEMBLIES
// =============================================================================

record_fields! {
    air_loop_hvac_unitary_system {
        NAME = "Name",
        CONTROL_TYPE = "Control Type",
        CONTROLLING_ZONE_OR_THERMOSTAT_LOCATION = "Controlling Zone or Thermostat Location",
        DEHUMIDIFICATION_CONTROL_TYPE = "Dehumidification Control Type",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        SUPPLY_FAN_OBJECT_TYPE = "Supply Fan Object Type",
        SUPPLY_FAN_NAME = "Supply Fan Name",
        FAN_PLACEMENT = "Fan Placement",
        SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME = "Supply Air Fan Operating Mode Schedule Name",
        HEATING_COIL_OBJECT_TYPE = "Heating Coil Object Type",
        HEATING_COIL_NAME = "Heating Coil Name",
        DX_HEATING_COIL_SIZING_RATIO = "DX Heating Coil Sizing Ratio",
        COOLING_COIL_OBJECT_TYPE = "Cooling Coil Object Type",
        COOLING_COIL_NAME = "Cooling Coil Name",
        USE_DOAS_DX_COOLING_COIL = "Use DOAS DX Cooling Coil",
        MINIMUM_SUPPLY_AIR_TEMPERATURE = "Minimum Supply Air Temperature",
        LATENT_LOAD_CONTROL = "Latent Load Control",
        SUPPLEMENTAL_HEATING_COIL_OBJECT_TYPE = "Supplemental Heating Coil Object Type",
        SUPPLEMENTAL_HEATING_COIL_NAME = "Supplemental Heating Coil Name",
        COOLING_SUPPLY_AIR_FLOW_RATE_METHOD = "Cooling Supply Air Flow Rate Method",
        COOLING_SUPPLY_AIR_FLOW_RATE = "Cooling Supply Air Flow Rate",
        HEATING_SUPPLY_AIR_FLOW_RATE_METHOD = "Heating Supply Air Flow Rate Method",
        HEATING_SUPPLY_AIR_FLOW_RATE = "Heating Supply Air Flow Rate",
        NO_LOAD_SUPPLY_AIR_FLOW_RATE_METHOD = "No Load Supply Air Flow Rate Method",
        NO_LOAD_SUPPLY_AIR_FLOW_RATE = "No Load Supply Air Flow Rate",
        MAXIMUM_SUPPLY_AIR_TEMPERATURE = "Maximum Supply Air Temperature",
        MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_SUPPLEMENTAL_HEATER_OPERATION = "Maximum Outdoor Dry-Bulb Temperature for Supplemental Heater Operation",
        ANCILLARY_ON_CYCLE_ELECTRIC_POWER = "Ancillary On-Cycle Electric Power",
        ANCILLARY_OFF_CYCLE_ELECTRIC_POWER = "Ancillary Off-Cycle Electric Power",
        DESIGN_SPECIFICATION_MULTISPEED_OBJECT_TYPE = "Design Specification Multispeed Object Type",
        DESIGN_SPECIFICATION_MULTISPEED_OBJECT_NAME = "Design Specification Multispeed Object Name",
    }
}

record_fields! {
    unitary_system_performance_multispeed {
        NAME = "Name",
        NUMBER_OF_SPEEDS_FOR_HEATING = "Number of Speeds for Heating",
        NUMBER_OF_SPEEDS_FOR_COOLING = "Number of Speeds for Cooling",
        SINGLE_MODE_OPERATION = "Single Mode Operation",
        NO_LOAD_SUPPLY_AIR_FLOW_RATE_RATIO = "No Load Supply Air Flow Rate Ratio",
    }
    groups {
        HEATING_SPEED_SUPPLY_AIR_FLOW_RATIO = "Heating Speed Supply Air Flow Ratio",
        COOLING_SPEED_SUPPLY_AIR_FLOW_RATIO = "Cooling Speed Supply Air Flow Ratio",
    }
}

record_fields! {
    zone_hvac_packaged_terminal_air_conditioner {
        NAME = "Name",
        AVAILABILITY_SCHEDULE_NAME = "Availability Schedule Name",
        AIR_INLET_NODE_NAME = "Air Inlet Node Name",
        AIR_OUTLET_NODE_NAME = "Air Outlet Node Name",
        OUTDOOR_AIR_MIXER_OBJECT_TYPE = "Outdoor Air Mixer Object Type",
        OUTDOOR_AIR_MIXER_NAME = "Outdoor Air Mixer Name",
        COOLING_SUPPLY_AIR_FLOW_RATE = "Cooling Supply Air Flow Rate",
        HEATING_SUPPLY_AIR_FLOW_RATE = "Heating Supply Air Flow Rate",
        NO_LOAD_SUPPLY_AIR_FLOW_RATE = "No Load Supply Air Flow Rate",
        COOLING_OUTDOOR_AIR_FLOW_RATE = "Cooling Outdoor Air Flow Rate",
        HEATING_OUTDOOR_AIR_FLOW_RATE = "Heating Outdoor Air Flow Rate",
        NO_LOAD_OUTDOOR_AIR_FLOW_RATE = "No Load Outdoor Air Flow Rate",
        SUPPLY_AIR_FAN_OBJECT_TYPE = "Supply Air Fan Object Type",
        SUPPLY_AIR_FAN_NAME = "Supply Air Fan Name",
        HEATING_COIL_OBJECT_TYPE = "Heating Coil Object Type",
        HEATING_COIL_NAME = "Heating Coil Name",
        COOLING_COIL_OBJECT_TYPE = "Cooling Coil Object Type",
        COOLING_COIL_NAME = "Cooling Coil Name",
        FAN_PLACEMENT = "Fan Placement",
        SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME = "Supply Air Fan Operating Mode Schedule Name",
    }
}

record_fields! {
    outdoor_air_mixer {
        NAME = "Name",
        MIXED_AIR_NODE_NAME = "Mixed Air Node Name",
        OUTDOOR_AIR_STREAM_NODE_NAME = "Outdoor Air Stream Node Name",
        RELIEF_AIR_STREAM_NODE_NAME = "Relief Air Stream Node Name",
        RETURN_AIR_STREAM_NODE_NAME = "Return Air Stream Node Name",
    }
}
