//! Predefined quantity kinds.
//!
//! Each module declares one kind: a dimension tag (`LengthDim`), a unit table (`LengthUnit`) and the quantity alias
//! (`Length = Quantity<LengthDim>`). The unit table is a plain enum; `#[derive(Unit)]` generates the conversions,
//! symbol lookup and the `from_<unit>` / `<unit>()` methods on the quantity.
//!
//! ## Modules
//!
//! - Geometry and kinematics: [`length`], [`area`], [`volume`], [`speed`], [`acceleration`], [`jerk`].
//! - Rotation: [`angle`], [`rotational_speed`], [`rotational_acceleration`].
//! - Mechanics: [`mass`], [`force`], [`pressure`], [`energy`], [`power`], [`density`], [`specific_volume`].
//! - Time: [`time`], [`frequency`].
//! - Chemistry: [`amount_of_substance`], [`catalytic_activity`].
//! - Electromagnetism: [`current`], [`voltage`], [`resistance`], [`electrical_conductance`], [`capacitance`],
//!   [`inductance`], [`electric_charge`], [`magnetic_flux`], [`magnetic_field_strength`].
//! - Information: [`data`].
//!
//! Cross-kind `*` and `/` operators live in [`relations`].

pub mod acceleration;
pub mod amount_of_substance;
pub mod angle;
pub mod area;
pub mod capacitance;
pub mod catalytic_activity;
pub mod current;
pub mod data;
pub mod density;
pub mod electric_charge;
pub mod electrical_conductance;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod inductance;
pub mod jerk;
pub mod length;
pub mod magnetic_field_strength;
pub mod magnetic_flux;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod relations;
pub mod resistance;
pub mod rotational_acceleration;
pub mod rotational_speed;
pub mod specific_volume;
pub mod speed;
pub mod time;
pub mod voltage;
pub mod volume;

pub use acceleration::{Acceleration, AccelerationDim, AccelerationUnit};
pub use amount_of_substance::{AmountOfSubstance, AmountOfSubstanceDim, AmountOfSubstanceUnit};
pub use angle::{Angle, AngleDim, AngleUnit};
pub use area::{Area, AreaDim, AreaUnit};
pub use capacitance::{Capacitance, CapacitanceDim, CapacitanceUnit};
pub use catalytic_activity::{CatalyticActivity, CatalyticActivityDim, CatalyticActivityUnit};
pub use current::{Current, CurrentDim, CurrentUnit};
pub use data::{Data, DataDim, DataUnit};
pub use density::{Density, DensityDim, DensityUnit};
pub use electric_charge::{ElectricCharge, ElectricChargeDim, ElectricChargeUnit};
pub use electrical_conductance::{
    ElectricalConductance, ElectricalConductanceDim, ElectricalConductanceUnit,
};
pub use energy::{Energy, EnergyDim, EnergyUnit};
pub use force::{Force, ForceDim, ForceUnit};
pub use frequency::{Frequency, FrequencyDim, FrequencyUnit};
pub use inductance::{Inductance, InductanceDim, InductanceUnit};
pub use jerk::{Jerk, JerkDim, JerkUnit};
pub use length::{Length, LengthDim, LengthUnit};
pub use magnetic_field_strength::{
    MagneticFieldStrength, MagneticFieldStrengthDim, MagneticFieldStrengthUnit,
};
pub use magnetic_flux::{MagneticFlux, MagneticFluxDim, MagneticFluxUnit};
pub use mass::{Mass, MassDim, MassUnit};
pub use power::{Power, PowerDim, PowerUnit};
pub use pressure::{Pressure, PressureDim, PressureUnit};
pub use resistance::{Resistance, ResistanceDim, ResistanceUnit};
pub use rotational_acceleration::{
    RotationalAcceleration, RotationalAccelerationDim, RotationalAccelerationUnit,
};
pub use rotational_speed::{RotationalSpeed, RotationalSpeedDim, RotationalSpeedUnit};
pub use specific_volume::{SpecificVolume, SpecificVolumeDim, SpecificVolumeUnit};
pub use speed::{Speed, SpeedDim, SpeedUnit};
pub use time::{Time, TimeDim, TimeUnit};
pub use voltage::{Voltage, VoltageDim, VoltageUnit};
pub use volume::{Volume, VolumeDim, VolumeUnit};
