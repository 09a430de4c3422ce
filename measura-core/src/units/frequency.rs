//! Frequency units.
//!
//! The SI unit is the hertz.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Frequency`].
#[derive(Debug)]
pub enum FrequencyDim {}

/// Units of [`Frequency`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = FrequencyDim, name = "Frequency")]
pub enum FrequencyUnit {
    /// Hertz.
    #[unit(symbol = "Hz", ratio = 1.0, plural = "hertz", si)]
    Hertz,
    /// Kilohertz.
    #[unit(symbol = "kHz", ratio = 1e3, plural = "kilohertz")]
    Kilohertz,
    /// Megahertz.
    #[unit(symbol = "MHz", ratio = 1e6, plural = "megahertz")]
    Megahertz,
    /// Gigahertz.
    #[unit(symbol = "GHz", ratio = 1e9, plural = "gigahertz")]
    Gigahertz,
    /// Terahertz.
    #[unit(symbol = "THz", ratio = 1e12, plural = "terahertz")]
    Terahertz,
    /// Cycles per minute.
    #[unit(symbol = "cpm", ratio = 1.0 / 60.0, plural = "cycles_per_minute")]
    CyclePerMinute,
    /// Cycles per hour.
    #[unit(symbol = "cph", ratio = 1.0 / 3600.0, plural = "cycles_per_hour")]
    CyclePerHour,
    /// Beats per minute.
    #[unit(symbol = "bpm", ratio = 1.0 / 60.0, plural = "beats_per_minute")]
    BeatPerMinute,
}

/// A frequency, stored in hertz.
pub type Frequency = Quantity<FrequencyDim>;
