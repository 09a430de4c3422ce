//! Dimension types.

use crate::unit::Unit;

/// Marker trait for quantity kinds (dimensions).
///
/// A dimension tag is an uninhabited type (`pub enum LengthDim {}`) that separates quantity kinds at compile time.
/// Each dimension owns exactly one unit enum and names the SI unit in which every [`Quantity`](crate::Quantity) of
/// that kind stores its value.
///
/// Implementations are generated by the `Unit` derive on the kind's unit enum.
pub trait Dimension: 'static {
    /// Unit enum of this kind.
    type Unit: Unit<Dim = Self>;

    /// Human-readable kind name, e.g. `"Length"`.
    const NAME: &'static str;

    /// The SI unit of this kind. Its ratio is exactly `1.0`.
    const SI_UNIT: Self::Unit;
}
