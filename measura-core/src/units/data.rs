//! Amount-of-information units.
//!
//! The bit is the base unit. Decimal prefixes (`kB`, `MB`) are powers of 1000 and binary prefixes (`KiB`, `MiB`) powers
//! of 1024, so `1 MB` and `1 MiB` are different amounts. Case matters here: `b` is a bit and `B` a byte, and
//! case-insensitive lookups such as `"MB"` written as `"mb"` are ambiguous.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Data`].
#[derive(Debug)]
pub enum DataDim {}

/// Units of [`Data`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = DataDim, name = "Data")]
pub enum DataUnit {
    /// Bit.
    #[unit(symbol = "b", alias = "bit", ratio = 1.0, si)]
    Bit,
    /// Byte of eight bits.
    #[unit(symbol = "B", alias = "byte", ratio = 8.0)]
    Byte,
    /// Kilobit, 1000 bits.
    #[unit(symbol = "kb", ratio = 1e3)]
    Kilobit,
    /// Megabit.
    #[unit(symbol = "Mb", ratio = 1e6)]
    Megabit,
    /// Gigabit.
    #[unit(symbol = "Gb", ratio = 1e9)]
    Gigabit,
    /// Kilobyte, 1000 bytes.
    #[unit(symbol = "kB", ratio = 8e3)]
    Kilobyte,
    /// Megabyte.
    #[unit(symbol = "MB", ratio = 8e6)]
    Megabyte,
    /// Gigabyte.
    #[unit(symbol = "GB", ratio = 8e9)]
    Gigabyte,
    /// Terabyte.
    #[unit(symbol = "TB", ratio = 8e12)]
    Terabyte,
    /// Kibibit, 1024 bits.
    #[unit(symbol = "Kib", ratio = 1024.0)]
    Kibibit,
    /// Mebibit.
    #[unit(symbol = "Mib", ratio = 1_048_576.0)]
    Mebibit,
    /// Kibibyte, 1024 bytes.
    #[unit(symbol = "KiB", ratio = 8192.0)]
    Kibibyte,
    /// Mebibyte.
    #[unit(symbol = "MiB", ratio = 8_388_608.0)]
    Mebibyte,
    /// Gibibyte.
    #[unit(symbol = "GiB", ratio = 8_589_934_592.0)]
    Gibibyte,
    /// Tebibyte.
    #[unit(symbol = "TiB", ratio = 8_796_093_022_208.0)]
    Tebibyte,
}

/// An amount of information, stored in bits.
pub type Data = Quantity<DataDim>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseError, Unit};

    #[test]
    fn decimal_and_binary_prefixes() {
        assert_eq!(Data::from_bytes(1.0).bits(), 8.0);
        assert_eq!(Data::from_kilobytes(1.0).bytes(), 1000.0);
        assert_eq!(Data::from_kibibytes(1.0).bytes(), 1024.0);
        assert_eq!(Data::from_mebibytes(1.0).kibibytes(), 1024.0);
        assert_eq!(Data::from_gibibytes(1.0).bytes(), 1_073_741_824.0);
        assert_eq!(Data::from_megabits(8.0).megabytes(), 1.0);
    }

    #[test]
    fn bit_and_byte_are_case_sensitive() {
        assert_eq!(DataUnit::parse("b").unwrap(), DataUnit::Bit);
        assert_eq!(DataUnit::parse("B").unwrap(), DataUnit::Byte);
        assert_eq!(DataUnit::parse("MiB").unwrap(), DataUnit::Mebibyte);
        assert!(matches!(DataUnit::parse("mb"), Err(ParseError::AmbiguousUnit { .. })));
    }

    #[test]
    fn bit_is_si() {
        assert!(DataUnit::Bit.is_si());
        assert_eq!(DataUnit::ALL.len(), 15);
    }
}
