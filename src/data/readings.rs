//! Built-in thermometer readings.
//!
//! Twelve `(t, z)` samples; index `i` of `T` pairs with index `i` of `Z`.
//! They are deliberately unsorted, so the pipeline's co-sort is exercised
//! on every run.

use crate::domain::Dataset;
use crate::error::AppError;

/// Observed outputs.
pub const Z: [f64; 12] = [
    27.0, 31.0, 43.0, 58.0, 69.0, 86.0, 102.0, 111.0, 122.0, 137.0, 18.0, 87.0,
];

/// Sample inputs.
pub const T: [f64; 12] = [
    71.0, 64.0, 52.0, 41.0, 33.0, 23.0, 17.0, 12.0, 2.0, 0.0, 87.0, -5.0,
];

/// The built-in readings as a `Dataset`.
pub fn thermometer_readings() -> Dataset {
    Dataset::from_arrays(T, Z)
}

/// Use the dataset file at `path` when given, otherwise the built-in readings.
pub fn load_dataset(path: Option<&std::path::Path>) -> Result<Dataset, AppError> {
    match path {
        Some(path) => crate::io::read_dataset(path),
        None => Ok(thermometer_readings()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_are_paired() {
        let data = thermometer_readings();
        assert_eq!(data.len(), 12);
        assert_eq!(data.t()[11], -5.0);
        assert_eq!(data.z()[11], 87.0);
    }

    #[test]
    fn no_path_uses_builtin() {
        assert_eq!(load_dataset(None).unwrap(), thermometer_readings());
    }
}
