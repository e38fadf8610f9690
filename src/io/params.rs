//! Params file read/write.
//!
//! The file is plain text: whitespace-separated decimal numbers. Positions
//! 0..=4 are `r0 rc k t0 loss`; anything after position 4 is ignored, but
//! every token must still be a valid number.

use std::fs;
use std::path::Path;

use crate::domain::{ModelParams, ParamsFile};
use crate::error::{AppError, EXIT_IO};

/// Number of leading values the loader consumes.
pub const PARAMS_FILE_LEN: usize = ModelParams::LEN + 1;

/// Read and parse a params file.
pub fn read_params(path: &Path) -> Result<ParamsFile, AppError> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io("read params file", path, e))?;
    parse_params(&text).map_err(|e| {
        AppError::new(e.exit_code(), format!("{} ({})", e.message(), path.display()))
    })
}

/// Parse params file contents.
pub fn parse_params(text: &str) -> Result<ParamsFile, AppError> {
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|e| {
                AppError::new(EXIT_IO, format!("Invalid number '{token}' at position {i}: {e}"))
            })
        })
        .collect::<Result<Vec<f64>, AppError>>()?;

    if values.len() < PARAMS_FILE_LEN {
        return Err(AppError::new(
            EXIT_IO,
            format!(
                "Params file needs {PARAMS_FILE_LEN} values (r0 rc k t0 loss), found {}",
                values.len()
            ),
        ));
    }

    Ok(ParamsFile {
        params: ModelParams::from_slice(&values[..ModelParams::LEN]),
        loss: values[ModelParams::LEN],
    })
}

/// Format params file contents: `r0 rc k t0 loss\n`.
pub fn format_params(file: &ParamsFile) -> String {
    let p = &file.params;
    format!("{} {} {} {} {}\n", p.r0, p.rc, p.k, p.t0, file.loss)
}

/// Write a params file, replacing any existing file at `path`.
pub fn write_params(path: &Path, file: &ParamsFile) -> Result<(), AppError> {
    fs::write(path, format_params(file)).map_err(|e| AppError::io("write params file", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("zcurve_params_{}_{name}", std::process::id()))
    }

    #[test]
    fn parses_five_values() {
        let f = parse_params("1.0 1.0 0.05 0 0.1234").unwrap();
        assert_eq!(
            f.params,
            ModelParams {
                r0: 1.0,
                rc: 1.0,
                k: 0.05,
                t0: 0.0
            }
        );
        assert_eq!(f.loss, 0.1234);
    }

    #[test]
    fn accepts_any_whitespace_and_ignores_extra_values() {
        let f = parse_params("  2\n3\t4 \r\n5 6 7 8\n").unwrap();
        assert_eq!(f.params.to_array(), [2.0, 3.0, 4.0, 5.0]);
        assert_eq!(f.loss, 6.0);
    }

    #[test]
    fn too_few_values_fail() {
        let err = parse_params("1 2 3 4").unwrap_err();
        assert_eq!(err.exit_code(), EXIT_IO);
        assert!(err.message().contains("found 4"));
    }

    #[test]
    fn empty_input_fails() {
        assert!(parse_params("").is_err());
    }

    #[test]
    fn malformed_token_fails_even_after_position_four() {
        let err = parse_params("1 2 3 4 5 six").unwrap_err();
        assert!(err.message().contains("'six'"));
        assert!(err.message().contains("position 5"));
    }

    #[test]
    fn missing_file_fails() {
        let err = read_params(&temp_path("does_not_exist.txt")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_IO);
    }

    #[test]
    fn written_file_reads_back_exactly() {
        let path = temp_path("roundtrip.txt");
        let file = ParamsFile {
            params: ModelParams {
                r0: 0.1 + 0.2,
                rc: 123.456e-7,
                k: -0.0375,
                t0: 41.0,
            },
            loss: 987.654321,
        };
        write_params(&path, &file).unwrap();
        let back = read_params(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, file);
    }

    #[test]
    fn format_matches_expected_layout() {
        let file = ParamsFile {
            params: ModelParams {
                r0: 1.5,
                rc: 2.0,
                k: 0.25,
                t0: -3.0,
            },
            loss: 10.0,
        };
        assert_eq!(format_params(&file), "1.5 2 0.25 -3 10\n");
    }
}
