//! Result rendering for the text interface.
//!
//! Notation is selected via the `--format` flag or the `POWFORGE_FORMAT`
//! environment variable:
//! - `auto` (default): fixed notation for humane magnitudes, scientific
//!   notation once fixed rendering would be all zeros or all digits.
//! - `fixed`: ten fractional digits, the original front-end's precision.
//! - `scientific`: Rust `{:e}` rendering.

/// Output notation for evaluated results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    #[default]
    Auto,
    Fixed,
    Scientific,
}

/// Environment variable consulted when no `--format` flag is given.
pub const FORMAT_ENV_VAR: &str = "POWFORGE_FORMAT";

/// Fixed notation switches to scientific at or above this magnitude.
const SCIENTIFIC_UPPER: f64 = 1e16;
/// Fixed notation switches to scientific below this magnitude (nonzero only).
const SCIENTIFIC_LOWER: f64 = 1e-4;

impl Notation {
    /// Parse from string (case-insensitive, defaults to `Auto`).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "fixed" | "f" => Self::Fixed,
            "scientific" | "sci" | "e" => Self::Scientific,
            _ => Self::Auto,
        }
    }

    /// Resolve the notation from an optional flag value, falling back to the
    /// environment and then to `Auto`.
    #[must_use]
    pub fn resolve(flag: Option<&str>) -> Self {
        match flag {
            Some(s) => Self::from_str_loose(s),
            None => std::env::var(FORMAT_ENV_VAR)
                .map(|s| Self::from_str_loose(&s))
                .unwrap_or_default(),
        }
    }
}

/// Render a kernel result in the selected notation.
#[must_use]
pub fn format_result(value: f64, notation: Notation) -> String {
    match notation {
        Notation::Fixed => format!("{value:.10}"),
        Notation::Scientific => format!("{value:e}"),
        Notation::Auto => {
            let magnitude = value.abs();
            if magnitude >= SCIENTIFIC_UPPER || (magnitude > 0.0 && magnitude < SCIENTIFIC_LOWER) {
                format!("{value:e}")
            } else {
                format!("{value:.10}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_uses_ten_fractional_digits() {
        assert_eq!(format_result(8.0, Notation::Fixed), "8.0000000000");
        assert_eq!(format_result(0.125, Notation::Fixed), "0.1250000000");
    }

    #[test]
    fn scientific_uses_exponent_rendering() {
        assert_eq!(format_result(1e30, Notation::Scientific), "1e30");
    }

    #[test]
    fn auto_switches_on_magnitude() {
        assert_eq!(format_result(2.0, Notation::Auto), "2.0000000000");
        assert_eq!(format_result(0.0, Notation::Auto), "0.0000000000");
        assert_eq!(format_result(1e30, Notation::Auto), "1e30");
        assert_eq!(format_result(1e-6, Notation::Auto), "1e-6");
    }

    #[test]
    fn loose_parsing_accepts_aliases() {
        assert_eq!(Notation::from_str_loose("FIXED"), Notation::Fixed);
        assert_eq!(Notation::from_str_loose("sci"), Notation::Scientific);
        assert_eq!(Notation::from_str_loose("anything"), Notation::Auto);
    }
}
