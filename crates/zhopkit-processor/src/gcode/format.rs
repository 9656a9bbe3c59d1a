//! Number rendering for synthesized lines
//!
//! Downstream tools match the historic output of this post-processor, so
//! coordinates are rounded to 5 decimals and printed as the shortest
//! round-trip decimal that always carries a fractional part (`7.0`, not `7`).
//! Non-zero magnitudes below 1e-4 use exponent form with at least two
//! exponent digits (`1e-05`).

/// Decimal places kept in synthesized coordinates
pub const COORDINATE_PRECISION: usize = 5;

/// Round to `places` decimals, correctly rounded from the exact binary value
pub fn round_decimal(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Round to [`COORDINATE_PRECISION`] and render for a G-code word
pub fn format_coordinate(value: f64) -> String {
    render(round_decimal(value, COORDINATE_PRECISION))
}

fn render(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && (magnitude < 1e-4 || magnitude >= 1e16) {
        return render_exponent(value);
    }

    let plain = value.to_string();
    if plain.contains('.') || !value.is_finite() {
        plain
    } else {
        format!("{plain}.0")
    }
}

fn render_exponent(value: f64) -> String {
    let shortest = format!("{value:e}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => shortest,
        },
        None => shortest,
    }
}
