use crate::core::data::colour::Colour;

/// Rounds an already scaled channel half-to-even and clamps it to a byte.
fn round_channel(scaled: f64) -> u8 {
    scaled.round_ties_even().clamp(0.0, 255.0) as u8
}

fn to_colour(r: f64, g: f64, b: f64) -> Colour {
    Colour {
        r: round_channel(r * 255.0),
        g: round_channel(g * 255.0),
        b: round_channel(b * 255.0),
    }
}

/// Six-sector HSV to RGB conversion.
///
/// Hue is circular: `1.25` and `-0.75` both land on `0.25`. A non-finite hue
/// is read as `0`. Saturation and value are clamped to `[0, 1]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    if saturation == 0.0 {
        return to_colour(value, value, value);
    }

    let hue = if hue.is_finite() { hue } else { 0.0 };
    let scaled = hue * 6.0;
    let sector_start = scaled.floor();
    let fraction = scaled - sector_start;
    let sector = (sector_start as i64).rem_euclid(6);

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match sector {
        0 => to_colour(value, t, p),
        1 => to_colour(q, value, p),
        2 => to_colour(p, value, t),
        3 => to_colour(p, q, value),
        4 => to_colour(t, p, value),
        _ => to_colour(value, p, q),
    }
}
