//! Color math for the slider. All values are normalized f64 in 0.0–1.0.

/// HSB/HSV → RGB.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h.rem_euclid(1.0) * 6.0) % 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, max)
}

/// Clamp into 0.0–1.0, mapping NaN to 0.0.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fraction of `length` covered by `pos`, clamped to 0.0–1.0.
///
/// A non-positive or NaN length yields 0.0.
pub(crate) fn fraction_along(pos: f64, length: f64) -> f64 {
    if !(length > 0.0) {
        return 0.0;
    }
    clamp_unit(pos.clamp(0.0, length) / length)
}

/// Bounds of the saturation/brightness mapping, derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub original_saturation: f64,
    pub original_brightness: f64,
    pub minimum_saturation: f64,
    pub minimum_brightness: f64,
}

/// Maps a drag fraction to `(saturation, brightness)`.
///
/// The first half raises saturation from its minimum to the original value at
/// full brightness; the second half lowers brightness from the original value
/// to its minimum at full saturation.
pub(crate) fn saturation_brightness_at(fraction: f64, base: &Baseline) -> (f64, f64) {
    let x = clamp_unit(fraction);
    if x <= 0.5 {
        let s = x * 2.0 * (base.original_saturation - base.minimum_saturation)
            + base.minimum_saturation;
        (s, base.original_brightness)
    } else {
        let b = (1.0 - x) * 2.0 * (base.original_brightness - base.minimum_brightness)
            + base.minimum_brightness;
        (base.original_saturation, b)
    }
}
