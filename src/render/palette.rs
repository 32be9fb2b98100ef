use plotters::style::RGBColor;

/// Sequential colour maps used for the two heatmap panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Palette {
    /// Yellow -> green -> blue, used for calls
    #[default]
    YlGnBu,
    /// Yellow -> orange -> red, used for puts
    YlOrRd,
}

const YL_GN_BU: [(u8, u8, u8); 9] = [
    (0xff, 0xff, 0xd9),
    (0xed, 0xf8, 0xb1),
    (0xc7, 0xe9, 0xb4),
    (0x7f, 0xcd, 0xbb),
    (0x41, 0xb6, 0xc4),
    (0x1d, 0x91, 0xc0),
    (0x22, 0x5e, 0xa8),
    (0x25, 0x34, 0x94),
    (0x08, 0x1d, 0x58),
];

const YL_OR_RD: [(u8, u8, u8); 9] = [
    (0xff, 0xff, 0xcc),
    (0xff, 0xed, 0xa0),
    (0xfe, 0xd9, 0x76),
    (0xfe, 0xb2, 0x4c),
    (0xfd, 0x8d, 0x3c),
    (0xfc, 0x4e, 0x2a),
    (0xe3, 0x1a, 0x1c),
    (0xbd, 0x00, 0x26),
    (0x80, 0x00, 0x26),
];

impl Palette {
    pub fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            Palette::YlGnBu => &YL_GN_BU,
            Palette::YlOrRd => &YL_OR_RD,
        }
    }
}

/// Colour for `value` on a linear scale from `min` (first stop) to `max` (last stop).
///
/// Values outside the scale are clamped; a flat scale maps to the first stop.
pub fn color_for(value: f64, min: f64, max: f64, palette: Palette) -> RGBColor {
    let stops = palette.stops();
    let span = max - min;
    let t = if span > 0.0 && value.is_finite() {
        ((value - min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let scaled = t * (stops.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(stops.len() - 1);
    let hi = (lo + 1).min(stops.len() - 1);
    let frac = scaled - lo as f64;

    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = stops[lo];
    let (r1, g1, b1) = stops[hi];
    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Annotation colour with enough contrast against `background`.
pub fn text_color_on(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luminance > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_first_and_last_stop() {
        assert_eq!(color_for(0.0, 0.0, 10.0, Palette::YlGnBu), RGBColor(0xff, 0xff, 0xd9));
        assert_eq!(color_for(10.0, 0.0, 10.0, Palette::YlGnBu), RGBColor(0x08, 0x1d, 0x58));
        assert_eq!(color_for(99.0, 0.0, 10.0, Palette::YlOrRd), RGBColor(0x80, 0x00, 0x26));
    }

    #[test]
    fn flat_scale_uses_first_stop() {
        assert_eq!(color_for(3.0, 3.0, 3.0, Palette::YlOrRd), RGBColor(0xff, 0xff, 0xcc));
    }

    #[test]
    fn midpoint_hits_middle_stop() {
        // 9 stops: t = 0.5 lands exactly on index 4
        assert_eq!(color_for(5.0, 0.0, 10.0, Palette::YlOrRd), RGBColor(0xfd, 0x8d, 0x3c));
    }

    #[test]
    fn annotation_contrast() {
        assert_eq!(text_color_on(RGBColor(0xff, 0xff, 0xd9)), RGBColor(0, 0, 0));
        assert_eq!(text_color_on(RGBColor(0x08, 0x1d, 0x58)), RGBColor(255, 255, 255));
    }
}
