//! Color utilities for plots

use egui::Color32;

/// Dark end of every palette
pub const GREEN: Color32 = Color32::from_rgb(0, 128, 0);

/// Near-white, slightly green light end of the palette
pub const LIGHT_GREEN_GRAY: Color32 = Color32::from_rgb(235, 243, 235);

/// Density curve drawn over histograms
pub const DENSITY_COLOR: Color32 = Color32::from_rgb(0, 100, 0);

/// Sequential light-to-green palette with `n` entries.
///
/// Colors are blended linearly in RGB and sampled evenly from the light end
/// to pure green. A single-entry palette is just the light end.
pub fn light_palette(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![LIGHT_GREEN_GRAY],
        _ => (0..n)
            .map(|i| blend(LIGHT_GREEN_GRAY, GREEN, i as f32 / (n - 1) as f32))
            .collect(),
    }
}

/// Linear RGB blend from `from` (t = 0) to `to` (t = 1)
pub fn blend(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sizes() {
        assert!(light_palette(0).is_empty());
        assert_eq!(light_palette(1), vec![LIGHT_GREEN_GRAY]);
        assert_eq!(light_palette(9).len(), 9);
    }

    #[test]
    fn test_palette_endpoints() {
        let palette = light_palette(5);
        assert_eq!(palette[0], LIGHT_GREEN_GRAY);
        assert_eq!(palette[4], GREEN);
    }

    #[test]
    fn test_palette_darkens_monotonically() {
        let palette = light_palette(6);
        for pair in palette.windows(2) {
            assert!(pair[1].r() <= pair[0].r());
            assert!(pair[1].b() <= pair[0].b());
        }
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(Color32::from_rgb(0, 0, 0), Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}
