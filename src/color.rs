use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Series colours stay stable across redraws because the palette is a pure
/// function of the series count.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 360.0 * i as f32 / n as f32;
            let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
            let rgb = rgb.into_format::<u8>();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_for_zero_series() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn one_color_per_series() {
        for n in [1, 7, 32] {
            assert_eq!(generate_palette(n).len(), n);
        }
    }

    #[test]
    fn colors_are_pairwise_distinct() {
        // Seven series is what the benchmark files actually carry.
        let palette = generate_palette(7);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
