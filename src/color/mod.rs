
pub mod calculate;
pub mod de;

use image::Rgba;
use serde::Deserialize;
use serde::Serialize;


/// Color with premultiplied alpha: `r`, `g` and `b` already carry the
/// coverage factor `a`.
///
/// Channels are not range-checked; mixing may push them outside `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    pub a: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {

    pub const TRANSPARENT: Color = Color { a: 0.0, r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(a: f32, r: f32, g: f32, b: f32) -> Self {
        Color { a, r, g, b }
    }

    /// See [`calculate::mix`].
    pub fn mix(self, back: Color) -> Color {
        calculate::mix(self, back)
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<Rgba<u8>> for Color {

    /// Premultiplies a straight-alpha 8-bit pixel.
    fn from(p: Rgba<u8>) -> Self {
        let a = p[3] as f32 / 255.0;
        Color {
            a,
            r: p[0] as f32 / 255.0 * a,
            g: p[1] as f32 / 255.0 * a,
            b: p[2] as f32 / 255.0 * a,
        }
    }
}


#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let c = Color::new(0.25, -1.5, 2.0, 0.125);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, -1.5);
        assert_eq!(c.g, 2.0);
        assert_eq!(c.b, 0.125);
    }

    #[test]
    fn test_from_rgba() {
        let c = Color::from(Rgba([255, 0, 255, 255]));
        assert_eq!(c, Color::new(1.0, 1.0, 0.0, 1.0));

        let c = Color::from(Rgba([255, 255, 255, 0]));
        assert_eq!(c, Color::TRANSPARENT);

        let c = Color::from(Rgba([255, 0, 0, 51]));
        assert!((c.a - 0.2).abs() < 1e-6);
        assert!((c.r - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_is_finite() {
        assert!(Color::new(1.0, 0.5, 0.0, 2.0).is_finite());
        assert!(!Color::new(1.0, f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Color::new(f32::INFINITY, 0.0, 0.0, 0.0).is_finite());
    }
}
