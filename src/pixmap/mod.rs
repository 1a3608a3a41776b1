
pub mod de;

use std::io::Write;

use image::RgbaImage;
use serde::Deserialize;

use crate::color::Color;
use crate::error::PixmapError;
use crate::error::PMResult;


const MAX_VALUE: u32 = 255;

const SCALE: f64 = 255.99;

/// Maps a channel to the 8-bit scale as `floor(q * 255.99)`, with the
/// product taken in `f64`.
///
/// Out-of-range input is not clamped: `quantize(2.0) == 511`,
/// `quantize(-0.5) == -128`. NaN maps to 0.
pub fn quantize(q: f32) -> i32 {
    (q as f64 * SCALE).floor() as i32
}

/// Writes `colors` (row-major, `width * height` entries) as a plain-text
/// `P3` pixmap and flushes `sink`.
///
/// Only red, green and blue are written.
pub fn write_image<W: Write>(sink: &mut W, width: usize, height: usize, colors: &[Color]) -> PMResult<()> {
    let expected = pixel_count(width, height)?;
    if colors.len() != expected {
        return Err(PixmapError::BufferSize { expected, actual: colors.len() });
    }
    if colors.iter().any(|c| !c.is_finite()) {
        log::warn!("{}x{} image holds non-finite channels", width, height);
    }
    write!(sink, "P3\n{}\n{}\n{}\n", width, height, MAX_VALUE)?;
    for y in 0 .. height {
        for c in &colors[y * width .. (y + 1) * width] {
            write!(sink, "{} {} {} ", quantize(c.r), quantize(c.g), quantize(c.b))?;
        }
        sink.write_all(b"\n")?;
    }
    sink.flush()?;
    Ok(())
}

fn pixel_count(width: usize, height: usize) -> PMResult<usize> {
    width.checked_mul(height).ok_or(PixmapError::Dimensions { width, height })
}


/// Owned row-major color buffer with its dimensions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "de::PixmapRaw")]
pub struct Pixmap {
    width: usize,
    height: usize,
    colors: Vec<Color>,
}

impl Pixmap {

    pub fn filled(width: usize, height: usize, color: Color) -> PMResult<Self> {
        let n = pixel_count(width, height)?;
        Ok(Pixmap {
            width,
            height,
            colors: vec![color; n],
        })
    }

    pub fn from_colors(width: usize, height: usize, colors: Vec<Color>) -> PMResult<Self> {
        let expected = pixel_count(width, height)?;
        if colors.len() != expected {
            return Err(PixmapError::BufferSize { expected, actual: colors.len() });
        }
        Ok(Pixmap {
            width,
            height,
            colors,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn colors(&self) -> &[Color] {
        self.colors.as_slice()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Color> {
        if x < self.width && y < self.height {
            self.colors.get(x + y * self.width)
        } else {
            None
        }
    }

    /// Mixes every pixel, as the front color, with `back`.
    pub fn mix_over(&mut self, back: Color) {
        for c in self.colors.iter_mut() {
            *c = c.mix(back);
        }
    }

    pub fn write_to<W: Write>(&self, sink: &mut W) -> PMResult<()> {
        write_image(sink, self.width, self.height, &self.colors)
    }
}

impl From<&RgbaImage> for Pixmap {

    fn from(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Pixmap {
            width: width as usize,
            height: height as usize,
            colors: img.pixels().map(|p| Color::from(*p)).collect(),
        }
    }
}
