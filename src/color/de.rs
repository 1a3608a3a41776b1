use std::str::FromStr;

use super::Color;
use crate::error::PixmapError;


impl From<[f32; 4]> for Color {

    fn from(v: [f32; 4]) -> Self {
        Color::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Color> for [f32; 4] {

    fn from(c: Color) -> Self {
        [c.a, c.r, c.g, c.b]
    }
}

/// Parses `"a,r,g,b"`; whitespace around each channel is ignored.
impl FromStr for Color {
    type Err = PixmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut v = [0.0f32; 4];
        let mut sp = s.split(',');
        for (i, name) in ["a", "r", "g", "b"].iter().enumerate() {
            let field = sp.next().ok_or_else(|| PixmapError::Parse(format!("`{}`: missing channel {}", s, name)))?;
            v[i] = field.trim().parse().map_err(|e| PixmapError::Parse(format!("`{}`: channel {}: {}", s, name, e)))?;
        }
        if sp.next().is_some() {
            return Err(PixmapError::Parse(format!("`{}`: expected 4 channels", s)));
        }
        Ok(Color::from(v))
    }
}
