use std::convert::TryFrom;
use std::io::Read;

use serde::Deserialize;

use super::Pixmap;
use crate::color::Color;
use crate::error::PixmapError;
use crate::error::PMResult;


/// Raw buffer document: `{"width": w, "height": h, "colors": [[a, r, g, b], ...]}`.
#[derive(Deserialize)]
pub struct PixmapRaw {
    width: usize,
    height: usize,
    colors: Vec<Color>,
}

impl TryFrom<PixmapRaw> for Pixmap {
    type Error = PixmapError;

    fn try_from(raw: PixmapRaw) -> Result<Self, Self::Error> {
        Pixmap::from_colors(raw.width, raw.height, raw.colors)
    }
}

pub fn read_pixmap<R: Read>(reader: R) -> PMResult<Pixmap> {
    Ok(serde_json::from_reader(reader)?)
}
