use std::fmt;
use std::io;


#[derive(Debug)]
pub enum PixmapError {

    /// color buffer length does not match `width * height`
    BufferSize { expected: usize, actual: usize },

    /// `width * height` overflows `usize`
    Dimensions { width: usize, height: usize },

    Io(io::Error),

    Parse(String),

    Image(image::ImageError),
}

impl fmt::Display for PixmapError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixmapError::BufferSize { expected, actual } => {
                write!(f, "color buffer holds {} pixels, expected {}", actual, expected)
            },
            PixmapError::Dimensions { width, height } => {
                write!(f, "image size {}x{} is too large", width, height)
            },
            PixmapError::Io(e) => write!(f, "io error: {}", e),
            PixmapError::Parse(s) => write!(f, "parse error: {}", s),
            PixmapError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for PixmapError {

    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixmapError::Io(e) => Some(e),
            PixmapError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PixmapError {

    fn from(e: io::Error) -> Self {
        PixmapError::Io(e)
    }
}

impl From<serde_json::Error> for PixmapError {

    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            PixmapError::Io(e.into())
        } else {
            PixmapError::Parse(e.to_string())
        }
    }
}

impl From<image::ImageError> for PixmapError {

    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(err) => PixmapError::Io(err),
            other => PixmapError::Image(other),
        }
    }
}

pub type PMResult<T> = Result<T, PixmapError>;
