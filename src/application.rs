use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::color::Color;
use crate::error::PMResult;
use crate::pixmap::Pixmap;
use crate::pixmap::de::read_pixmap;


pub struct AppOptions {
    output_file: Option<PathBuf>,
    background: Option<Color>,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            output_file: None,
            background: None,
        }
    }
}

impl AppOptions {

    /// `None` writes to stdout.
    pub fn set_output_file(&mut self, path: Option<&str>) {
        self.output_file = path.map(PathBuf::from);
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    pub fn ensure_output_folder(&self) -> io::Result<()> {
        match self.output_file.as_ref().and_then(|f| f.parent()) {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => fs::create_dir_all(dir),
            _ => Ok(()),
        }
    }
}

pub struct Application {
    options: AppOptions,
}

impl Application {

    pub fn new(options: AppOptions) -> Self {
        Application {
            options
        }
    }

    /// Buffered sink over the output file, or stdout.
    pub fn open_sink(&self) -> PMResult<Box<dyn Write>> {
        match &self.options.output_file {
            Some(path) => {
                self.options.ensure_output_folder()?;
                let file = File::create(path)?;
                Ok(Box::new(BufWriter::new(file)))
            },
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }

    pub fn write(&self, pixmap: &Pixmap) -> PMResult<()> {
        let mut sink = self.open_sink()?;
        pixmap.write_to(&mut sink)?;
        match &self.options.output_file {
            Some(path) => log::info!("{}x{} pixmap written to {}", pixmap.width(), pixmap.height(), path.display()),
            None => log::info!("{}x{} pixmap written to stdout", pixmap.width(), pixmap.height()),
        }
        Ok(())
    }

    pub fn fill(&self, width: usize, height: usize, color: Color) -> PMResult<()> {
        let pixmap = Pixmap::filled(width, height, color)?;
        self.write(&pixmap)
    }

    /// Reads a raw buffer document (`.json`) or any raster image the
    /// `image` crate decodes, mixes the background in if one is set, and
    /// writes the result.
    pub fn convert(&self, input: &Path) -> PMResult<()> {
        let mut pixmap = load_pixmap(input)?;
        log::info!("loaded {}x{} from {}", pixmap.width(), pixmap.height(), input.display());
        if let Some(background) = self.options.background {
            pixmap.mix_over(background);
        }
        self.write(&pixmap)
    }
}

pub fn load_pixmap(input: &Path) -> PMResult<Pixmap> {
    let is_json = input.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let file = File::open(input)?;
        read_pixmap(BufReader::new(file))
    } else {
        let img = image::open(input)?.to_rgba8();
        Ok(Pixmap::from(&img))
    }
}
