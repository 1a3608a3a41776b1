
mod color;
mod pixmap;
mod error;
mod application;

use std::io;
use std::io::Write;
use std::path::Path;
use std::process;
use std::str::FromStr;

use clap::App;
use clap::Arg;
use clap::ArgMatches;
use clap::SubCommand;
use env_logger::Env;

use color::Color;
use error::PixmapError;


const VERSION: &'static str = env!("CARGO_PKG_VERSION");
const AUTHORS: &'static str = env!("CARGO_PKG_AUTHORS");


fn main() {

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = build_app().get_matches();
    let (name, args) = matches.subcommand();
    let args = if let Some(v) = args {
        v
    } else {
        println!("{}", matches.usage());
        return;
    };
    let stdout = io::stdout();
    if let Err(e) = run(name, args, &mut stdout.lock()) {
        log::error!("{}: {}", name, e);
        process::exit(1);
    }
}

fn build_app() -> App<'static, 'static> {
    App::new("premultiplied color pixmap writer")
        .version(VERSION)
        .author(AUTHORS)
        .subcommand(
            SubCommand::with_name("mix")
            .about("mix two colors and print `a r g b`")
            .arg(
                Arg::with_name("front")
                .long("front")
                .help("front color, as \"a,r,g,b\" with premultiplied channels")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(true)
            )
            .arg(
                Arg::with_name("back")
                .long("back")
                .help("back color, as \"a,r,g,b\" with premultiplied channels")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(true)
            )
        )
        .subcommand(
            SubCommand::with_name("fill")
            .about("write a pixmap of a single color")
            .arg(
                Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(true)
            )
            .arg(
                Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(true)
            )
            .arg(
                Arg::with_name("color")
                .short("c")
                .long("color")
                .help("fill color, as \"a,r,g,b\" with premultiplied channels")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(true)
            )
            .arg(
                Arg::with_name("output")
                .short("o")
                .long("output")
                .help("output file, default is stdout")
                .takes_value(true)
            )
        )
        .subcommand(
            SubCommand::with_name("convert")
            .about("write a pixmap from a raw buffer (.json) or a raster image")
            .arg(
                Arg::with_name("input")
                .short("i")
                .long("input")
                .help("input file")
                .takes_value(true)
                .required(true)
            )
            .arg(
                Arg::with_name("output")
                .short("o")
                .long("output")
                .help("output file, default is stdout")
                .takes_value(true)
            )
            .arg(
                Arg::with_name("background")
                .long("background")
                .help("color mixed behind every pixel, as \"a,r,g,b\"")
                .takes_value(true)
                .allow_hyphen_values(true)
            )
        )
}

/// Runs one subcommand; `mix` prints to `out`, pixmaps go to the
/// configured output.
fn run<W: Write>(name: &str, args: &ArgMatches, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    match name {
        "mix" => {
            let front = Color::from_str(args.value_of("front").unwrap_or_default())?;
            let back = Color::from_str(args.value_of("back").unwrap_or_default())?;
            let c = front.mix(back);
            writeln!(out, "{} {} {} {}", c.a, c.r, c.g, c.b).map_err(PixmapError::Io)?;
            out.flush().map_err(PixmapError::Io)?;
        },

        "fill" => {
            let width = parse_size(args.value_of("width"), "width")?;
            let height = parse_size(args.value_of("height"), "height")?;
            let color = Color::from_str(args.value_of("color").unwrap_or_default())?;
            let mut options = application::AppOptions::default();
            options.set_output_file(args.value_of("output"));
            application::Application::new(options).fill(width, height, color)?;
        },

        "convert" => {
            let mut options = application::AppOptions::default();
            options.set_output_file(args.value_of("output"));
            if let Some(bg) = args.value_of("background") {
                options.set_background(Some(Color::from_str(bg)?));
            }
            let input = Path::new(args.value_of("input").unwrap_or_default());
            application::Application::new(options).convert(input)?;
        },

        _ => {

        }
    }
    Ok(())
}

fn parse_size(value: Option<&str>, name: &str) -> Result<usize, PixmapError> {
    let value = value.unwrap_or_default();
    value.parse().map_err(|e| PixmapError::Parse(format!("{} `{}`: {}", name, value, e)))
}


#[cfg(test)]
mod test {

    use super::*;

    fn run_args(argv: &[&str]) -> (Result<(), Box<dyn std::error::Error>>, String) {
        let mut full = vec!["premul_pixmap"];
        full.extend_from_slice(argv);
        let matches = build_app().get_matches_from_safe(full).unwrap();
        let (name, args) = matches.subcommand();
        let mut out = Vec::new();
        let res = run(name, args.unwrap(), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    fn is_parse_error(res: &Result<(), Box<dyn std::error::Error>>) -> bool {
        match res {
            Err(e) => match e.downcast_ref::<PixmapError>() {
                Some(PixmapError::Parse(_)) => true,
                _ => false,
            },
            Ok(()) => false,
        }
    }

    #[test]
    fn test_mix_output() {
        let (res, out) = run_args(&["mix", "--front", "1,1,0,0", "--back", "1,0,0,1"]);
        assert!(res.is_ok());
        assert_eq!(out, "2 0.5 0 0.5\n");

        let (res, out) = run_args(&["mix", "--front", "0,1,1,1", "--back", "0,1,0,1"]);
        assert!(res.is_ok());
        assert_eq!(out, "0 0 0 0\n");
    }

    #[test]
    fn test_mix_bad_color() {
        let (res, out) = run_args(&["mix", "--front", "1,1,0", "--back", "1,0,0,1"]);
        assert!(is_parse_error(&res));
        assert!(out.is_empty());
    }

    #[test]
    fn test_fill_negative_size() {
        let (res, _) = run_args(&["fill", "--width", "-1", "--height", "2", "--color", "1,1,1,1"]);
        assert!(is_parse_error(&res));
        let (res, _) = run_args(&["fill", "--width", "2", "--height", "-3", "--color", "1,1,1,1"]);
        assert!(is_parse_error(&res));
    }

    #[test]
    fn test_fill_to_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("premul_pixmap-cli-{}", std::process::id()));
        path.push("fill.ppm");
        let path_str = path.to_str().unwrap();
        let (res, out) = run_args(&["fill", "--width", "1", "--height", "1", "--color", "1,0,0,1", "-o", path_str]);
        assert!(res.is_ok());
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "P3\n1\n1\n255\n0 0 255 \n");
    }

    #[test]
    fn test_convert_bad_background() {
        let (res, _) = run_args(&["convert", "-i", "unused.json", "--background", "1,x,0,0"]);
        assert!(is_parse_error(&res));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(Some("7"), "width").unwrap(), 7);
        assert_eq!(parse_size(Some("0"), "height").unwrap(), 0);
        for value in &["-1", "", "2.5", "x"] {
            match parse_size(Some(*value), "width") {
                Err(PixmapError::Parse(_)) => {},
                other => panic!("`{}` parsed as {:?}", value, other),
            }
        }
    }

    struct ClosedStdout;

    impl Write for ClosedStdout {

        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mix_closed_output() {
        let matches = build_app()
            .get_matches_from_safe(vec!["premul_pixmap", "mix", "--front", "1,1,0,0", "--back", "1,0,0,1"])
            .unwrap();
        let (name, args) = matches.subcommand();
        let res = run(name, args.unwrap(), &mut ClosedStdout);
        match res {
            Err(e) => match e.downcast_ref::<PixmapError>() {
                Some(PixmapError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
                other => panic!("unexpected {:?}", other),
            },
            Ok(()) => panic!("write to a closed output succeeded"),
        }
    }
}
