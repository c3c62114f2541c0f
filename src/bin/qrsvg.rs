// Command line front end: encode content and emit an SVG document or text art
use std::env;
use std::fs;
use std::process;
use std::str::FromStr;

use qr_svg::debug::matrix_to_text;
use qr_svg::{ECLevel, RenderOptions, SvgOptions, encode, svg};

const USAGE: &str = "\
Usage: qrsvg [OPTIONS] <CONTENT>

Options:
  --level <L|M|Q|H>   Error correction level (default: M)
  --size <UNITS>      Document width and height (default: 256)
  --circles           Draw the finder patterns as circular markers
  --clear <MODULES>   Clear a centered square for a logo overlay
  --ascii             Print the module matrix as text instead of SVG
  --out <FILE>        Write the output to a file instead of stdout
  -h, --help          Show this help
";

fn main() {
    // Diagnostics go to stderr so the document on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut content: Option<String> = None;
    let mut level = ECLevel::default();
    let mut size = 256.0f64;
    let mut circles = false;
    let mut clear: Option<usize> = None;
    let mut ascii = false;
    let mut out: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--level" => level = parse_value(&mut args, "--level"),
            "--size" => size = parse_value(&mut args, "--size"),
            "--circles" => circles = true,
            "--clear" => clear = Some(parse_value(&mut args, "--clear")),
            "--ascii" => ascii = true,
            "--out" => out = Some(next_value(&mut args, "--out")),
            "-h" | "--help" => {
                print!("{}", USAGE);
                return;
            }
            _ if arg.starts_with('-') => usage_error(&format!("unknown option: {}", arg)),
            _ => {
                if content.is_some() {
                    usage_error("expected exactly one content argument");
                }
                content = Some(arg);
            }
        }
    }

    let Some(content) = content else {
        usage_error("missing content argument");
    };

    if ascii {
        match encode(&content, level) {
            Ok(mut symbol) => {
                if let Some(width) = clear {
                    symbol.clear_center(width, None);
                }
                write_output(out.as_deref(), &matrix_to_text(symbol.matrix()));
            }
            Err(err) => fail(&err),
        }
        return;
    }

    let options = SvgOptions {
        ec_level: level,
        clear_center: clear,
        render: RenderOptions {
            size,
            corner_blocks_as_circles: circles,
            ..RenderOptions::default()
        },
    };
    match svg(&content, options) {
        Ok(document) => write_output(out.as_deref(), &document),
        Err(err) => fail(&err),
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => usage_error(&format!("{} requires a value", flag)),
    }
}

fn parse_value<T: FromStr>(args: &mut impl Iterator<Item = String>, flag: &str) -> T
where
    T::Err: std::fmt::Display,
{
    let raw = next_value(args, flag);
    match raw.parse() {
        Ok(value) => value,
        Err(err) => usage_error(&format!("invalid value for {}: {}", flag, err)),
    }
}

fn write_output(path: Option<&str>, data: &str) {
    match path {
        Some(path) => {
            if let Err(err) = fs::write(path, data) {
                eprintln!("qrsvg: cannot write {}: {}", path, err);
                process::exit(1);
            }
        }
        None => println!("{}", data),
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("qrsvg: {}", message);
    eprintln!();
    eprint!("{}", USAGE);
    process::exit(2)
}

fn fail(err: &qr_svg::Error) -> ! {
    eprintln!("qrsvg: {}", err);
    process::exit(1)
}
