use clap::{App, Arg, ArgMatches};
use log::info;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use mandelbrot::{write_image, MandelbrotError, Renderer};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Image sides must be at least one pixel".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

const DEFAULT_SIZE: &str = "1920x1080";
const DEFAULT_ITERATIONS: &str = "5000";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("0.1.0")
        .about("Mandelbrot escape-time renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(mandelbrot::OUTPUT)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(DEFAULT_SIZE)
                .validator(|s| validate_size(&s))
                .help("Size of output image, WIDTHxHEIGHT, at most 2^28 pixels"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(DEFAULT_ITERATIONS)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Iterations after which a point is taken to be in the set"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), MandelbrotError> {
    // The validators have already vetted every value below.
    // Paths need not be UTF-8.
    let output = matches
        .value_of_os(OUTPUT)
        .map(Path::new)
        .unwrap_or_else(|| Path::new(mandelbrot::OUTPUT));
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .map(|(w, h)| (usize::from(w), usize::from(h)))
        .unwrap_or((mandelbrot::WIDTH, mandelbrot::HEIGHT));
    let iterations = matches
        .value_of(ITERATIONS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(mandelbrot::MAX_ITERATIONS);
    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(1);

    let renderer = Renderer::with_size(width, height, iterations)?;
    info!(
        "rendering {}x{} at {} iterations on {} thread(s)",
        width, height, iterations, threads
    );
    let started = Instant::now();
    let raster = renderer.render_threaded(threads)?;
    info!("rendered in {:?}", started.elapsed());

    write_image(output, &raster)?;
    info!("wrote {}", output.display());
    println!("Mandelbrot set image saved as {}", output.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
