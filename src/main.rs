/// Point cloud to texture converter main entry point
use point_to_texture::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use point_to_texture::dds_writer::{write_rgba16f_texture, write_rgba32f_texture};
use point_to_texture::frame::{FrameProcessor, PointSource};
use point_to_texture::laz::{LasPointSource, log_file_info};
use point_to_texture::metadata::TextureMetadata;
use std::env;
use std::path::Path;

struct CliOptions {
    input: String,
    width: usize,
    height: usize,
    normalize: bool,
    half: bool,
    output_stem: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut input = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut normalize = false;
    let mut half = false;
    let mut output_stem = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--width" => {
                let value = iter.next().ok_or("--width requires a value")?;
                width = value
                    .parse()
                    .map_err(|_| format!("Invalid width: {}", value))?;
            }
            "--height" => {
                let value = iter.next().ok_or("--height requires a value")?;
                height = value
                    .parse()
                    .map_err(|_| format!("Invalid height: {}", value))?;
            }
            "--normalize" => normalize = true,
            "--half" => half = true,
            "--output" => {
                let value = iter.next().ok_or("--output requires a value")?;
                output_stem = Some(value.clone());
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {}", other));
            }
            other => {
                if input.is_some() {
                    return Err(format!("Unexpected argument: {}", other));
                }
                input = Some(other.to_string());
            }
        }
    }

    Ok(CliOptions {
        input: input.ok_or("Missing input file")?,
        width,
        height,
        normalize,
        half,
        output_stem,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!(
                "Usage: {} <input.las|.laz> [--width N] [--height N] [--normalize] [--half] [--output STEM]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    let input_path = Path::new(&opts.input);

    println!(
        "Converting {} to texture ({}x{})...",
        input_path.display(),
        opts.width,
        opts.height
    );

    log_file_info(input_path)?;

    let source = LasPointSource::load(input_path, opts.normalize)?;
    println!("Loaded {} points from {}", source.point_count(), source.name());

    let mut processor = FrameProcessor::new(opts.width, opts.height)?;
    let buffer = processor.execute(Some(&source))?;

    for row in processor.info_rows() {
        println!("  {}: {}", row.name, row.value);
    }

    let stem = opts.output_stem.unwrap_or_else(|| {
        opts.input
            .trim_end_matches(".laz")
            .trim_end_matches(".las")
            .to_string()
    });

    let format = if opts.half { "RGBA16F" } else { "RGBA32F" };
    let dds_path = format!("{}_{}x{}.dds", stem, opts.width, opts.height);

    if opts.half {
        write_rgba16f_texture(&dds_path, opts.width, opts.height, buffer.data())?;
    } else {
        write_rgba32f_texture(&dds_path, opts.width, opts.height, buffer.data())?;
    }
    println!("Saved {} (Position {})", dds_path, format);

    let metadata = TextureMetadata::new(
        opts.width,
        opts.height,
        format,
        source.name(),
        source.point_count(),
        opts.normalize,
        source.bounds().cloned(),
        processor.execute_count(),
    );

    let metadata_path = format!("{}_{}x{}.json", stem, opts.width, opts.height);
    metadata.write(Path::new(&metadata_path))?;
    metadata.print_summary();

    println!("Conversion complete!");
    Ok(())
}
