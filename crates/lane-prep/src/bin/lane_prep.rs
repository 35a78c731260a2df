use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use image::{ImageBuffer, ImageReader, Luma, Rgb};
use lane_prep::{CornerMasker, Frame, FrameView, PipelineConfig};
use log::{info, warn, LevelFilter};

/// Black out the top corner wedges of a captured frame.
#[derive(Parser, Debug)]
#[command(name = "lane-prep", version)]
struct Args {
    /// Input image.
    input: PathBuf,
    /// Output path for the masked image.
    #[arg(short, long, default_value = "masked.png")]
    output: PathBuf,
    /// JSON pipeline configuration; documented defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Convert the input to grayscale before masking.
    #[arg(long)]
    gray: bool,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = lane_prep_core::init_with_level(level);

    let cfg = match &args.config {
        Some(path) => PipelineConfig::load_json(path)?,
        None => PipelineConfig::default(),
    };

    let t_load = Instant::now();
    let decoded = ImageReader::open(&args.input)?.decode()?;
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    let (data, channels) = if args.gray {
        (decoded.to_luma8().into_raw(), 1)
    } else {
        (decoded.to_rgb8().into_raw(), 3)
    };
    info!(
        "loaded {} ({}x{}x{}) in {} ms",
        args.input.display(),
        width,
        height,
        channels,
        t_load.elapsed().as_millis()
    );

    if width != cfg.image.width as usize || height != cfg.image.height as usize {
        warn!(
            "input is {}x{}, configured capture size is {}x{}",
            width, height, cfg.image.width, cfg.image.height
        );
    }

    let view = FrameView {
        width,
        height,
        channels,
        data: &data,
    };
    let masker = CornerMasker::new(cfg.mask);

    let t_crop = Instant::now();
    let masked = masker.crop(&view)?;
    info!("masked frame in {} ms", t_crop.elapsed().as_millis());

    save_frame(&args.output, masked)?;
    println!("wrote masked image to {}", args.output.display());

    Ok(())
}

fn save_frame(path: &PathBuf, frame: Frame) -> Result<(), image::ImageError> {
    let (w, h) = (frame.width as u32, frame.height as u32);
    match frame.channels {
        1 => ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(w, h, frame.data)
            .expect("masked frame has the input dimensions")
            .save(path),
        _ => ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(w, h, frame.data)
            .expect("masked frame has the input dimensions")
            .save(path),
    }
}
