use std::{env, path::PathBuf};

use image::{ImageBuffer, ImageReader, Luma};
use lane_prep::CornerMasker;
use lane_prep_core::FrameView;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frame.png"));
    let output = env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frame_masked.png"));

    let img = ImageReader::open(&input)?.decode()?.to_luma8();
    let view = FrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        channels: 1,
        data: img.as_raw(),
    };

    let masked = CornerMasker::default().crop(&view)?;

    let out = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(
        masked.width as u32,
        masked.height as u32,
        masked.data,
    )
    .expect("masked frame has the input dimensions");
    out.save(&output)?;
    println!("wrote masked image to {}", output.display());

    Ok(())
}
