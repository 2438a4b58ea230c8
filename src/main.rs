use std::{fs::File, io::BufWriter, path::Path};

use log::{error, info};

use error::RenderError;
use image::Image;
use scene::Scene;

mod bitmap;
mod camera;
mod error;
mod image;
mod logger;
mod march;
mod material;
mod math;
mod normal;
mod parsed_scene;
mod postprocessing;
mod ppm;
mod primitives;
mod ray;
mod render;
mod scene;
mod scene_parser;
mod sdf;
mod shading;
mod shadow;
mod types;

fn main() {
    logger::init_logger();

    let Some(output_file_name) = std::env::args().nth(1) else {
        error!("You must specify the output file (.bmp or .ppm), optionally followed by a scene file or preset name");
        std::process::exit(2);
    };
    let scene_source = std::env::args().nth(2).unwrap_or_else(|| "showcase".to_string());

    if let Err(err) = run(&output_file_name, &scene_source) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(output_file_name: &str, scene_source: &str) -> Result<(), RenderError> {
    // Fail on a bad extension before spending time rendering.
    let format = OutputFormat::from_path(Path::new(output_file_name))?;

    info!("Loading scene '{scene_source}'");
    let scene = Scene::new(scene_parser::load_scene(scene_source)?)?;
    let img = render::render(&scene);

    save(&img, format, output_file_name)?;
    info!("Wrote {output_file_name}");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Bitmap,
    Ppm,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self, RenderError> {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("bmp") => Ok(Self::Bitmap),
            Some("ppm") => Ok(Self::Ppm),
            _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn save(img: &Image, format: OutputFormat, output_file_name: &str) -> Result<(), RenderError> {
    let out = BufWriter::new(File::create(output_file_name)?);
    match format {
        OutputFormat::Bitmap => bitmap::write_bitmap(img, out),
        OutputFormat::Ppm => ppm::write_ppm(img, out),
    }
}
