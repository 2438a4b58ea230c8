use std::time::Instant;

use cgmath::{vec2, Vector2};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::{
    camera::Camera,
    image::{Image, RGB},
    postprocessing,
    scene::Scene,
    shading::pixel_color,
    types::{Float, Vec2},
};

/// Renders every pixel of `scene` in parallel.
///
/// Each pixel averages `scene.samples` rays spread over a stratified grid
/// inside it. Shading is deterministic, and so is jitter (seeded per pixel),
/// so the same scene always produces the same image.
pub fn render(scene: &Scene) -> Image {
    let width = scene.dimensions.x;
    let height = scene.dimensions.y;
    let camera = Camera::new(&scene.camera, width, height);
    let mut img = Image::new(width, height);

    info!(
        "Rendering {}x{}, {} samples per pixel, {} primitives",
        width,
        height,
        scene.samples,
        scene.geometry.primitives.len()
    );
    debug!("Shading: {:?}", scene.shading);
    let started = Instant::now();

    img.pixels.par_iter_mut().enumerate().for_each(|(index, pixel)| {
        let x = index % width;
        let y = index / width;
        let color = sample_pixel(scene, &camera, vec2(x, y), index as u64);
        *pixel = postprocessing::apply(&scene.post, color);
    });

    info!("Rendered in {:.2}s", started.elapsed().as_secs_f32());
    img
}

fn sample_pixel(scene: &Scene, camera: &Camera, pixel: Vector2<usize>, seed: u64) -> RGB {
    let mut rng = scene.jitter.then(|| StdRng::seed_from_u64(seed));
    let offsets = sub_pixel_offsets(scene.samples, rng.as_mut());
    let sum = offsets
        .iter()
        .map(|offset| pixel_color(&camera.ray(pixel, *offset), &scene.geometry, &scene.shading))
        .fold(RGB::new(0.0, 0.0, 0.0), |acc, color| acc + color);
    sum / offsets.len() as Float
}

/// `count` offsets in [0, 1)², one per cell of a near-square grid. Cell
/// centers unless an rng is given to jitter within each cell.
pub fn sub_pixel_offsets(count: usize, mut rng: Option<&mut StdRng>) -> Vec<Vec2> {
    let columns = (count as Float).sqrt().ceil().max(1.0) as usize;
    let rows = (count + columns - 1) / columns;
    (0..count)
        .map(|i| {
            let (jx, jy) = match rng.as_deref_mut() {
                Some(rng) => (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)),
                None => (0.5, 0.5),
            };
            vec2(
                ((i % columns) as Float + jx) / columns as Float,
                ((i / columns) as Float + jy) / rows as Float,
            )
        })
        .collect()
}
