pub mod camera;
pub mod error;
pub mod floor;
pub mod framebuffer;
pub mod intersection;
pub mod light;
pub mod material;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod utils;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info, warn};

use crate::{
    camera::Camera,
    error::Error,
    renderer::{Raytracer, TraceSettings},
    scene::Scene,
};

/// Whitted-style raytracer: spheres, point lights and a checkerboard floor.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scene description (JSON). Renders the built-in showcase when omitted.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    #[arg(long, default_value_t = 1024)]
    width: usize,

    #[arg(long, default_value_t = 768)]
    height: usize,

    /// Vertical field of view in degrees.
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Output image; the extension picks the format (ppm, png, ...).
    #[arg(short, long, default_value = "result.ppm")]
    output: PathBuf,

    /// Worker threads, 0 lets rayon decide.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,
}

fn run(args: Args) -> Result<(), Error> {
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    let scene = match &args.scene {
        Some(path) => {
            info!("loading scene {}", path.display());
            Scene::load(path)?
        }
        None => Scene::showcase(),
    };
    info!(
        "scene: {} spheres, {} lights, floor {}",
        scene.spheres.len(),
        scene.lights.len(),
        if scene.floor.is_some() { "on" } else { "off" }
    );

    let camera = Camera::from_degrees(args.width, args.height, args.fov)?;
    let tracer = Raytracer::new(TraceSettings::default());

    info!("rendering {}x{} on {} threads", camera.width, camera.height, rayon::current_num_threads());
    let start = Instant::now();
    let film = tracer.render(&scene, &camera);
    info!("rendered in {:.2?}", start.elapsed());

    let bad = film.non_finite_count();
    if bad > 0 {
        warn!("{} pixels are not finite", bad);
    }

    film.save(&args.output)?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
