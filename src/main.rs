use clap::Parser;
use log::{error, info};

use lumenpath::camera::Camera;
use lumenpath::cli::Args;
use lumenpath::config::Config;
use lumenpath::logger::init_logger;
use lumenpath::output::save_image;
use lumenpath::random::make_rng;
use lumenpath::scene::build_world;

fn run(args: &Args) -> lumenpath::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => {
            info!("No scene file given, using the built-in scene");
            Config::default()
        }
    };
    args.apply_overrides(&mut config);

    let world = build_world(&config)?;
    let camera = Camera::new(&config.camera_settings());
    let mut renderer = config.renderer();
    renderer.show_progress = !args.quiet;

    let mut rng = make_rng(config.image.seed);
    let image = renderer.render(&camera, &world, &mut rng)?;

    save_image(&image, &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("lumenpath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
