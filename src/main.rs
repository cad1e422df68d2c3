use std::path::PathBuf;

use clap::Parser;
use mandelbrot_explorer::{ByExtensionFilePresenter, StillRenderController, SurfaceSize, Viewport};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Render one Mandelbrot view to a PNG or PPM file")]
struct Cli {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    center_x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_y: f64,

    /// Pixels per fractal unit at full resolution.
    #[arg(long, default_value_t = 200.0)]
    zoom: f64,

    /// Fraction of the resolution actually computed, in (0, 1].
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    #[arg(long, default_value_t = 100)]
    max_iterations: u32,

    /// Output file; the extension picks the format (.png or .ppm).
    #[arg(short, long, default_value = "mandelbrot.png")]
    output: PathBuf,
}

impl Cli {
    fn viewport(&self) -> Result<Viewport, mandelbrot_explorer::core::viewport::ViewportError> {
        Viewport::new(
            self.center_x,
            self.center_y,
            self.zoom,
            self.scale,
            self.max_iterations,
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let viewport = cli.viewport()?;
    let mut controller = StillRenderController::new(ByExtensionFilePresenter::new());

    controller.generate(&viewport, SurfaceSize::new(cli.width, cli.height))?;
    controller.write(&cli.output)?;

    Ok(())
}
