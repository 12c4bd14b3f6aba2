use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{Level, info};

use escape_time::{
    ColouringMode, Complex, DEFAULT_BASE_HALF_WIDTH, FilePresenterPort, PngFilePresenter,
    PpmFilePresenter, Recurrence, RenderConfig, RenderController, RenderJob, View, ZoomSequence,
};

#[derive(Parser, Debug)]
#[command(name = "escape_time", version, about = "Escape-time fractal renderer")]
struct Cli {
    /// Log debug output, including render progress.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single image.
    Render(RenderArgs),
    /// Render every job in a JSON job file.
    Batch(BatchArgs),
    /// Render a sequence of frames zooming into a fixed centre.
    Zoom(ZoomArgs),
    /// Assemble numbered images in a directory into `<directory>.gif`.
    Gif(GifArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Png,
    Ppm,
}

impl FormatArg {
    fn presenter(self) -> Box<dyn FilePresenterPort> {
        match self {
            Self::Png => Box::new(PngFilePresenter::new()),
            Self::Ppm => Box::new(PpmFilePresenter::new()),
        }
    }
}

#[derive(Args, Debug)]
struct FractalArgs {
    /// Recurrence to iterate.
    #[arg(long, value_enum, default_value_t = Recurrence::Mandelbrot)]
    fractal: Recurrence,

    /// Real part of the Julia/exotic parameter.
    #[arg(long, default_value_t = -0.834, allow_hyphen_values = true)]
    c_re: f64,

    /// Imaginary part of the Julia/exotic parameter.
    #[arg(long, default_value_t = -0.171, allow_hyphen_values = true)]
    c_im: f64,

    #[arg(long, default_value_t = 250)]
    max_iter: u32,

    /// Initial hue in [0, 1].
    #[arg(long, default_value_t = 0.5)]
    hue: f64,

    /// Trajectory colour scale.
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    scale: f64,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect_ratio: f64,

    /// Colouring mode; defaults to the recurrence's usual mode.
    #[arg(long, value_enum)]
    colouring: Option<ColouringMode>,
}

impl FractalArgs {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            recurrence: self.fractal,
            c: Complex::new(self.c_re, self.c_im),
            max_iterations: self.max_iter,
            hue: self.hue,
            colour_scale: self.scale,
            width: self.width,
            height: self.height,
            aspect_ratio: self.aspect_ratio,
            colouring: self.colouring,
        }
    }
}

#[derive(Args, Debug)]
struct ViewArgs {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_re: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_im: f64,

    /// Half-width of the plane shown at zoom 1.
    #[arg(long, default_value_t = DEFAULT_BASE_HALF_WIDTH)]
    base_half_width: f64,
}

impl ViewArgs {
    fn view(&self, zoom: f64) -> View {
        View {
            center: Complex::new(self.center_re, self.center_im),
            zoom,
            base_half_width: self.base_half_width,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Directory the image is written to.
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Render without writing any file.
    #[arg(long, default_value_t = false)]
    no_save: bool,
}

impl OutputArgs {
    fn output_dir(&self) -> Option<&std::path::Path> {
        (!self.no_save).then_some(self.output_dir.as_path())
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    fractal: FractalArgs,

    #[command(flatten)]
    view: ViewArgs,

    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Prefix the file name with `job_<N>_`.
    #[arg(long)]
    job: Option<u32>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSON file holding a list of jobs.
    jobs: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ZoomArgs {
    #[command(flatten)]
    fractal: FractalArgs,

    #[command(flatten)]
    view: ViewArgs,

    #[arg(long, default_value_t = 1.0)]
    zoom_start: f64,

    #[arg(long)]
    zoom_end: f64,

    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Directory the numbered frames are written to.
    #[arg(long, short)]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Also assemble the frames into `<output-dir>.gif`.
    #[arg(long, default_value_t = false)]
    gif: bool,

    /// Delay between GIF frames in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

#[derive(Args, Debug)]
struct GifArgs {
    /// Directory holding the numbered images.
    directory: PathBuf,

    /// Extension of the images to collect.
    #[arg(long, default_value = "png")]
    extension: String,

    /// Delay between frames in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Zoom(args) => cmd_zoom(args),
        Command::Gif(args) => cmd_gif(args),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let job = RenderJob {
        job: args.job,
        config: args.fractal.config(),
        view: args.view.view(args.zoom),
    };
    let mut controller = RenderController::new(args.output.format.presenter());

    controller
        .run_job(&job, args.output.output_dir())
        .context("render failed")?;

    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let jobs = escape_time::load_jobs(&args.jobs)?;
    info!(jobs = jobs.len(), file = %args.jobs.display(), "loaded jobs");

    let report = escape_time::run_batch(
        &jobs,
        args.output.format.presenter(),
        args.output.output_dir(),
    );

    if !report.is_success() {
        anyhow::bail!("{} of {} jobs failed", report.failed.len(), jobs.len());
    }

    Ok(())
}

fn cmd_zoom(args: ZoomArgs) -> anyhow::Result<()> {
    let sequence = ZoomSequence::new(args.zoom_start, args.zoom_end, args.frames)?;
    let gif_delay = args.gif.then(|| Duration::from_millis(args.delay_ms));

    let report = escape_time::run_zoom(
        &args.fractal.config(),
        &args.view.view(args.zoom_start),
        &sequence,
        args.format.presenter(),
        &args.output_dir,
        gif_delay,
    )
    .with_context(|| format!("zoom into '{}' failed", args.output_dir.display()))?;

    info!(frames = report.frames.len(), "zoom finished");
    if let Some(gif) = report.gif {
        info!(path = %gif.display(), "wrote gif");
    }

    Ok(())
}

fn cmd_gif(args: GifArgs) -> anyhow::Result<()> {
    let output = escape_time::assemble_gif(
        &args.directory,
        &args.extension,
        Duration::from_millis(args.delay_ms),
    )
    .with_context(|| format!("assemble gif from '{}'", args.directory.display()))?;

    info!(path = %output.display(), "done");

    Ok(())
}
