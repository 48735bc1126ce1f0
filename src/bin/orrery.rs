use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use orrery::{
    Camera, CurveChain, CurveLayer, FrameContext, FrameIndex, FrameSource, Fps, FrameSize,
    OrreryResult, Rect, Rgba, RenderThreading, SketchConfig, Vec3, VectorFrame, WorldCell,
    evaluate_unchecked, frame_to_svg, project_cells_unchecked, write_svg_sequence,
};

#[derive(Parser, Debug)]
#[command(name = "orrery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as an SVG.
    Frame(FrameArgs),
    /// Render the whole sketch as an SVG frame sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input sketch JSON; omitted, the built-in demo sketch is used.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input sketch JSON; omitted, the built-in demo sketch is used.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output directory for the SVG sequence.
    #[arg(long)]
    out_dir: PathBuf,

    /// Evaluate frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count when rendering in parallel.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

/// Sketch document: static metadata plus the scene recipe the demo scene is
/// built from.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct SketchDoc {
    config: SketchConfig,
    camera: Camera,
    chain: CurveChain,
    #[serde(default = "default_rings")]
    rings: u32,
    #[serde(default = "default_ring_samples")]
    ring_samples: u32,
    #[serde(default = "default_cell_size")]
    cell_size: f64,
    #[serde(default = "default_world_radius")]
    world_radius: f64,
    #[serde(default = "default_view_extent")]
    view_extent: f64,
    #[serde(default = "default_palette")]
    palette: Vec<Rgba>,
    #[serde(default = "default_background")]
    background: Rgba,
}

fn default_rings() -> u32 {
    9
}

fn default_ring_samples() -> u32 {
    36
}

fn default_cell_size() -> f64 {
    0.12
}

fn default_world_radius() -> f64 {
    2.2
}

fn default_view_extent() -> f64 {
    1.2
}

fn default_palette() -> Vec<Rgba> {
    ["#f4f1de", "#e07a5f", "#3d405b", "#81b29a", "#f2cc8f"]
        .iter()
        .map(|hex| Rgba::from_hex(hex).expect("demo palette hex"))
        .collect()
}

fn default_background() -> Rgba {
    Rgba::from_hex("#12141c").expect("demo background hex")
}

impl SketchDoc {
    fn demo() -> Self {
        Self {
            config: SketchConfig {
                frame_count: 180,
                frame_size: FrameSize {
                    width: 1080,
                    height: 1080,
                },
                fps: Fps { num: 30, den: 1 },
                quality: 0.95,
            },
            camera: Camera {
                depth: -10.0,
                fov_vertical_rad: 102.9_f64.to_radians(),
                near: 0.1,
                far: 100.0,
                light_depth: 100.0,
            },
            chain: CurveChain::new(vec![
                CurveLayer {
                    sub_depth: 0.45,
                    ..CurveLayer::new(0.72)
                },
                CurveLayer {
                    sub_depth: 0.6,
                    sub_phase: std::f64::consts::FRAC_PI_2,
                    sub_orientation: 0.4,
                    ..CurveLayer::new(0.28)
                },
            ]),
            rings: default_rings(),
            ring_samples: default_ring_samples(),
            cell_size: default_cell_size(),
            world_radius: default_world_radius(),
            view_extent: default_view_extent(),
            palette: default_palette(),
            background: default_background(),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.config.validate()?;
        self.camera.validate()?;
        self.chain.validate()?;
        if self.rings == 0 || self.ring_samples == 0 {
            anyhow::bail!("sketch rings and ring_samples must be >= 1");
        }
        if !(self.cell_size > 0.0 && self.cell_size.is_finite()) {
            anyhow::bail!("sketch cell_size must be a positive finite number");
        }
        if !(self.world_radius > 0.0 && self.world_radius.is_finite()) {
            anyhow::bail!("sketch world_radius must be a positive finite number");
        }
        if !(self.view_extent > 0.0 && self.view_extent.is_finite()) {
            anyhow::bail!("sketch view_extent must be a positive finite number");
        }
        if self.palette.is_empty() {
            anyhow::bail!("sketch palette must contain at least one color");
        }
        Ok(())
    }
}

fn load_doc(path: Option<&Path>) -> anyhow::Result<SketchDoc> {
    let doc = match path {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("open sketch '{}'", path.display()))?;
            serde_json::from_str(&body).with_context(|| "parse sketch JSON")?
        }
        None => SketchDoc::demo(),
    };
    doc.validate()?;
    Ok(doc)
}

/// Layered orbit-band scene: each ring tilts a ring of curve samples about
/// the vertical axis, and the whole construction spins over the sketch.
struct Scene(SketchDoc);

impl FrameSource for Scene {
    fn frame(&self, ctx: FrameContext) -> OrreryResult<VectorFrame> {
        let doc = &self.0;
        let spin = ctx.turn();
        let axis = Vec3::new(0.0, 1.0, 0.0);

        let mut world = Vec::with_capacity((doc.rings * doc.ring_samples) as usize);
        for ring in 0..doc.rings {
            let ring_t = f64::from(ring) / f64::from(doc.rings);
            let tilt = ring_t * std::f64::consts::PI + spin;
            for i in 0..doc.ring_samples {
                let angle = f64::from(i) / f64::from(doc.ring_samples) * std::f64::consts::TAU;
                let sample = evaluate_unchecked(&doc.chain, angle + spin);
                let flat = Vec3::new(sample.cosine(), sample.sine(), 0.0) * doc.world_radius;
                let position = flat.rotated_about(axis, tilt);
                let color = doc.palette[((ring + i) as usize) % doc.palette.len()];
                world.push(WorldCell::new(position, doc.cell_size, color));
            }
        }

        let extent = doc.view_extent;
        Ok(VectorFrame {
            view_box: Rect::new(-extent, -extent, extent, extent),
            background: doc.background,
            cells: project_cells_unchecked(&world, &doc.camera),
        })
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let doc = load_doc(args.in_path.as_deref())?;
    if args.frame >= doc.config.frame_count {
        anyhow::bail!(
            "frame {} out of range (sketch has {} frames)",
            args.frame,
            doc.config.frame_count
        );
    }

    let config = doc.config;
    let scene = Scene(doc);
    let frame = scene.frame(FrameContext {
        index: FrameIndex(args.frame),
        count: config.frame_count,
    })?;
    let svg = frame_to_svg(&frame, config.frame_size);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = load_doc(args.in_path.as_deref())?;
    let config = doc.config;
    let scene = Scene(doc);

    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let paths = write_svg_sequence(&args.out_dir, &scene, &config, &threading)?;

    eprintln!(
        "wrote {} frames to {} ({} fps)",
        paths.len(),
        args.out_dir.display(),
        config.fps.as_f64()
    );
    Ok(())
}
