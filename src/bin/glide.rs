use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glide::{ParsedRequest, Scroller, Viewport as _, drive_fixed_with, parse_request};

#[derive(Parser, Debug)]
#[command(name = "glide", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one scroll request against a headless viewport and print the result.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the scene's frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Print the scroll offset after every frame.
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<glide::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: glide::Scene = serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    scene.validate()?;

    let fps = args.fps.unwrap_or(scene.fps);
    let mut scroller = Scroller::new(scene.viewport());

    match parse_request(&scene.request)? {
        ParsedRequest::Element { target, opts } => scroller.scroll_to_element(&target, opts),
        ParsedRequest::Top { opts } => scroller.scroll_to_top(opts),
    }

    let frames = drive_fixed_with(&mut scroller, fps, |frame, y| {
        if args.trace {
            println!("frame {frame:>4}  y {y:.3}");
        }
    })?;

    println!("frames {frames}");
    println!("final_y {:.3}", scroller.viewport().scroll_y());
    Ok(())
}
