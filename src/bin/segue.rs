use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use segue::{Ease, EaseDir, EaseKind, Tween, TweenSpec};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "segue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every built-in ease name.
    List,
    /// Print a curve sampled at evenly spaced progress values.
    Sample(SampleArgs),
    /// Step a tween with a fixed time step until it completes.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Ease name, e.g. `quad-in`, `elastic-out`, `bounce-in-out` or `linear`.
    #[arg(long)]
    ease: Ease,

    /// Number of intervals between 0 and 1.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Tween spec JSON (`from`, `to`, `duration`, optional `ease`).
    #[arg(long = "in", conflicts_with_all = ["from", "to", "duration"])]
    in_path: Option<PathBuf>,

    /// Start value.
    #[arg(long, default_value_t = 0.0)]
    from: f32,

    /// End value.
    #[arg(long, default_value_t = 1.0)]
    to: f32,

    /// Duration in seconds.
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Ease name; overrides the spec file's ease when given.
    #[arg(long)]
    ease: Option<Ease>,

    /// Time step in seconds.
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// Upper bound on ticks.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Row {
    t: f64,
    value: f32,
    running: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Sample(args) => cmd_sample(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    println!("{}", Ease::LINEAR);
    for kind in EaseKind::ALL.into_iter().filter(|k| *k != EaseKind::Linear) {
        for dir in [EaseDir::In, EaseDir::Out, EaseDir::InOut] {
            println!("{}", Ease::new(kind, dir));
        }
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");

    let points: Vec<(f32, f32)> = (0..=args.steps)
        .map(|i| {
            let p = i as f32 / args.steps as f32;
            (p, args.ease.apply(p))
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        println!("# {}", args.ease);
        for (p, v) in points {
            println!("{p:.4}\t{v:.6}");
        }
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.dt.is_finite() && args.dt > 0.0,
        "--dt must be a positive number of seconds"
    );

    let mut spec = match &args.in_path {
        Some(path) => TweenSpec::<f32>::from_path(path)
            .with_context(|| format!("load tween spec '{}'", path.display()))?,
        None => TweenSpec {
            from: args.from,
            to: args.to,
            duration: args.duration,
            ease: Ease::LINEAR,
        },
    };
    if let Some(ease) = args.ease {
        spec.ease = ease;
    }

    let mut tween: Tween<f32> = spec.build()?;
    tracing::info!(%tween, ease = %spec.ease, dt = args.dt, "running tween");

    let mut rows = vec![Row {
        t: tween.elapsed(),
        value: *tween.value(),
        running: tween.is_running(),
    }];
    let mut ticks = 0u64;
    while tween.is_running() {
        anyhow::ensure!(
            ticks < args.max_ticks,
            "tween did not finish within {} ticks",
            args.max_ticks
        );
        tween.advance(args.dt);
        ticks += 1;
        rows.push(Row {
            t: tween.elapsed(),
            value: *tween.value(),
            running: tween.is_running(),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:.4}\t{:.6}\t{}", row.t, row.value, row.running);
        }
    }
    Ok(())
}
