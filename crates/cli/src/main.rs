use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gtri::prelude::*;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod points;
mod provenance;

use output::StreamRecord;
use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "gtri")]
#[command(about = "Greedy non-crossing edge selection over 2D point sets")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    /// Log every decision (DEBUG level)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a point file (.txt count-prefixed pairs, or .csv with x,y columns)
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Tolerant endpoint comparison with this epsilon instead of exact equality
        #[arg(long)]
        touch_eps: Option<f64>,
    },
    /// Write a reproducible random point file
    Sample {
        #[arg(long, default_value_t = 12)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1000.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        /// Round coordinates to multiples of this step
        #[arg(long)]
        snap: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Triangulate the historical six-point set and print the stream
    Demo,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run {
            input,
            out,
            touch_eps,
        } => run(&input, &out, touch_eps, cmd.tag),
        Action::Sample {
            count,
            seed,
            index,
            width,
            height,
            snap,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                width,
                height,
                snap,
            };
            sample(cfg, ReplayToken::new(seed, index), &out, cmd.tag)
        }
        Action::Demo => demo(),
        Action::Report => report(cmd.tag),
    }
}

fn run(input: &Path, out: &Path, touch_eps: Option<f64>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), touch_eps, tag = ?tag, "run");
    let pts = points::load(input)?;
    let (tri, touch) = match touch_eps {
        Some(eps) => {
            let rule = EpsTouch::new(eps).context("--touch-eps")?;
            (triangulate_with(&pts, &rule)?, format!("eps:{eps}"))
        }
        None => (triangulate(&pts)?, "exact".to_string()),
    };
    log_steps(&tri);
    tracing::info!(
        points = pts.len(),
        segments = tri.len(),
        accepted = tri.accepted_count(),
        rejected = tri.rejected_count(),
        "triangulated"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let record = StreamRecord::new(&tri, touch.as_str());
    std::fs::write(out, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "touch": touch,
        "points": pts.len(),
        "accepted": tri.accepted_count(),
        "rejected": tri.rejected_count(),
    });
    let prov_path = write_sidecar(out, Provenance::new(tag, params))?;
    tracing::info!(provenance = %prov_path.display(), "wrote");
    Ok(())
}

fn log_steps(tri: &Triangulation) {
    for step in tri.steps() {
        let s = step.entry.segment;
        match step.entry.verdict {
            Verdict::Accepted => tracing::debug!(
                index = step.index,
                a = ?(s.a().x, s.a().y),
                b = ?(s.b().x, s.b().y),
                length = s.length(),
                prior = step.prior_accepted.len(),
                "accept"
            ),
            Verdict::Rejected { by } => tracing::debug!(
                index = step.index,
                a = ?(s.a().x, s.a().y),
                b = ?(s.b().x, s.b().y),
                length = s.length(),
                blocked_by = by,
                "reject"
            ),
        }
    }
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, out = %out.display(), "sample");
    let pts = draw_cloud(cfg, tok);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, points::to_text(&pts))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "count": cfg.count,
        "seed": tok.seed,
        "index": tok.index,
        "width": cfg.width,
        "height": cfg.height,
        "snap": cfg.snap,
    });
    write_sidecar(out, Provenance::new(tag, params))?;
    Ok(())
}

fn demo() -> Result<()> {
    let tri = triangulate(&gtri::historic_points())?;
    log_steps(&tri);
    println!(
        "{}",
        serde_json::to_string_pretty(&StreamRecord::new(&tri, "exact"))?
    );
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new(tag, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
