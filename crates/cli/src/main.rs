use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dchull::cloud::{draw_points, CloudCfg, CloudKind, ReplayToken};
use dchull::hull::{
    convex_hull_checked, perimeter, signed_area, sort_lex, verify_hull, HullCfg,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "dchull")]
#[command(about = "Divide-and-conquer convex hulls of 2D point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv with x,y columns, or JSON; `-` for stdin)
    Hull {
        #[arg(long)]
        input: String,
        /// Write a JSON report (plus provenance sidecar) instead of printing
        #[arg(long)]
        out: Option<String>,
        /// Largest input handed to the brute-force base case
        #[arg(long, default_value_t = HullCfg::default().base_case_max)]
        base_case: usize,
        /// Check convexity and containment of the result
        #[arg(long)]
        verify: bool,
    },
    /// Write a reproducible random point cloud as JSON
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// disk | square | circle | lattice
        #[arg(long, default_value = "disk")]
        kind: CloudKind,
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            base_case,
            verify,
        } => hull(input, out, base_case, verify),
        Action::Gen {
            count,
            seed,
            index,
            kind,
            radius,
            out,
        } => generate(
            CloudCfg {
                count,
                kind,
                radius,
            },
            ReplayToken { seed, index },
            out,
        ),
        Action::Report => report(),
    }
}

fn hull(input: String, out: Option<String>, base_case: usize, verify: bool) -> Result<()> {
    tracing::info!(input, out = ?out, base_case, verify, "hull");
    let mut points = io::read_points(&input)?;
    sort_lex(&mut points);
    let cfg = HullCfg {
        base_case_max: base_case,
    };
    let hull = convex_hull_checked(&points, cfg).context("computing hull")?;
    tracing::info!(points = points.len(), vertices = hull.len(), "hull_done");
    if verify {
        verify_hull(&points, &hull).context("verifying hull")?;
        tracing::info!("hull_verified");
    }

    let Some(out) = out else {
        print!("{}", io::format_text(&hull));
        return Ok(());
    };
    let report = io::HullReport {
        hull: io::pairs(&hull),
        input_points: points.len(),
        area: signed_area(&hull),
        perimeter: perimeter(&hull),
        base_case_max: base_case,
    };
    io::write_json(&out, &report)?;
    let run = provenance::Run::Hull {
        base_case_max: cfg.base_case_max,
        verified: verify,
        input_points: report.input_points,
        vertices: hull.len(),
        area: report.area,
    };
    provenance::record(&out, run, &[input.as_str()])?;
    Ok(())
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: String) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        kind = %cfg.kind,
        radius = cfg.radius,
        seed = tok.seed,
        index = tok.index,
        out,
        "gen"
    );
    let points = draw_points(cfg, tok);
    io::write_json(&out, &io::pairs(&points))?;
    let run = provenance::Run::Gen {
        kind: cfg.kind.to_string(),
        count: cfg.count,
        radius: cfg.radius,
        seed: tok.seed,
        index: tok.index,
    };
    provenance::record(&out, run, &[])?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "dchull_version": dchull::VERSION,
        "defaults": {
            "base_case_max": HullCfg::default().base_case_max,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
