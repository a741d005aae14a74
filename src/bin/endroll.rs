use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use endroll::{CreditsTable, GeometrySnapshot, MessageExtent, Row, ScrollPlanner};

#[derive(Parser, Debug)]
#[command(name = "endroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the credit roll from a credits document and print it as JSON.
    Build(BuildArgs),
    /// Plan the scroll animation for measured geometry.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input credits JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input credits JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport height in px.
    #[arg(long)]
    viewport_height: f64,

    /// Rendered height of the credits block in px.
    #[arg(long)]
    content_height: f64,

    /// Rendered top of the final message in px (stop-at-message mode).
    #[arg(long)]
    message_top: Option<f64>,

    /// Rendered height of the final message in px (stop-at-message mode).
    #[arg(long)]
    message_height: Option<f64>,

    /// Seconds to scroll one viewport height.
    #[arg(long, default_value_t = 2.0)]
    seconds_per_screen: f64,

    /// Print CSS keyframes and animation shorthand instead of JSON.
    #[arg(long)]
    css: bool,
}

/// Pre-parsed tabular input. CSV parsing belongs to an external tool; rows
/// arrive as arrays of values bound to `columns` by position.
#[derive(Debug, serde::Deserialize)]
struct CreditsDoc {
    #[serde(default)]
    title: String,
    #[serde(default)]
    final_message: String,
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn read_doc(path: &Path) -> anyhow::Result<CreditsDoc> {
    let f = File::open(path).with_context(|| format!("open credits '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: CreditsDoc = serde_json::from_reader(r).with_context(|| "parse credits JSON")?;
    Ok(doc)
}

fn build_table(doc: &CreditsDoc) -> CreditsTable {
    let rows: Vec<Row> = doc
        .rows
        .iter()
        .map(|values| {
            Row::from_pairs(
                doc.columns
                    .iter()
                    .zip(values)
                    .map(|(k, v)| (k.clone(), v.clone())),
            )
        })
        .collect();
    CreditsTable::build(&rows, doc.title.clone(), &doc.final_message)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let doc = read_doc(&args.in_path)?;
    let table = build_table(&doc);
    let out = if args.pretty {
        serde_json::to_string_pretty(&table)?
    } else {
        serde_json::to_string(&table)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let doc = read_doc(&args.in_path)?;
    let table = build_table(&doc);

    let final_message = match (args.message_top, args.message_height) {
        (Some(top_px), Some(height_px)) => Some(MessageExtent { top_px, height_px }),
        (None, None) => None,
        _ => anyhow::bail!("--message-top and --message-height must be given together"),
    };
    let geometry = GeometrySnapshot {
        viewport_height_px: args.viewport_height,
        content_height_px: args.content_height,
        final_message,
    };

    let plan = ScrollPlanner::new()
        .plan(&geometry, args.seconds_per_screen, table.has_final_message())
        .context("plan scroll animation")?;

    if args.css {
        print!("{}", endroll::css_keyframes(&plan, "credits-scroll"));
        println!("animation: {};", endroll::css_animation(&plan, "credits-scroll"));
    } else {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}
