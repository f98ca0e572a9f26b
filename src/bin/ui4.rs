use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ui4::{
    AnimationSpec, Attribute, BindingOptions, Color, Dock, EventName, Patch, Session, SessionOpts,
    StepSequence, StyleProp,
};

#[derive(Parser, Debug)]
#[command(name = "ui4", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse `ui4` attribute values, one per line, and print them as JSON.
    Lint(LintArgs),
    /// Build a small docked layout, run a two-step click and print each patch.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct LintArgs {
    /// Input file with one `ui4` attribute value per line.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Session options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Lint(args) => cmd_lint(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_lint(args: LintArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let clauses = ui4::parse_ui4(line)
            .with_context(|| format!("{}:{}", args.in_path.display(), n + 1))?;
        let clauses: Vec<serde_json::Value> = clauses
            .iter()
            .map(|c| {
                serde_json::json!({
                    "target": c.target.wire_name(),
                    "comparison": c.comparison.symbol().to_string(),
                    "value": c.value.to_string(),
                    "condition": c.condition.as_ref().map(ToString::to_string),
                    "animation": c.animation.as_ref().map(AnimationSpec::render),
                    "text": c.serialize(),
                })
            })
            .collect();
        let out = serde_json::json!({ "line": n + 1, "clauses": clauses });
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let opts = match &args.config {
        Some(path) => SessionOpts::from_json_file(path)?,
        None => SessionOpts::default(),
    };
    let mut session = Session::new(opts);
    let root = session.root();

    let header = session.create_view();
    session.dock(header, root.dock(Dock::Top) + 16.0)?;
    session.set(header, Attribute::Height, 48.0)?;
    session.set_style(header, StyleProp::BackgroundColor, Color::gray(0.9))?;

    let button = session.create_view_with_tag("button");
    session.dock(button, header.dock(Dock::Below) + 8.0)?;
    session.set_property(button, "text", "Start")?;
    session.on(
        button,
        EventName::Click,
        StepSequence::new()
            .then(|ctx| {
                let view = ctx.view;
                ctx.session.set_property(view, "text", "Working")?;
                ctx.session.animate(AnimationSpec::new().duration(1.0), |s| {
                    s.set_style(view, StyleProp::Alpha, 0.5)
                })
            })
            .then(|ctx| {
                let view = ctx.view;
                ctx.session.set_property(view, "text", "Done")?;
                ctx.session.set_style(view, StyleProp::Alpha, 1.0)
            }),
        BindingOptions::default(),
    )?;

    print_patch("initial", &session.render_updates()?)?;
    let clicked = session.dispatch(button, EventName::Click, serde_json::Value::Null)?;
    print_patch("click", &clicked)?;
    let continuation = clicked
        .continuation
        .context("click handler did not suspend")?;
    print_patch("resume", &session.resume(&continuation)?)?;
    Ok(())
}

fn print_patch(label: &str, patch: &Patch) -> anyhow::Result<()> {
    eprintln!("== {label}");
    println!("{}", patch.to_json_pretty()?);
    Ok(())
}
