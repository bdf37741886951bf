//! CLI entry point for bomview

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bomview::{
    prompt, render_text, report, ArticleGuard, CancelToken, HtmlRenderer, PlmSession,
    RenderConfig, Retry, SnapshotSession, StructureWalker, SystemClock, WalkerConfig,
};

#[derive(Parser, Debug)]
#[command(name = "bomview")]
#[command(about = "Render a PLM product structure as a collapsible HTML tree")]
#[command(version)]
struct Args {
    /// Structure snapshot (JSON export of the article catalog)
    snapshot: PathBuf,

    /// Where to write the HTML report
    #[arg(short = 'o', long = "output", default_value = "structure.html")]
    output: PathBuf,

    /// Include documentation rows without prompting
    #[arg(long = "docs", conflicts_with = "no_docs")]
    docs: bool,

    /// Exclude documentation rows without prompting
    #[arg(long = "no-docs")]
    no_docs: bool,

    /// Do not open the report in the default viewer
    #[arg(long = "no-open")]
    no_open: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("bomview: {err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut session = SnapshotSession::from_path(&args.snapshot)?;

    bomview::connect(
        &mut session,
        &SystemClock,
        &CancelToken::new(),
        &Retry::default(),
    )?;

    let root_id = session
        .selected_article()
        .context("no article is selected")?;
    let (designation, name) = {
        let mut article = ArticleGuard::open(&mut session, root_id)
            .with_context(|| format!("cannot open article {root_id}"))?;
        (article.designation()?, article.name()?)
    };
    info!(root_id, %designation, "selected article");

    let include_documentation = if args.docs {
        true
    } else if args.no_docs {
        false
    } else {
        prompt::ask_include_documentation(&mut io::stdin().lock(), &mut io::stdout())
            .context("cannot read the documentation answer")?
    };

    let walker = StructureWalker::new(WalkerConfig {
        include_documentation,
    });
    let tree = walker.walk(&mut session, root_id, designation, name);

    print!("{}", render_text(&tree));

    let html = HtmlRenderer::new(RenderConfig::default()).render(&tree);
    report::write_report(&args.output, &html)
        .with_context(|| format!("cannot write the report to {}", args.output.display()))?;
    println!("Отчёт сохранён: {}", args.output.display());

    if !args.no_open {
        report::open_in_viewer(&args.output);
    }
    Ok(())
}
