mod cli;

use std::io::{self, Write};
use anyhow::Result;
use clap::Parser;

use cli::Cli;
use submission_scorer::config::Config;
use submission_scorer::operations::ReportOperation;
use submission_scorer::scanner::Scorer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 日志写到 stderr，stdout 只保留报告
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // 加载配置
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_file(config_path)?
    } else {
        Config::load_or_default()?
    };

    let target = match cli.target() {
        Some(target) => target,
        None => cli::prompt_target(io::stdin().lock(), io::stdout())?,
    };

    let json_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.json_path.clone());
    let scorer = Scorer::new(config).with_progress(true);
    let operation = ReportOperation::new(scorer, cli.root.clone(), json_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    operation.run(&target, &mut out)?;
    out.flush()?;

    Ok(())
}
