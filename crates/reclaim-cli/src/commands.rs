use colored::Colorize;
use tracing::error;

use reclaim_engine::{ArtifactMatcher, BatchRunner};
use reclaim_range::CidrBounder;
use reclaim_store::{FileStore, InMemoryStore, Reserver};

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let matcher = ArtifactMatcher::new(&cli.prefix)?;
    let bounder = CidrBounder;

    let store: Box<dyn Reserver> = if cli.dry_run {
        Box::new(InMemoryStore::new())
    } else {
        Box::new(FileStore::new(&cli.ledger))
    };

    let runner = BatchRunner::new(
        matcher,
        &bounder,
        store.as_ref(),
        cli.kubeconfig.unwrap_or_default(),
    );

    let summary = runner.run(&cli.results_dir).inspect_err(|e| {
        error!(dir = %cli.results_dir.display(), %e, "cannot list results directory");
    })?;

    let mode = if cli.dry_run { " (dry run)" } else { "" };
    println!(
        "{} {} reserved, {} skipped, {} failed{}",
        "✓".green().bold(),
        summary.reserved.to_string().bold(),
        summary.skipped,
        summary.failed.to_string().yellow(),
        mode,
    );
    Ok(())
}
