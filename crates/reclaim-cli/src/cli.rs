use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "reclaim",
    about = "Recover in-use IP reservations from leftover CNI result files",
    version,
)]
pub struct Cli {
    /// Directory holding CNI result artifacts
    #[arg(long, env = "RECLAIM_RESULTS_DIR", value_name = "DIR")]
    pub results_dir: PathBuf,

    /// Kubeconfig path passed through to cluster-backed stores
    #[arg(long, env = "RECLAIM_KUBECONFIG", value_name = "FILE")]
    pub kubeconfig: Option<PathBuf>,

    /// Ledger file used by the file-backed store
    #[arg(
        long,
        env = "RECLAIM_LEDGER",
        value_name = "FILE",
        default_value = "reclaim-ledger.json"
    )]
    pub ledger: PathBuf,

    /// Artifact name prefix to recover
    #[arg(long, default_value = reclaim_engine::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Report what would be reserved without persisting anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
