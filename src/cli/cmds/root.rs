use anyhow::Context;

use crate::base;
use crate::cli;

/// Cash flow report generator
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Log what happens to each transaction
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Report(cli::cmds::report::Report),
    Classify(cli::cmds::classify::Classify),
}

impl Root {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let tl_path = fs.path::<base::Transactionlist>();
        if !tl_path.is_file() {
            anyhow::bail!("no transactions found at '{}'", tl_path.display())
        }
        let tl = fs
            .read::<base::Transactionlist>()
            .with_context(|| format!("failed to read '{}'", tl_path.display()))?;
        tracing::debug!(transactions = tl.len(), interval = %tl.spanned_interval(), "read transactions");

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Report(cmd) => cmd.run(&tl, &config, fs),
            Commands::Classify(cmd) => cmd.run(&tl, &config),
        }
    }
}
