use anyhow::Context;

use crate::base;
use crate::cli;

/// Write the flow report
///
/// Each line of the report is a flow written as 'SOURCE [AMOUNT] TARGET',
/// ready to be pasted into a Sankey diagram tool. Income is listed first, then
/// expenses by category, then savings.
#[derive(clap::Parser)]
pub struct Report {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    /// Print the report instead of writing it to the output file
    #[arg(long)]
    stdout: bool,
}

impl Report {
    pub fn run(
        &self,
        tl: &base::Transactionlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let report = cli::util::build_report(tl, self.interval, config)
            .with_context(|| format!("failed to build report for {}", self.interval))?;
        if self.stdout {
            return Ok(cli::Output::Report(report.to_string()));
        }

        let path = fs.output_path(config);
        fs.write_report(config, &report)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(cli::Output::Str(format!(
            "Report written to '{}'",
            path.display()
        )))
    }
}
