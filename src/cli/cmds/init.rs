use anyhow::Context;

use crate::base;
use crate::cli;

/// Write the configuration file in the current directory
///
/// Every setting is written out, so the file doubles as a reference of what
/// can be configured. An existing configuration is kept, with any setting it
/// leaves out filled in.
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing configuration to defaults
    #[arg(long)]
    reset_config: bool,
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let existed = path.is_file();

        let config = if self.reset_config || !existed {
            base::Config::default()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(if !existed {
            cli::Output::Str(format!("Configuration written to '{}'", path.display()))
        } else if self.reset_config {
            cli::Output::Str("Configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!("Configuration updated in '{}'", path.display()))
        })
    }
}
