use crate::base;
use crate::cli;

/// List transactions with the part of the report they go to
///
/// Columns are date, amount, classification, the label the transaction is
/// reported under, and description. Useful for tuning the tags and accounts
/// in the configuration file.
#[derive(clap::Parser)]
pub struct Classify {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    /// Only list transactions with no classification
    #[arg(short, long)]
    unknown: bool,
}

impl Classify {
    pub fn run(
        &self,
        tl: &base::Transactionlist,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let income = base::Aliaser::new(&config.collections.income.classifiers);
        let savings = base::Aliaser::new(&config.collections.savings.classifiers);

        let rows = cli::util::classify_tl(tl, self.interval, config)
            .into_iter()
            .filter(|(_, c)| !self.unknown || *c == base::Classification::Unknown)
            .map(|(t, c)| {
                let label = match c {
                    base::Classification::Income => income.alias(&t),
                    base::Classification::Savings => savings.alias(&t),
                    base::Classification::Expense => match (&t.parent_category, &t.category) {
                        (Some(parent), Some(category)) => format!("{}/{}", parent, category),
                        _ => "?".to_string(),
                    },
                    base::Classification::Ignore | base::Classification::Unknown => String::new(),
                };
                vec![
                    t.date.to_string(),
                    t.amount.to_string(),
                    c.to_string(),
                    label,
                    t.description.clone(),
                ]
            })
            .collect();
        Ok(cli::Output::Table(rows))
    }
}
