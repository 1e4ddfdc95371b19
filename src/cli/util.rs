use std::rc::Rc;

use crate::base;

/// Returns the transactions in `interval` with joint splits assigned, each
/// paired with its classification.
pub fn classify_tl(
    tl: &base::Transactionlist,
    interval: base::Interval,
    config: &base::Config,
) -> Vec<(Rc<base::Transaction>, base::Classification)> {
    let mut transactions = tl.slice_spanning_interval(interval).to_vec();
    base::assign_joint_splits(&mut transactions);

    let classifier = base::Classifier::new(config);
    transactions
        .into_iter()
        .map(|t| {
            let c = classifier.classify(&t);
            (Rc::new(t), c)
        })
        .collect()
}

/// Builds, cleans up and links the report of the transactions in `interval`.
pub fn build_report(
    tl: &base::Transactionlist,
    interval: base::Interval,
    config: &base::Config,
) -> Result<base::Report, base::Error> {
    let mut builder = base::ReportBuilder::new(config);
    for (t, c) in classify_tl(tl, interval, config) {
        builder.add_transaction(t, c)?;
    }
    Ok(builder.cleanup().link())
}
