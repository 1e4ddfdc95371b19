use crate::base;

/// Sets the share of joint account spending owned by the reporting user,
/// based on how much each owner paid into the joint account.
///
/// Amounts moved from the joint account to a personal or partner account are
/// taken as that owner's funding. Spending from the joint account to external
/// accounts gets `split = personal / (personal + partner)`. Nothing changes
/// when the funding nets to zero.
pub fn assign_joint_splits(transactions: &mut [base::Transaction]) {
    use base::AccountKind::*;

    let funding = |destination| {
        transactions
            .iter()
            .filter(|t| t.source == Some(Joint) && t.destination == Some(destination))
            .map(|t| t.amount)
            .sum::<base::Cents>()
    };
    let personal = funding(Personal);
    let partner = funding(Partner);
    let total = personal + partner;
    if total == base::Cents::ZERO {
        tracing::debug!("no joint account funding, keeping splits");
        return;
    }

    let split = personal.0 as f64 / total.0 as f64;
    tracing::debug!(%personal, %partner, split, "assigning joint splits");
    for t in transactions
        .iter_mut()
        .filter(|t| t.source == Some(Joint) && t.destination == Some(External))
    {
        t.split = split;
    }
}
