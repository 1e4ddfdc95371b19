use std::rc::Rc;

use crate::base;

/// A weighted edge between two labels. Money moves from `target` to `source`
/// when `total` is positive, in the opposite direction when negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub source: String,
    pub target: String,
    pub total: base::Cents,
    pub transactions: Vec<Rc<base::Transaction>>,
    /// Set on consolidation buckets.
    pub is_other: bool,
}

impl Flow {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            total: base::Cents::ZERO,
            transactions: Vec::new(),
            is_other: false,
        }
    }

    pub fn accumulate(&mut self, transaction: Rc<base::Transaction>, amount: base::Cents) {
        self.transactions.push(transaction);
        self.total += amount;
    }

    /// Rounds `total` to whole units, away from zero or toward zero.
    pub fn round(&mut self, away_from_zero: bool) {
        let ceil = match self.total.signum() {
            1 => away_from_zero,
            -1 => !away_from_zero,
            _ => false,
        };
        self.total = if ceil {
            self.total.ceil()
        } else {
            self.total.floor()
        }
    }

    pub fn is_below_threshold(&self, threshold: base::Cents) -> bool {
        self.total.abs() < threshold
    }
}

impl std::fmt::Display for Flow {
    /// Writes `source [amount] target` with endpoints swapped for negative
    /// totals, so the amount is never negative.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.total >= base::Cents::ZERO {
            write!(f, "{} [{}] {}", self.source, self.total.whole(), self.target)
        } else {
            write!(f, "{} [{}] {}", self.target, (-self.total).whole(), self.source)
        }
    }
}
