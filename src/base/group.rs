use std::rc::Rc;

use crate::base;

/// The ordered stages that prepare a group for reporting.
pub trait Cleanup {
    /// Logs flows whose sign contradicts the group's direction. Returns how
    /// many were found.
    fn validate(&self) -> usize;

    /// Merges insignificant flows into the "Other" bucket.
    fn consolidate(&mut self);

    /// Rounds every flow to whole units without changing the rounded total.
    fn round(&mut self);

    /// Runs [`Cleanup::validate`], [`Cleanup::consolidate`] and
    /// [`Cleanup::round`], in that order. Rounding has to see the final set
    /// of flows.
    fn cleanup(&mut self) {
        self.validate();
        self.consolidate();
        self.round();
    }
}

/// Flows sharing the endpoint `name`, with the policy deciding how
/// transactions are labelled, merged and rounded.
#[derive(Debug, Clone)]
pub struct FlowGroup {
    name: String,
    outgoing: bool,
    threshold: base::Threshold,
    aliaser: base::Aliaser,
    contribution: fn(&base::Transaction) -> base::Cents,
    flows: base::Flows,
}

impl FlowGroup {
    pub fn new(name: impl Into<String>, outgoing: bool) -> Self {
        Self {
            name: name.into(),
            outgoing,
            threshold: base::Threshold::default(),
            aliaser: base::Aliaser::default(),
            contribution: base::Contribution::Full.func(),
            flows: base::Flows::new(),
        }
    }

    pub fn from_config(config: &base::CollectionConfig, contribution: base::Contribution) -> Self {
        Self::new(config.name.clone(), config.outgoing)
            .with_threshold(config.threshold)
            .with_aliaser(base::Aliaser::new(&config.classifiers))
            .with_contribution(contribution.func())
    }

    pub fn with_threshold(self, threshold: base::Threshold) -> Self {
        Self { threshold, ..self }
    }

    pub fn with_aliaser(self, aliaser: base::Aliaser) -> Self {
        Self { aliaser, ..self }
    }

    pub fn with_contribution(self, contribution: fn(&base::Transaction) -> base::Cents) -> Self {
        Self {
            contribution,
            ..self
        }
    }

    /// Returns an empty group anchored at `name` with the same policy.
    pub fn sibling(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flows: base::Flows::new(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outgoing(&self) -> bool {
        self.outgoing
    }

    pub fn threshold(&self) -> base::Threshold {
        self.threshold
    }

    pub fn flows(&self) -> &base::Flows {
        &self.flows
    }

    pub fn get(&self, label: &str) -> Option<&base::Flow> {
        self.flows.get(label)
    }

    pub fn total(&self) -> base::Cents {
        self.flows.total()
    }

    /// Label of the bucket that consolidated flows are merged into.
    pub fn other_label(&self) -> String {
        format!("Other {}", self.name)
    }

    /// Adds `t` to the flow under `label`, or under the aliased label if
    /// `label` is `None`.
    pub fn insert(&mut self, t: Rc<base::Transaction>, label: Option<&str>) {
        let label = match label {
            Some(label) => label.to_string(),
            None => self.aliaser.alias(&t),
        };
        let amount = (self.contribution)(&t);
        self.flows
            .get_or_create(&label, &self.name)
            .accumulate(t, amount);
    }

    /// Merges the flow under `label` into the flow under `new_label`.
    pub fn rename(&mut self, label: &str, new_label: &str) -> Option<&mut base::Flow> {
        self.flows.merge(label, new_label)
    }

    fn rename_as_other(&mut self, label: &str) {
        let other = self.other_label();
        tracing::debug!(group = %self.name, flow = label, "merging into '{}'", other);
        if let Some(flow) = self.rename(label, &other) {
            flow.is_other = true;
        }
    }

    /// Merges the smallest flows into "Other" until at most `limit` flows
    /// remain outside of it. Returns the labels that were merged.
    pub fn consolidate_by_count(&mut self, limit: usize) -> Vec<String> {
        let mut candidates = self
            .flows
            .iter()
            .filter(|f| !f.is_other)
            .map(|f| (f.source.clone(), f.total.abs()))
            .collect::<Vec<_>>();
        let excess = candidates.len().saturating_sub(limit);
        candidates.sort_by_key(|&(_, magnitude)| magnitude);

        let merged = candidates
            .into_iter()
            .take(excess)
            .map(|(label, _)| label)
            .collect::<Vec<_>>();
        for label in merged.iter() {
            self.rename_as_other(label);
        }
        merged
    }

    /// Merges every flow smaller than `relative` of the group total, or
    /// smaller than `absolute`, whichever is larger, into "Other". Returns the
    /// labels that were merged.
    pub fn consolidate_by_value(&mut self, relative: f64, absolute: base::Cents) -> Vec<String> {
        let threshold = absolute.max(self.total().abs().scale(relative));
        let mut merged = Vec::new();
        for label in self.flows.labels() {
            let below = match self.flows.get(&label) {
                Some(flow) => !flow.is_other && flow.is_below_threshold(threshold),
                None => false,
            };
            if below {
                self.rename_as_other(&label);
                merged.push(label);
            }
        }
        merged
    }

    /// Rounds every flow to whole units so that the rounded totals add up to
    /// `target` rounded to whole units.
    pub fn round_to(&mut self, target: base::Cents) {
        let totals = self.flows.iter().map(|f| f.total).collect::<Vec<_>>();
        let apportionment = base::apportion(&totals, target);
        if apportionment.shortfall > 0 {
            tracing::warn!(
                group = %self.name,
                target = %target,
                shortfall = apportionment.shortfall,
                "rounded flows cannot reach the target total"
            );
        }
        for (flow, away_from_zero) in self.flows.iter_mut().zip(apportionment.away_from_zero) {
            flow.round(away_from_zero);
        }
    }

    /// Moves every flow of `other` into this group, merging flows that share
    /// a label.
    pub fn absorb(&mut self, other: FlowGroup) {
        for mut flow in other.flows {
            let existing = self.flows.get_or_create(&flow.source, &self.name);
            existing.transactions.append(&mut flow.transactions);
            existing.total += flow.total;
            existing.is_other |= flow.is_other;
        }
    }

    /// Flows in report order: "Other" buckets last, larger magnitudes first.
    pub fn sorted(&self) -> Vec<&base::Flow> {
        let mut v = self.flows.iter().collect::<Vec<_>>();
        v.sort_by(|a, b| {
            (!b.is_other, b.total.abs()).cmp(&(!a.is_other, a.total.abs()))
        });
        v
    }
}

impl Cleanup for FlowGroup {
    fn validate(&self) -> usize {
        let mut count = 0;
        for flow in self.flows.iter() {
            let contradicts = if self.outgoing {
                flow.total > base::Cents::ZERO
            } else {
                flow.total < base::Cents::ZERO
            };
            if !contradicts {
                continue;
            }
            count += 1;
            tracing::warn!(
                group = %self.name,
                flow = %flow.source,
                total = %flow.total,
                "{} flow has {} total, review these transactions:",
                if self.outgoing { "outgoing" } else { "incoming" },
                if self.outgoing { "a positive" } else { "a negative" }
            );
            for t in flow.transactions.iter() {
                tracing::warn!(group = %self.name, flow = %flow.source, "* {}", t);
            }
        }
        count
    }

    fn consolidate(&mut self) {
        let threshold = self.threshold;
        self.consolidate_by_count(threshold.count);
        self.consolidate_by_value(threshold.relative(), threshold.absolute());
    }

    fn round(&mut self) {
        self.round_to(self.total());
    }
}

impl std::fmt::Display for FlowGroup {
    /// Writes one line per flow, each with a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for flow in self.sorted() {
            writeln!(f, "{}", flow)?;
        }
        Ok(())
    }
}
