use std::rc::Rc;

use crate::base;
use crate::base::Cleanup;

/// Two-level expense hierarchy: parent categories flow into the anchor, and
/// each parent category has its own group of categories flowing into it.
#[derive(Debug, Clone)]
pub struct ExpenseGroup {
    top: base::FlowGroup,
    children: indexmap::IndexMap<String, base::FlowGroup>,
}

impl ExpenseGroup {
    pub fn new(top: base::FlowGroup) -> Self {
        Self {
            top,
            children: indexmap::IndexMap::new(),
        }
    }

    pub fn from_config(config: &base::CollectionConfig, contribution: base::Contribution) -> Self {
        Self::new(base::FlowGroup::from_config(config, contribution))
    }

    pub fn name(&self) -> &str {
        self.top.name()
    }

    #[cfg(test)]
    pub fn top(&self) -> &base::FlowGroup {
        &self.top
    }

    #[cfg(test)]
    pub fn child(&self, label: &str) -> Option<&base::FlowGroup> {
        self.children.get(label)
    }

    #[cfg(test)]
    pub fn children(&self) -> impl Iterator<Item = &base::FlowGroup> {
        self.children.values()
    }

    pub fn total(&self) -> base::Cents {
        self.top.total()
    }

    /// Adds `t` under its parent category and, inside that, under its
    /// category. Nothing is inserted if either is missing.
    pub fn insert(&mut self, t: Rc<base::Transaction>) -> Result<(), base::Error> {
        let category = t
            .category
            .clone()
            .ok_or_else(|| base::Error::MissingCategory(t.to_string()))?;
        let parent = t
            .parent_category
            .clone()
            .ok_or_else(|| base::Error::MissingParentCategory(t.to_string()))?;

        self.top.insert(t.clone(), Some(&parent));
        self.child_mut(&parent).insert(t, Some(&category));
        Ok(())
    }

    fn child_mut(&mut self, label: &str) -> &mut base::FlowGroup {
        let top = &self.top;
        self.children
            .entry(label.to_string())
            .or_insert_with(|| top.sibling(label))
    }

    /// Moves the child groups of parent categories merged at the top level
    /// into the child group of the "Other" bucket.
    fn merge_children(&mut self, merged: Vec<String>) {
        if merged.is_empty() {
            return;
        }
        let other = self.top.other_label();
        for label in merged {
            if let Some(child) = self.children.shift_remove(&label) {
                self.child_mut(&other).absorb(child);
            }
        }
    }
}

impl Cleanup for ExpenseGroup {
    fn validate(&self) -> usize {
        self.top.validate() + self.children.values().map(|c| c.validate()).sum::<usize>()
    }

    fn consolidate(&mut self) {
        let threshold = self.top.threshold();
        let merged = self.top.consolidate_by_count(threshold.count);
        self.merge_children(merged);
        let merged = self
            .top
            .consolidate_by_value(threshold.relative(), threshold.absolute());
        self.merge_children(merged);

        for child in self.children.values_mut() {
            child.consolidate();
        }
    }

    /// Rounds the top level, then each child group to its parent flow's
    /// rounded total.
    fn round(&mut self) {
        self.top.round();
        for flow in self.top.flows().iter() {
            match self.children.get_mut(&flow.source) {
                Some(child) => child.round_to(flow.total),
                None => tracing::warn!(
                    group = %self.top.name(),
                    flow = %flow.source,
                    "flow has no child group"
                ),
            }
        }
    }
}

impl std::fmt::Display for ExpenseGroup {
    /// Writes the child groups in the order of their parent flows, then the
    /// top level.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for flow in self.top.sorted() {
            if let Some(child) = self.children.get(&flow.source) {
                write!(f, "{}", child)?;
            }
        }
        write!(f, "{}", self.top)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use time::macros::date;

    use super::*;

    fn expense(category: &str, parent: &str, amount: i64) -> Rc<base::Transaction> {
        Rc::new(
            base::Transaction::new(date!(2024 - 06 - 01), category, base::Cents(amount))
                .with_category(category, parent),
        )
    }

    fn group(count: usize, expenses: &[(&str, &str, i64)]) -> ExpenseGroup {
        let mut g = ExpenseGroup::new(base::FlowGroup::new("Expenses", true).with_threshold(
            base::Threshold {
                count,
                ..Default::default()
            },
        ));
        for &(category, parent, amount) in expenses {
            g.insert(expense(category, parent, amount)).unwrap();
        }
        g
    }

    fn assert_consistent(g: &ExpenseGroup) {
        for flow in g.top().flows().iter() {
            let child = g.child(&flow.source).unwrap();
            assert_eq!(child.total(), flow.total, "{}", flow.source);
        }
        assert_eq!(g.children().count(), g.top().flows().len());
    }

    #[test]
    fn test_insert() {
        let g = group(10, &[("Groceries", "Food", -1000), ("Cafe", "Food", -500), ("Rent", "Housing", -9000)]);
        assert_eq!(g.total(), base::Cents(-10500));
        assert_eq!(g.top().get("Food").unwrap().total, base::Cents(-1500));
        let food = g.child("Food").unwrap();
        assert_eq!(food.name(), "Food");
        assert_eq!(food.get("Cafe").unwrap().total, base::Cents(-500));
        assert_eq!(food.get("Cafe").unwrap().target, "Food");
        assert_consistent(&g);
    }

    #[test]
    fn test_insert_missing_category() {
        let mut g = group(10, &[]);
        let t = base::Transaction::new(date!(2024 - 06 - 01), "Cafe", base::Cents(-500));
        assert!(matches!(
            g.insert(Rc::new(t.clone())),
            Err(base::Error::MissingCategory(_))
        ));
        let mut t = t;
        t.category = Some("Cafe".to_string());
        assert!(matches!(
            g.insert(Rc::new(t)),
            Err(base::Error::MissingParentCategory(_))
        ));
        assert!(g.top().flows().is_empty());
        assert_eq!(g.children().count(), 0);
    }

    #[test]
    fn test_round_keeps_hierarchy_consistent() {
        let mut g = group(
            10,
            &[
                ("Groceries", "Food", -10040),
                ("Restaurants", "Food", -5030),
                ("Takeaway", "Food", -2045),
                ("Rent", "Housing", -100050),
                ("Power", "Housing", -12049),
                ("Cinema", "Fun", -1999),
            ],
        );
        let before = g.total();
        g.cleanup();
        assert_consistent(&g);
        assert_eq!(g.total(), before.round());
        assert_eq!(g.child("Food").unwrap().total(), base::Cents(-17100));
    }

    #[test]
    fn test_validate_counts_child_groups() {
        let mut g = group(
            10,
            &[
                ("Groceries", "Food", -10000),
                ("Cafe", "Food", 2500),
                ("Rent", "Housing", -50000),
            ],
        );
        assert_eq!(g.top().validate(), 0);
        assert_eq!(g.child("Food").unwrap().validate(), 1);
        assert_eq!(g.validate(), 1);

        g.cleanup();
        assert_consistent(&g);
        assert_eq!(g.total(), base::Cents(-57500));
        assert_eq!(g.child("Food").unwrap().get("Cafe").unwrap().total, base::Cents(2500));
        assert_eq!(g.validate(), 1);
    }

    #[test]
    fn test_consolidate_merges_child_groups() {
        let mut g = group(
            2,
            &[
                ("Groceries", "Food", -10040),
                ("Rent", "Housing", -100000),
                ("Cinema", "Fun", -2000),
                ("Books", "Hobbies", -1000),
            ],
        );
        g.consolidate();
        assert_eq!(
            g.top().flows().labels(),
            vec!["Food", "Housing", "Other Expenses"]
        );
        assert!(g.child("Fun").is_none());
        assert!(g.child("Hobbies").is_none());
        let other = g.child("Other Expenses").unwrap();
        assert_eq!(other.total(), base::Cents(-3000));
        assert_eq!(other.get("Books").unwrap().target, "Other Expenses");
        g.round();
        assert_consistent(&g);
    }

    #[test]
    fn test_to_string() {
        let mut g = group(
            10,
            &[
                ("Groceries", "Food", -10040),
                ("Restaurants", "Food", -5030),
                ("Rent", "Housing", -100000),
            ],
        );
        g.cleanup();
        assert_eq!(
            g.to_string(),
            indoc!(
                "
                Housing [1000] Rent
                Food [101] Groceries
                Food [50] Restaurants
                Expenses [1000] Housing
                Expenses [151] Food
                "
            )
        );
    }
}
