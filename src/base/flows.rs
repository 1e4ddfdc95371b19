use crate::base;

/// Flows keyed by label, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flows(indexmap::IndexMap<String, base::Flow>);

impl Flows {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&base::Flow> {
        self.0.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut base::Flow> {
        self.0.get_mut(label)
    }

    /// Returns the flow under `label`, creating an empty one towards `target`
    /// if absent.
    pub fn get_or_create(&mut self, label: &str, target: &str) -> &mut base::Flow {
        self.0
            .entry(label.to_string())
            .or_insert_with(|| base::Flow::new(label, target))
    }

    /// Removes the flow under `label`. Remaining flows keep their order.
    pub fn remove(&mut self, label: &str) -> Option<base::Flow> {
        self.0.shift_remove(label)
    }

    /// Moves the flow under `from` to `to`, merging into an existing flow
    /// if there is one. Returns the flow now under `to`, or `None` if
    /// `from` does not exist.
    pub fn merge(&mut self, from: &str, to: &str) -> Option<&mut base::Flow> {
        if from == to {
            return self.0.get_mut(to);
        }
        let mut old = self.remove(from)?;
        match self.0.get_mut(to) {
            Some(existing) => {
                existing.transactions.append(&mut old.transactions);
                existing.total += old.total;
            }
            None => {
                old.source = to.to_string();
                self.0.insert(to.to_string(), old);
            }
        }
        self.0.get_mut(to)
    }

    /// Labels in iteration order, detached from the collection.
    pub fn labels(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Flow> {
        self.0.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut base::Flow> {
        self.0.values_mut()
    }

    pub fn total(&self) -> base::Cents {
        self.iter().map(|f| f.total).sum()
    }
}

impl IntoIterator for Flows {
    type Item = base::Flow;
    type IntoIter = indexmap::map::IntoValues<String, base::Flow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}
