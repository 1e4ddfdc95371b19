/// Names that identify a collection, each with an optional alias to report
/// matching transactions under. Entries keep the order they were configured
/// in.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Classifiers(indexmap::IndexMap<String, Option<String>>);

impl Classifiers {
    pub fn add(&mut self, name: impl Into<String>, alias: Option<&str>) {
        self.0.insert(name.into(), alias.map(str::to_string));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn alias(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Option::as_deref)
    }

    /// Returns the entry whose name equals `s`, or failing that the first
    /// configured entry whose name is a wildcard pattern matching `s`.
    fn find_pattern(&self, s: &str) -> Option<(&str, Option<&str>)> {
        if let Some((name, alias)) = self.0.get_key_value(s) {
            return Some((name, alias.as_deref()));
        }
        self.0
            .iter()
            .find(|(name, _)| wildmatch::WildMatch::new(name).matches(s))
            .map(|(name, alias)| (name.as_str(), alias.as_deref()))
    }

    pub fn matches_pattern(&self, s: &str) -> bool {
        self.find_pattern(s).is_some()
    }

    pub fn alias_by_pattern(&self, s: &str) -> Option<&str> {
        self.find_pattern(s).and_then(|(_, alias)| alias)
    }
}

impl<S> FromIterator<(S, Option<S>)> for Classifiers
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, Option<S>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}
