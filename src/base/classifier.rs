use crate::base;

/// Picks the label a transaction is reported under: the alias of its first
/// tag that has one, else the alias of the first account pattern matching its
/// description, else the description itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliaser {
    tags: base::Classifiers,
    accounts: base::Classifiers,
}

impl Aliaser {
    pub fn new(set: &base::ClassifierSet) -> Self {
        Self {
            tags: set.tags.clone(),
            accounts: set.accounts.clone(),
        }
    }

    pub fn alias(&self, t: &base::Transaction) -> String {
        t.tags
            .iter()
            .find_map(|tag| self.tags.alias(tag))
            .or_else(|| self.accounts.alias_by_pattern(&t.description))
            .unwrap_or(&t.description)
            .to_string()
    }
}

/// Assigns each transaction to a part of the report based on the configured
/// tags and accounts of every collection.
#[derive(Debug, Clone)]
pub struct Classifier {
    sets: Vec<(base::Classification, base::ClassifierSet)>,
}

type Rule = fn(&Classifier, &base::Transaction) -> Option<base::Classification>;

impl Classifier {
    /// Account always classified as income.
    pub const INTEREST: &str = "Interest";

    /// First rule with an answer wins.
    const RULES: [Rule; 5] = [
        Self::by_tag,
        Self::by_category,
        Self::by_internal_transfer,
        Self::by_account,
        Self::by_positive_amount,
    ];

    pub fn new(config: &base::Config) -> Self {
        let mut income = config.collections.income.classifiers.clone();
        if !income.accounts.contains(Self::INTEREST) {
            income.accounts.add(Self::INTEREST, None);
        }
        let sets = base::Classification::COLLECTIONS
            .into_iter()
            .map(|c| {
                let set = match c {
                    base::Classification::Income => income.clone(),
                    base::Classification::Expense => config.collections.expenses.classifiers.clone(),
                    base::Classification::Savings => config.collections.savings.classifiers.clone(),
                    _ => config.ignore.clone(),
                };
                (c, set)
            })
            .collect();
        Self { sets }
    }

    pub fn classify(&self, t: &base::Transaction) -> base::Classification {
        Self::RULES
            .iter()
            .find_map(|rule| rule(self, t))
            .unwrap_or(base::Classification::Unknown)
    }

    fn by_tag(&self, t: &base::Transaction) -> Option<base::Classification> {
        self.sets
            .iter()
            .find(|(_, set)| t.tags.iter().any(|tag| set.tags.contains(tag)))
            .map(|&(c, _)| c)
    }

    fn by_category(&self, t: &base::Transaction) -> Option<base::Classification> {
        t.category.as_ref().map(|_| base::Classification::Expense)
    }

    fn by_internal_transfer(&self, t: &base::Transaction) -> Option<base::Classification> {
        t.is_internal().then_some(base::Classification::Ignore)
    }

    fn by_account(&self, t: &base::Transaction) -> Option<base::Classification> {
        self.sets
            .iter()
            .find(|(_, set)| set.accounts.matches_pattern(&t.description))
            .map(|&(c, _)| c)
    }

    fn by_positive_amount(&self, t: &base::Transaction) -> Option<base::Classification> {
        (t.amount > base::Cents::ZERO).then_some(base::Classification::Income)
    }
}
