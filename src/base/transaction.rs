use crate::base;

/// Ownership of an account on either side of a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum AccountKind {
    Joint,
    Personal,
    Partner,
    External,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub date: time::Date,
    pub description: String,
    pub amount: base::Cents,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AccountKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<AccountKind>,
    /// Share of `amount` owned by the reporting user.
    #[serde(default = "full_split", skip_serializing_if = "is_full_split")]
    pub split: f64,
}

fn default_currency() -> String {
    Transaction::DEFAULT_CURRENCY.to_string()
}

fn full_split() -> f64 {
    1.0
}

fn is_full_split(split: &f64) -> bool {
    *split == 1.0
}

impl Transaction {
    pub const DEFAULT_CURRENCY: &str = "AUD";

    pub fn new(date: time::Date, description: impl Into<String>, amount: base::Cents) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            currency: default_currency(),
            category: None,
            parent_category: None,
            tags: Vec::new(),
            message: None,
            source: None,
            destination: None,
            split: full_split(),
        }
    }

    #[cfg(test)]
    pub fn with_category(mut self, category: &str, parent_category: &str) -> Self {
        self.category = Some(category.to_string());
        self.parent_category = Some(parent_category.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[cfg(test)]
    pub fn with_accounts(mut self, source: AccountKind, destination: AccountKind) -> Self {
        self.source = Some(source);
        self.destination = Some(destination);
        self
    }

    /// Money moved between two of the user's own accounts of the same kind.
    pub fn is_internal(&self) -> bool {
        self.source == self.destination
            && matches!(
                self.source,
                Some(AccountKind::Joint) | Some(AccountKind::Personal)
            )
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} [{}]",
            self.date, self.amount, self.currency, self.description
        )
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// How much of a transaction's amount counts towards a flow.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Contribution {
    /// The whole amount.
    #[default]
    Full,
    /// The amount scaled by the transaction's `split`.
    Split,
}

impl Contribution {
    #[cfg(test)]
    pub fn of(self, t: &Transaction) -> base::Cents {
        self.func()(t)
    }

    pub fn func(self) -> fn(&Transaction) -> base::Cents {
        fn full(t: &Transaction) -> base::Cents {
            t.amount
        }
        fn split(t: &Transaction) -> base::Cents {
            t.amount.scale(t.split)
        }

        match self {
            Contribution::Full => full,
            Contribution::Split => split,
        }
    }
}
