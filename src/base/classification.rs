/// Which part of the report a transaction belongs to.
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
pub enum Classification {
    Income,
    Expense,
    Savings,
    /// Deliberately left out of the report.
    Ignore,
    /// No classifier matched.
    Unknown,
}

impl Classification {
    /// Order in which collection classifiers are consulted.
    pub const COLLECTIONS: [Self; 4] = [Self::Income, Self::Expense, Self::Savings, Self::Ignore];
}
