use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub collections: Collections,
    /// Transactions matching these are left out of the report.
    pub ignore: ClassifierSet,
    pub contribution: base::Contribution,
    /// File the report is written to, relative to the working directory.
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collections: Collections::default(),
            ignore: ClassifierSet::default(),
            contribution: base::Contribution::default(),
            output: "results.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collections {
    pub income: CollectionConfig,
    pub expenses: CollectionConfig,
    pub savings: CollectionConfig,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            income: CollectionConfig::new("Income", false),
            expenses: CollectionConfig::new("Expenses", true),
            savings: CollectionConfig::new("Savings", true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    /// Anchor label of the collection's flows.
    pub name: String,
    /// Whether flows are expected to carry money out (negative totals).
    pub outgoing: bool,
    pub classifiers: ClassifierSet,
    pub threshold: Threshold,
}

impl CollectionConfig {
    pub fn new(name: &str, outgoing: bool) -> Self {
        Self {
            name: name.to_string(),
            outgoing,
            classifiers: ClassifierSet::default(),
            threshold: Threshold::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierSet {
    /// Matched exactly against transaction tags.
    pub tags: base::Classifiers,
    /// Matched against transaction descriptions, wildcards allowed.
    pub accounts: base::Classifiers,
}

/// When to merge flows into the "Other" bucket.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Threshold {
    /// Maximum number of flows kept apart from "Other".
    pub count: usize,
    /// Flows below this many whole units are merged.
    pub value: u32,
    /// Flows below this percentage of the group total are merged.
    pub percentage: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            count: 10,
            value: 0,
            percentage: 0.0,
        }
    }
}

impl Threshold {
    pub fn absolute(&self) -> base::Cents {
        base::Cents::units(self.value as i64)
    }

    pub fn relative(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Fills every key missing from `value` with its counterpart from
/// `defaults`, descending into nested objects.
fn fill_defaults(value: &mut serde_json::Value, defaults: serde_json::Value) {
    let (serde_json::Value::Object(value), serde_json::Value::Object(defaults)) =
        (value, defaults)
    else {
        return;
    };
    for (k, default) in defaults {
        match value.get_mut(&k) {
            Some(v) => fill_defaults(v, default),
            None => {
                value.insert(k, default);
            }
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    /// Parses a config, taking anything left unspecified at any depth from
    /// [`Config::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = serde_json::from_str::<serde_json::Value>(s)?;
        fill_defaults(&mut value, serde_json::to_value(Config::default())?);
        serde_json::from_value(value)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
