use crate::base;

/// Transactions ordered by date. Transactions sharing a date keep the order in
/// which they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transactionlist(Vec<base::Transaction>);

impl Transactionlist {
    fn from_vec(mut inner: Vec<base::Transaction>) -> Self {
        inner.sort_by_key(|t| t.date);
        Self(inner)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn spanned_interval(&self) -> base::Interval {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => base::Interval {
                start: first.date,
                end: last.date,
            },
            _ => base::Interval::EMPTY,
        }
    }

    pub fn slice_spanning_interval(&self, interval: base::Interval) -> &[base::Transaction] {
        if interval.is_empty() {
            return &[];
        }
        let i = self.0.partition_point(|t| t.date < interval.start);
        let j = i + self.0[i..].partition_point(|t| t.date <= interval.end);
        &self.0[i..j]
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.0.iter()
    }
}

impl IntoIterator for Transactionlist {
    type Item = base::Transaction;
    type IntoIter = std::vec::IntoIter<base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Transaction> for Transactionlist {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Transactionlist {
    /// Writes one JSON object per line, each with a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in self.iter() {
            let s = serde_json::to_string(t).map_err(|_| std::fmt::Error)?;
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid transaction at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Transactionlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Transaction>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Transactionlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
