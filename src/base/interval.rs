/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: time::Date,
    pub end: time::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Interval {
    pub const EMPTY: Self = Self {
        start: time::Date::MAX,
        end: time::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    /// Returns the whole year, month or day written as `YYYY`, `YYYY-MM` or
    /// `YYYY-MM-DD`.
    fn span(s: &str) -> Result<Self, DateError> {
        let invalid = || DateError::Format(s.to_string());
        let mut parts = s.split('-');
        let year = parts
            .next()
            .filter(|p| p.len() == 4)
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(invalid)?;
        let mut component = || {
            parts
                .next()
                .map(|p| match p.len() {
                    2 => p.parse::<u8>().map_err(|_| invalid()),
                    _ => Err(invalid()),
                })
                .transpose()
        };
        let month = component()?;
        let day = component()?;
        if component()?.is_some() {
            return Err(invalid());
        }

        let interval = match (month, day) {
            (None, _) => Self {
                start: time::Date::from_calendar_date(year, time::Month::January, 1)?,
                end: time::Date::from_calendar_date(year, time::Month::December, 31)?,
            },
            (Some(month), None) => {
                let month = time::Month::try_from(month)?;
                let last = month.length(year);
                Self {
                    start: time::Date::from_calendar_date(year, month, 1)?,
                    end: time::Date::from_calendar_date(year, month, last)?,
                }
            }
            (Some(month), Some(day)) => {
                let date = time::Date::from_calendar_date(year, time::Month::try_from(month)?, day)?;
                Self {
                    start: date,
                    end: date,
                }
            }
        };
        Ok(interval)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("invalid date '{0}', expected YYYY, YYYY-MM or YYYY-MM-DD")]
    Format(String),
    #[error(transparent)]
    Range(#[from] time::error::ComponentRange),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("invalid left side")]
    Left(#[source] DateError),
    #[error("invalid right side")]
    Right(#[source] DateError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Parses `A:B`, where either side may be left out to leave the interval
    /// unbounded on that side. A single date without `:` spans that date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((left, right)) => Ok(Self {
                start: match left {
                    "" => time::Date::MIN,
                    _ => Self::span(left).map_err(Self::Err::Left)?.start,
                },
                end: match right {
                    "" => time::Date::MAX,
                    _ => Self::span(right).map_err(Self::Err::Right)?.end,
                },
            }),
            None => Ok(Self::span(s)?),
        }
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
