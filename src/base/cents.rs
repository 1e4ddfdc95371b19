/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "&str", into = "String")]
pub struct Cents(pub i64);

impl Cents {
    /// Cents in one whole currency unit.
    pub const UNIT: i64 = 100;

    pub const ZERO: Self = Self(0);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn signum(self) -> i64 {
        self.0.signum()
    }

    /// Whole units from `n`.
    pub const fn units(n: i64) -> Self {
        Self(n * Self::UNIT)
    }

    /// Rounds toward zero to whole units.
    pub const fn trunc(self) -> Self {
        Self(self.0 / Self::UNIT * Self::UNIT)
    }

    /// Rounds toward negative infinity to whole units.
    pub const fn floor(self) -> Self {
        Self(self.0.div_euclid(Self::UNIT) * Self::UNIT)
    }

    /// Rounds toward positive infinity to whole units.
    pub const fn ceil(self) -> Self {
        Self(-(-self.0).div_euclid(Self::UNIT) * Self::UNIT)
    }

    /// Rounds to the nearest whole unit, halves away from zero.
    pub const fn round(self) -> Self {
        Self((self.0.abs() + Self::UNIT / 2) / Self::UNIT * Self::UNIT * self.0.signum())
    }

    /// The part discarded by [`Cents::trunc`]. Carries the sign of `self`.
    pub const fn fract(self) -> Self {
        Self(self.0 % Self::UNIT)
    }

    /// Number of whole units after rounding to nearest.
    pub const fn whole(self) -> i64 {
        self.round().0 / Self::UNIT
    }

    /// Multiplies by `ratio`, rounding to the nearest cent.
    pub fn scale(self, ratio: f64) -> Self {
        Self((self.0 as f64 * ratio).round() as i64)
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and a leading '-' for negative
    /// quantities, e.g. "-1234.50".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl From<Cents> for String {
    fn from(value: Cents) -> Self {
        value.to_string()
    }
}
