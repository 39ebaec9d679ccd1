use chrono::Duration;
use serde::{de::Visitor, Deserialize, Serialize};
use std::fmt::Display;

/// Lead time used when a `time_limit` cannot be understood
pub const DEFAULT_LEAD_TIME_MINUTES: i64 = 60;

/// The lead times offered by the reminder form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalLeadTime {
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
    OneDay,
    TwoDays,
    OneWeek,
}

impl CanonicalLeadTime {
    pub const ALL: [CanonicalLeadTime; 8] = [
        CanonicalLeadTime::FiveMinutes,
        CanonicalLeadTime::FifteenMinutes,
        CanonicalLeadTime::ThirtyMinutes,
        CanonicalLeadTime::OneHour,
        CanonicalLeadTime::TwoHours,
        CanonicalLeadTime::OneDay,
        CanonicalLeadTime::TwoDays,
        CanonicalLeadTime::OneWeek,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::OneHour => "1hour",
            Self::TwoHours => "2hours",
            Self::OneDay => "1day",
            Self::TwoDays => "2days",
            Self::OneWeek => "1week",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.token() == token)
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::FiveMinutes => Duration::minutes(5),
            Self::FifteenMinutes => Duration::minutes(15),
            Self::ThirtyMinutes => Duration::minutes(30),
            Self::OneHour => Duration::hours(1),
            Self::TwoHours => Duration::hours(2),
            Self::OneDay => Duration::hours(24),
            Self::TwoDays => Duration::hours(48),
            Self::OneWeek => Duration::hours(168),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTimeUnit {
    Minute,
    Hour,
    Day,
}

impl LeadTimeUnit {
    /// Units in the order they are looked for in a free-form specifier
    const SEARCH_ORDER: [LeadTimeUnit; 3] =
        [LeadTimeUnit::Minute, LeadTimeUnit::Hour, LeadTimeUnit::Day];

    pub fn token(&self) -> &'static str {
        match self {
            Self::Minute => "min",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    fn allowed_suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Minute => &["", "s", "ute", "utes"],
            Self::Hour | Self::Day => &["", "s"],
        }
    }

    fn minutes(&self) -> i64 {
        match self {
            Self::Minute => 1,
            Self::Hour => 60,
            Self::Day => 24 * 60,
        }
    }

    /// `None` when `amount` units do not fit in a `Duration`
    pub fn checked_duration(&self, amount: u32) -> Option<Duration> {
        let minutes = i64::from(amount).checked_mul(self.minutes())?;
        if minutes > Duration::max_value().num_minutes() {
            return None;
        }
        Some(Duration::minutes(minutes))
    }
}

/// How long before the due instant a reminder becomes eligible to fire.
///
/// Parsed once from the user provided `time_limit` text and never fails:
/// text that is not understood is kept as `Invalid` and resolves to the
/// default lead time of one hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadTime {
    Canonical(CanonicalLeadTime),
    Custom {
        unit: LeadTimeUnit,
        amount: u32,
        raw: String,
    },
    Invalid(String),
}

impl LeadTime {
    pub fn parse(spec: &str) -> Self {
        let text = spec.trim();
        if let Some(canonical) = CanonicalLeadTime::from_token(text) {
            return Self::Canonical(canonical);
        }

        for unit in LeadTimeUnit::SEARCH_ORDER.iter() {
            if let Some(idx) = text.find(unit.token()) {
                return Self::parse_custom(text, idx, *unit)
                    .unwrap_or_else(|| Self::Invalid(spec.to_string()));
            }
        }

        Self::Invalid(spec.to_string())
    }

    fn parse_custom(text: &str, unit_idx: usize, unit: LeadTimeUnit) -> Option<Self> {
        let suffix = &text[unit_idx + unit.token().len()..];
        if !unit.allowed_suffixes().contains(&suffix) {
            return None;
        }
        let digits = text[..unit_idx].trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let amount = digits.parse::<u32>().ok()?;
        unit.checked_duration(amount)?;
        Some(Self::Custom {
            unit,
            amount,
            raw: text.to_string(),
        })
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::Canonical(canonical) => canonical.duration(),
            Self::Custom { unit, amount, .. } => unit
                .checked_duration(*amount)
                .unwrap_or_else(|| Duration::minutes(DEFAULT_LEAD_TIME_MINUTES)),
            Self::Invalid(_) => Duration::minutes(DEFAULT_LEAD_TIME_MINUTES),
        }
    }

    /// True when the default lead time is used because the text was not understood
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Canonical(canonical) => canonical.token(),
            Self::Custom { raw, .. } => raw,
            Self::Invalid(raw) => raw,
        }
    }
}

impl Default for LeadTime {
    fn default() -> Self {
        Self::Canonical(CanonicalLeadTime::OneHour)
    }
}

impl Display for LeadTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for LeadTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeadTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LeadTimeVisitor;

        impl<'de> Visitor<'de> for LeadTimeVisitor {
            type Value = LeadTime;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A lead time specifier like `1hour` or `45min`")
            }

            fn visit_str<E>(self, value: &str) -> Result<LeadTime, E>
            where
                E: serde::de::Error,
            {
                Ok(LeadTime::parse(value))
            }
        }

        deserializer.deserialize_str(LeadTimeVisitor)
    }
}
