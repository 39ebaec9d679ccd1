use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// A dated entry the user keeps track of. Reminders and audit
/// entries point back to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: ID,
    pub title: String,
    pub category: Option<String>,
    /// Rich text, stored as the HTML the editor produced
    pub description: Option<String>,
    pub notes: Option<String>,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(title: String, event_date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            title,
            category: None,
            description: None,
            notes: None,
            event_date,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Record {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            created_at: now,
        }
    }

    /// Category names are unique regardless of case
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl Entity for Category {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Numbers shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordStats {
    pub total: usize,
    /// Records with an `event_date` in the month of `today`
    pub this_month: usize,
    /// Records with an `event_date` no earlier than seven days before `today`
    pub last_seven_days: usize,
    /// Number of distinct non empty categories
    pub categories: usize,
}

impl RecordStats {
    pub fn compute(records: &[Record], today: NaiveDate) -> Self {
        let week_ago = today - Duration::days(7);
        let this_month = records
            .iter()
            .filter(|r| {
                r.event_date.year() == today.year() && r.event_date.month() == today.month()
            })
            .count();
        let last_seven_days = records.iter().filter(|r| r.event_date >= week_ago).count();
        let categories = records
            .iter()
            .filter_map(|r| r.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total: records.len(),
            this_month,
            last_seven_days,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: (i32, u32, u32), category: Option<&str>) -> Record {
        let mut record = Record::new(
            "Record".into(),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Utc::now(),
        );
        record.category = category.map(String::from);
        record
    }

    #[test]
    fn computes_dashboard_stats() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let records = vec![
            record((2024, 3, 1), Some("Health")),
            record((2024, 3, 20), Some("Health")),
            record((2024, 2, 27), Some("Work")),
            record((2024, 2, 1), None),
            record((2023, 3, 4), Some("")),
        ];
        let stats = RecordStats::compute(&records, today);
        assert_eq!(
            stats,
            RecordStats {
                total: 5,
                this_month: 2,
                last_seven_days: 3,
                categories: 2,
            }
        );
    }

    #[test]
    fn category_names_compare_case_insensitive() {
        let category = Category::new("Health".into(), Utc::now());
        assert!(category.has_name("health"));
        assert!(category.has_name(" HEALTH "));
        assert!(!category.has_name("Work"));
    }
}
