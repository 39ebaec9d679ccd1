use crate::record::Record;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSearchQuery {
    /// Free text matched against title, description, category and event date
    pub text: Option<String>,
    pub category: Option<String>,
    /// Inclusive
    pub date_from: Option<NaiveDate>,
    /// Inclusive
    pub date_to: Option<NaiveDate>,
}

impl RecordSearchQuery {
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(text) = &self.text {
            let term = text.trim().to_lowercase();
            if !term.is_empty() && !matches_text(record, &term) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !category.is_empty() && record.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if record.event_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if record.event_date > to {
                return false;
            }
        }
        true
    }
}

fn matches_text(record: &Record, term: &str) -> bool {
    let contains = |value: &Option<String>| {
        value
            .as_deref()
            .map(|v| v.to_lowercase().contains(term))
            .unwrap_or(false)
    };

    record.title.to_lowercase().contains(term)
        || contains(&record.description)
        || contains(&record.category)
        || date_renderings(&record.event_date)
            .iter()
            .any(|rendered| rendered.contains(term))
}

fn date_renderings(date: &NaiveDate) -> [String; 3] {
    [
        date.format("%b %d, %Y").to_string().to_lowercase(),
        date.format("%Y-%m-%d").to_string(),
        date.format("%m/%d/%Y").to_string(),
    ]
}

pub fn search_records(records: Vec<Record>, query: &RecordSearchQuery) -> Vec<Record> {
    records.into_iter().filter(|r| query.matches(r)).collect()
}

/// Sorted distinct categories of `records`, empty ones left out
pub fn unique_categories(records: &[Record]) -> Vec<String> {
    let mut categories = records
        .iter()
        .filter_map(|r| r.category.clone())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn records() -> Vec<Record> {
        let mut dentist = Record::new(
            "Dentist appointment".into(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            Utc::now(),
        );
        dentist.category = Some("Health".into());
        dentist.description = Some("<p>Bring <b>x-rays</b></p>".into());

        let mut review = Record::new(
            "Quarterly review".into(),
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            Utc::now(),
        );
        review.category = Some("Work".into());

        let misc = Record::new(
            "Passport renewal".into(),
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            Utc::now(),
        );

        vec![dentist, review, misc]
    }

    fn titles(records: Vec<Record>) -> Vec<String> {
        records.into_iter().map(|r| r.title).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let found = search_records(records(), &RecordSearchQuery::default());
        assert_eq!(found.len(), 3);
        let blank = RecordSearchQuery {
            text: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(search_records(records(), &blank).len(), 3);
    }

    #[test]
    fn text_matches_title_description_and_category() {
        let query = |text: &str| RecordSearchQuery {
            text: Some(text.into()),
            ..Default::default()
        };
        assert_eq!(titles(search_records(records(), &query("DENTIST"))), vec!["Dentist appointment"]);
        assert_eq!(titles(search_records(records(), &query("x-rays"))), vec!["Dentist appointment"]);
        assert_eq!(titles(search_records(records(), &query("work"))), vec!["Quarterly review"]);
        assert!(search_records(records(), &query("holiday")).is_empty());
    }

    #[test]
    fn text_matches_rendered_dates() {
        let query = |text: &str| RecordSearchQuery {
            text: Some(text.into()),
            ..Default::default()
        };
        assert_eq!(titles(search_records(records(), &query("mar 15, 2024"))), vec!["Dentist appointment"]);
        assert_eq!(titles(search_records(records(), &query("2024-04-02"))), vec!["Quarterly review"]);
        assert_eq!(titles(search_records(records(), &query("04/30/2024"))), vec!["Passport renewal"]);
    }

    #[test]
    fn filters_by_category_and_inclusive_date_range() {
        let by_category = RecordSearchQuery {
            category: Some("Work".into()),
            ..Default::default()
        };
        assert_eq!(titles(search_records(records(), &by_category)), vec!["Quarterly review"]);

        let by_range = RecordSearchQuery {
            date_from: NaiveDate::from_ymd_opt(2024, 3, 15),
            date_to: NaiveDate::from_ymd_opt(2024, 4, 2),
            ..Default::default()
        };
        assert_eq!(
            titles(search_records(records(), &by_range)),
            vec!["Dentist appointment", "Quarterly review"]
        );
    }

    #[test]
    fn lists_unique_sorted_categories() {
        let mut all = records();
        let mut extra = all[0].clone();
        extra.id = Default::default();
        all.push(extra);
        assert_eq!(unique_categories(&all), vec!["Health".to_string(), "Work".to_string()]);
    }
}
