use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

/// Fields that change on every update and are left out of the diff
const IGNORED_FIELDS: [&str; 1] = ["updated_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INSERT" => Ok(Self::Insert),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("Unknown audit action: {}", s)),
        }
    }
}

/// A change made to one row of one of the stored tables
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: ID,
    pub table_name: String,
    pub entity_id: ID,
    pub action: AuditAction,
    pub old_data: Option<Value>,
    pub new_data: Option<Value>,
    pub changed_fields: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn inserted(table_name: &str, entity_id: ID, new_data: Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            table_name: table_name.to_string(),
            entity_id,
            action: AuditAction::Insert,
            old_data: None,
            new_data: Some(new_data),
            changed_fields: Vec::new(),
            timestamp,
        }
    }

    pub fn updated(
        table_name: &str,
        entity_id: ID,
        old_data: Value,
        new_data: Value,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let changed_fields = changed_fields(&old_data, &new_data);
        Self {
            id: Default::default(),
            table_name: table_name.to_string(),
            entity_id,
            action: AuditAction::Update,
            old_data: Some(old_data),
            new_data: Some(new_data),
            changed_fields,
            timestamp,
        }
    }

    pub fn deleted(table_name: &str, entity_id: ID, old_data: Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            table_name: table_name.to_string(),
            entity_id,
            action: AuditAction::Delete,
            old_data: Some(old_data),
            new_data: None,
            changed_fields: Vec::new(),
            timestamp,
        }
    }

    /// Case insensitive match on the table name or the action
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.table_name.to_lowercase().contains(&term)
            || self.action.as_str().to_lowercase().contains(&term)
    }
}

impl Entity for AuditEntry {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Sorted top level keys whose values differ between `old` and `new`
pub fn changed_fields(old: &Value, new: &Value) -> Vec<String> {
    let empty = serde_json::Map::new();
    let old = old.as_object().unwrap_or(&empty);
    let new = new.as_object().unwrap_or(&empty);

    let mut fields = old
        .keys()
        .chain(new.keys())
        .filter(|key| !IGNORED_FIELDS.contains(&key.as_str()))
        .filter(|key| old.get(*key) != new.get(*key))
        .cloned()
        .collect::<Vec<_>>();
    fields.sort();
    fields.dedup();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diffs_top_level_fields() {
        let old = json!({
            "title": "Dentist",
            "category": null,
            "event_date": "2024-03-15",
            "updated_at": "2024-03-01T10:00:00Z"
        });
        let new = json!({
            "title": "Dentist visit",
            "category": "Health",
            "event_date": "2024-03-15",
            "notes": "Bring card",
            "updated_at": "2024-03-02T10:00:00Z"
        });
        assert_eq!(changed_fields(&old, &new), vec!["category", "notes", "title"]);
        assert!(changed_fields(&old, &old).is_empty());
    }

    #[test]
    fn update_entry_carries_both_sides() {
        let entry = AuditEntry::updated(
            "records",
            ID::new(),
            json!({"title": "a"}),
            json!({"title": "b"}),
            Utc::now(),
        );
        assert_eq!(entry.action, AuditAction::Update);
        assert_eq!(entry.changed_fields, vec!["title"]);
        assert!(entry.old_data.is_some() && entry.new_data.is_some());
    }

    #[test]
    fn searches_table_and_action() {
        let entry = AuditEntry::deleted("reminders", ID::new(), json!({}), Utc::now());
        assert!(entry.matches_search("remind"));
        assert!(entry.matches_search("delete"));
        assert!(entry.matches_search(""));
        assert!(!entry.matches_search("records"));
    }

    #[test]
    fn parses_actions() {
        assert_eq!("insert".parse::<AuditAction>(), Ok(AuditAction::Insert));
        assert_eq!(AuditAction::Delete.to_string(), "DELETE");
        assert!("upsert".parse::<AuditAction>().is_err());
    }
}
