mod audit;
mod follow_up;
mod lead_time;
mod record;
mod reminder;
mod search;
mod shared;

pub use audit::{changed_fields, AuditAction, AuditEntry};
pub use follow_up::{FollowUp, FollowUpPeriod, FollowUpPriority, FollowUpStatus};
pub use lead_time::{CanonicalLeadTime, LeadTime, LeadTimeUnit, DEFAULT_LEAD_TIME_MINUTES};
pub use record::{Category, Record, RecordStats};
pub use reminder::{BuiltinAction, FiringWindow, Reminder};
pub use search::{search_records, unique_categories, RecordSearchQuery};
pub use shared::entity::{Entity, InvalidIDError, ID};
