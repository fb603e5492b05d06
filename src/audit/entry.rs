//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audited operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Delete,
    /// A report was written out
    Export,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// Audited entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Preset,
    Export,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Preset => write!(f, "Preset"),
            EntityType::Export => write!(f, "Export"),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Preset name or export file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity state before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity state after the operation (creates, exports)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
        }
    }

    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    /// Entry for a deleted entity
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// Entry for a completed export; `details` describes what was written
    pub fn export<T: Serialize>(
        entity_id: impl Into<String>,
        file_name: impl Into<String>,
        details: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(details).ok(),
            ..Self::new(
                Operation::Export,
                EntityType::Export,
                entity_id,
                Some(file_name.into()),
            )
        }
    }

    /// One-line summary, e.g. `[2026-01-05 10:00:00 UTC] CREATE Preset pre-1a2b3c4d (Weekly)`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Export.to_string(), "EXPORT");
    }

    #[test]
    fn test_create_and_delete_entries() {
        let preset = json!({"name": "Weekly Check"});

        let created = AuditEntry::create(
            EntityType::Preset,
            "pre-1a2b3c4d",
            Some("Weekly Check".into()),
            &preset,
        );
        assert_eq!(created.operation, Operation::Create);
        assert!(created.before.is_none());
        assert_eq!(created.after, Some(preset.clone()));

        let deleted = AuditEntry::delete(EntityType::Preset, "pre-1a2b3c4d", None, &preset);
        assert_eq!(deleted.operation, Operation::Delete);
        assert_eq!(deleted.before, Some(preset));
        assert!(deleted.after.is_none());
    }

    #[test]
    fn test_export_entry() {
        let entry = AuditEntry::export(
            "exp-9f8e7d6c",
            "sales_analysis_2026-01-05.csv",
            &json!({"rows": 50}),
        );
        assert_eq!(entry.entity_type, EntityType::Export);
        assert_eq!(entry.operation, Operation::Export);

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("EXPORT Export exp-9f8e7d6c (sales_analysis_2026-01-05.csv)"));
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        let entry = AuditEntry::export("exp-1", "a.csv", &json!({}));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"export\""));
        assert!(line.contains("\"entity_type\":\"export\""));
    }
}
