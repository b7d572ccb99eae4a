//! Lead models and DTOs.

use agronet_core::lead::LeadInput;
use agronet_core::types::{new_entity_id, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `leads` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    /// Plan the visitor picked; cleared when that plan is deleted.
    pub plan_id: Option<EntityId>,
    /// Page the form was submitted from (`Referer`).
    pub source: Option<String>,
    pub contacted: bool,
    pub whatsapp_sent: bool,
    pub converted_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lead.
///
/// Unset fields are filled in by [`CreateLead::into_lead`]: a fresh id, the
/// current time for both timestamps, and `false` for the status flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    pub id: Option<EntityId>,
    pub name: String,
    pub phone: String,
    pub plan_id: Option<EntityId>,
    pub source: Option<String>,
    pub contacted: Option<bool>,
    pub whatsapp_sent: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl CreateLead {
    /// Build the DTO from validated form input.
    pub fn from_input(input: &LeadInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            phone: input.phone.clone(),
            plan_id: input.plan_id(),
            ..Self::default()
        }
    }

    /// Resolve defaults into the record that gets stored.
    pub fn into_lead(self, now: Timestamp) -> Lead {
        let created_at = self.created_at.unwrap_or(now);
        // Never let a caller-supplied pair run backwards.
        let updated_at = self.updated_at.unwrap_or(created_at).max(created_at);

        Lead {
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(new_entity_id),
            name: self.name,
            phone: self.phone,
            plan_id: self.plan_id,
            source: self.source,
            contacted: self.contacted.unwrap_or(false),
            whatsapp_sent: self.whatsapp_sent.unwrap_or(false),
            converted_at: None,
            notes: None,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn defaults_filled_in() {
        let now = Utc::now();
        let lead = CreateLead {
            name: "Maria Silva".into(),
            phone: "(65) 99999-1234".into(),
            ..Default::default()
        }
        .into_lead(now);

        assert!(!lead.id.is_empty());
        assert_eq!(lead.created_at, now);
        assert_eq!(lead.updated_at, now);
        assert!(!lead.contacted);
        assert!(!lead.whatsapp_sent);
    }

    #[test]
    fn supplied_values_kept() {
        let created = Utc::now() - Duration::hours(1);
        let lead = CreateLead {
            id: Some("lead-1".into()),
            created_at: Some(created),
            whatsapp_sent: Some(true),
            ..Default::default()
        }
        .into_lead(Utc::now());

        assert_eq!(lead.id, "lead-1");
        assert_eq!(lead.created_at, created);
        assert_eq!(lead.updated_at, created);
        assert!(lead.whatsapp_sent);
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let now = Utc::now();
        let lead = CreateLead {
            created_at: Some(now),
            updated_at: Some(now - Duration::minutes(5)),
            ..Default::default()
        }
        .into_lead(now);

        assert!(lead.created_at <= lead.updated_at);
    }

    #[test]
    fn from_input_trims_name_and_drops_blank_plan() {
        let input = LeadInput {
            name: "  Maria Silva ".into(),
            phone: "(65) 99999-1234".into(),
            plan_id: Some(String::new()),
        };
        let dto = CreateLead::from_input(&input);
        assert_eq!(dto.name, "Maria Silva");
        assert_eq!(dto.plan_id, None);
    }
}
