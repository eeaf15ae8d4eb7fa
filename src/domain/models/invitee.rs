use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Invitee {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Invitee {
    pub fn new(details: NewInvitee) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: details.name,
            phone: details.phone,
            created_at: Utc::now(),
        }
    }
}

/// Validated name/phone pair used for inserts and updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvitee {
    pub name: String,
    pub phone: Option<String>,
}

impl NewInvitee {
    pub fn new(name: &str, phone: Option<&str>) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".into()));
        }

        let phone = phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self { name: name.to_string(), phone })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invitee_trims_fields() {
        let details = NewInvitee::new("  Siti Aminah ", Some(" 0812-3456 ")).unwrap();
        assert_eq!(details.name, "Siti Aminah");
        assert_eq!(details.phone.as_deref(), Some("0812-3456"));
    }

    #[test]
    fn test_new_invitee_rejects_blank_name() {
        assert!(matches!(NewInvitee::new("   ", None), Err(AppError::Validation(_))));
        assert!(matches!(NewInvitee::new("", Some("0812")), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_phone_becomes_none() {
        let details = NewInvitee::new("Ana", Some("   ")).unwrap();
        assert_eq!(details.phone, None);
    }
}
