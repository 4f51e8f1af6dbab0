use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Role;

/// The identity the console auto-logs-in as, one per demo role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub tenant: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: String,
    pub timezone: String,
    pub invoice_emails: bool,
    pub theme: String,
}

/// Partial update accepted by `PUT user/preferences`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub invoice_emails: Option<bool>,
    pub theme: Option<String>,
}

impl Preferences {
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(language) = &patch.language {
            self.language = language.clone();
        }
        if let Some(timezone) = &patch.timezone {
            self.timezone = timezone.clone();
        }
        if let Some(invoice_emails) = patch.invoice_emails {
            self.invoice_emails = invoice_emails;
        }
        if let Some(theme) = &patch.theme {
            self.theme = theme.clone();
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub tenant: Option<String>,
    pub member_since: DateTime<Utc>,
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_applies_only_present_fields() {
        let mut prefs = Preferences {
            language: "en".into(),
            timezone: "UTC".into(),
            invoice_emails: true,
            theme: "light".into(),
        };
        prefs.apply(&PreferencesPatch {
            timezone: Some("Europe/Berlin".into()),
            invoice_emails: Some(false),
            ..Default::default()
        });
        assert_eq!(prefs.language, "en");
        assert_eq!(prefs.timezone, "Europe/Berlin");
        assert!(!prefs.invoice_emails);
        assert_eq!(prefs.theme, "light");
    }
}
