//! Participant view-models
//!
//! A participant is what the wizard shows for one login: display text,
//! alternate text, an icon and whatever payment addresses the personal
//! details carry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suffix attached to phone-number logins
const SMS_DOMAIN: &str = "@expensify.sms";

/// Number of built-in default avatars
const DEFAULT_AVATAR_COUNT: u32 = 24;

/// Personal details for one login, as stored by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub login: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_me_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl PersonalDetails {
    pub fn new(login: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            display_name: display_name.into(),
            avatar: None,
            paypal_me_address: None,
            phone_number: None,
        }
    }

    pub fn with_paypal_me(mut self, address: impl Into<String>) -> Self {
        self.paypal_me_address = Some(address.into());
        self
    }

}

/// Personal details keyed by login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalDetailsList(BTreeMap<String, PersonalDetails>);

impl PersonalDetailsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, details: PersonalDetails) {
        self.0.insert(details.login.clone(), details);
    }

    pub fn get(&self, login: &str) -> Option<&PersonalDetails> {
        self.0.get(login)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonalDetails> {
        self.0.values()
    }
}

impl FromIterator<PersonalDetails> for PersonalDetailsList {
    fn from_iter<I: IntoIterator<Item = PersonalDetails>>(iter: I) -> Self {
        let mut list = Self::new();
        for details in iter {
            list.insert(details);
        }
        list
    }
}

/// Icon descriptor for a participant row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Avatar URL, or the name of a built-in default avatar
    pub source: String,
    /// Accessible name for the icon
    pub name: String,
}

/// A participant as shown by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub login: String,
    pub text: String,
    pub alternate_text: String,
    pub icon: Icon,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_me_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Participant {
    /// Build a participant from known personal details
    pub fn from_details(details: &PersonalDetails) -> Self {
        let alternate_text = strip_sms_domain(&details.login);
        let text = if details.display_name.trim().is_empty() {
            alternate_text.clone()
        } else {
            details.display_name.trim().to_string()
        };

        Self {
            icon: Icon {
                source: details
                    .avatar
                    .clone()
                    .unwrap_or_else(|| default_avatar(&details.login)),
                name: details.login.clone(),
            },
            login: details.login.clone(),
            text,
            alternate_text,
            paypal_me_address: details.paypal_me_address.clone(),
            phone_number: details.phone_number.clone(),
        }
    }

    /// Build a placeholder participant for a login with no personal details
    pub fn from_login(login: &str) -> Self {
        Self::from_details(&PersonalDetails::new(login, ""))
    }

    pub fn has_paypal_me(&self) -> bool {
        self.paypal_me_address
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty())
    }
}

/// Derive participant view-models for logins, keeping their order
pub fn participants_for_logins<S: AsRef<str>>(
    logins: &[S],
    personal_details: &PersonalDetailsList,
) -> Vec<Participant> {
    logins
        .iter()
        .map(|login| {
            let login = login.as_ref();
            personal_details
                .get(login)
                .map(Participant::from_details)
                .unwrap_or_else(|| Participant::from_login(login))
        })
        .collect()
}

/// Drop the SMS domain from phone-number logins
pub fn strip_sms_domain(login: &str) -> String {
    login.strip_suffix(SMS_DOMAIN).unwrap_or(login).to_string()
}

/// Pick a stable built-in avatar for a login
pub fn default_avatar(login: &str) -> String {
    let sum: u32 = login.bytes().map(u32::from).sum();
    format!("default-avatar_{}", sum % DEFAULT_AVATAR_COUNT + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> PersonalDetailsList {
        [
            PersonalDetails::new("jane@example.com", "Jane Doe").with_paypal_me("janedoe"),
            PersonalDetails::new("+15551234567@expensify.sms", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_known_login_uses_display_name() {
        let participants = participants_for_logins(&["jane@example.com"], &details());
        assert_eq!(participants[0].text, "Jane Doe");
        assert_eq!(participants[0].alternate_text, "jane@example.com");
        assert!(participants[0].has_paypal_me());
    }

    #[test]
    fn test_sms_login_falls_back_to_number() {
        let participants = participants_for_logins(&["+15551234567@expensify.sms"], &details());
        assert_eq!(participants[0].text, "+15551234567");
        assert_eq!(participants[0].alternate_text, "+15551234567");
    }

    #[test]
    fn test_unknown_login_gets_placeholder() {
        let participants = participants_for_logins(&["who@example.com"], &details());
        assert_eq!(participants[0].text, "who@example.com");
        assert!(participants[0].icon.source.starts_with("default-avatar_"));
        assert!(!participants[0].has_paypal_me());
    }

    #[test]
    fn test_order_is_preserved() {
        let logins = vec!["b@example.com".to_string(), "jane@example.com".to_string()];
        let participants = participants_for_logins(&logins, &details());
        let order: Vec<_> = participants.iter().map(|p| p.login.as_str()).collect();
        assert_eq!(order, vec!["b@example.com", "jane@example.com"]);
    }

    #[test]
    fn test_default_avatar_is_stable() {
        assert_eq!(default_avatar("a@b.c"), default_avatar("a@b.c"));
    }
}
