// Shared type definitions
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decoded server reply for admin actions. The server sets exactly one of
/// `error` or `message` per response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Banner styling for this reply. `error` wins if both fields are set.
    pub fn kind(&self) -> BannerKind {
        if self.error.is_some() {
            BannerKind::Error
        } else {
            BannerKind::Success
        }
    }

    pub fn text(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-error",
        }
    }
}

/// A dismissible inline notification rendered after an admin action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u32,
    pub kind: BannerKind,
    pub text: String,
}

/// Accumulates banners for the page's alert container. Banners are additive:
/// each completed action appends its own entry, and dismissing one leaves the
/// rest in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerStack {
    next_id: u32,
    banners: Vec<Banner>,
}

impl BannerStack {
    pub fn push(&mut self, kind: BannerKind, text: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.banners.push(Banner { id, kind, text });
        id
    }

    pub fn push_envelope(&mut self, envelope: &Envelope) -> u32 {
        self.push(envelope.kind(), envelope.text().to_string())
    }

    pub fn dismiss(&mut self, id: u32) {
        self.banners.retain(|banner| banner.id != id);
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }
}

/// One entry of the server's admin user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
    pub email: Option<String>,
    pub admin: bool,
    pub suspended: bool,
    /// Navigating here performs the password reset server-side and renders
    /// its own result page.
    pub reset_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-row view-model handed to the action handlers at bind time, so handlers
/// never have to scrape row state back out of the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub suspended: bool,
    pub reset_url: String,
}

impl UserRow {
    pub fn reset_prompt(&self) -> String {
        format!(
            "Are you sure you want to reset {}'s password?",
            self.username
        )
    }

    pub fn suspend_prompt(&self) -> String {
        format!(
            "Are you sure you want to suspend/unsuspend {}'s account?",
            self.username
        )
    }
}

impl From<&AdminUser> for UserRow {
    fn from(user: &AdminUser) -> Self {
        Self {
            username: user.username.clone(),
            suspended: user.suspended,
            reset_url: user.reset_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(error: Option<&str>, message: Option<&str>) -> Envelope {
        Envelope {
            error: error.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_envelope_classification() {
        let ok = envelope(None, Some("The temporary password is xyz"));
        assert_eq!(ok.kind(), BannerKind::Success);
        assert_eq!(ok.text(), "The temporary password is xyz");

        let err = envelope(Some("Invalid username!"), None);
        assert_eq!(err.kind(), BannerKind::Error);
        assert_eq!(err.text(), "Invalid username!");

        // error takes precedence when the server sets both
        let both = envelope(Some("taken"), Some("created"));
        assert_eq!(both.kind(), BannerKind::Error);
        assert_eq!(both.text(), "taken");

        let empty = envelope(None, None);
        assert_eq!(empty.kind(), BannerKind::Success);
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_envelope_decodes_partial_replies() {
        let ok: Envelope = serde_json::from_str(r#"{"message": "done"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("done"));
        assert_eq!(ok.error, None);

        let err: Envelope = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("nope"));
        assert_eq!(err.message, None);

        let empty: Envelope = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Envelope::default());
    }

    #[test]
    fn test_banner_stack_is_additive() {
        let mut stack = BannerStack::default();
        let first = stack.push(BannerKind::Success, "one".to_string());
        let second = stack.push(BannerKind::Error, "two".to_string());

        assert_eq!(stack.banners().len(), 2);
        assert_ne!(first, second);
        assert_eq!(stack.banners()[0].text, "one");
        assert_eq!(stack.banners()[1].text, "two");

        // identical submissions still append independent banners
        stack.push(BannerKind::Success, "one".to_string());
        assert_eq!(stack.banners().len(), 3);
    }

    #[test]
    fn test_banner_dismiss_keeps_ids_unique() {
        let mut stack = BannerStack::default();
        let first = stack.push(BannerKind::Success, "one".to_string());
        stack.dismiss(first);
        assert!(stack.banners().is_empty());

        let second = stack.push(BannerKind::Success, "again".to_string());
        assert_ne!(first, second);
    }

    #[test]
    fn test_row_prompts() {
        let row = UserRow {
            username: "ada".to_string(),
            suspended: false,
            reset_url: "/users/reset/ada".to_string(),
        };
        assert_eq!(
            row.reset_prompt(),
            "Are you sure you want to reset ada's password?"
        );
        assert_eq!(
            row.suspend_prompt(),
            "Are you sure you want to suspend/unsuspend ada's account?"
        );
    }

    #[test]
    fn test_user_row_from_listing() {
        let user = AdminUser {
            username: "ada".to_string(),
            email: Some("ada@example.com".to_string()),
            admin: false,
            suspended: true,
            reset_url: "/users/reset/ada".to_string(),
            created_at: None,
        };
        let row = UserRow::from(&user);
        assert_eq!(row.username, "ada");
        assert!(row.suspended);
        assert_eq!(row.reset_url, "/users/reset/ada");
    }
}
