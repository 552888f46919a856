//! User-related entity definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription tier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    /// Free tier, limited searches per session.
    #[default]
    Free,
    /// Pro tier.
    Pro,
    /// Enterprise tier.
    Enterprise,
}

impl SubscriptionPlan {
    /// Returns the wire name of this plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Returns all plans in display order.
    pub fn all() -> &'static [SubscriptionPlan] {
        &[Self::Free, Self::Pro, Self::Enterprise]
    }

    /// Checks if this plan is subject to the free search limit.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(format!("Unknown subscription plan: {}", other)),
        }
    }
}

/// A signed-in user of the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Current subscription plan.
    pub plan: SubscriptionPlan,
}

impl User {
    /// Creates a new free-tier user with a random identifier.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            plan: SubscriptionPlan::Free,
        }
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the plan.
    pub fn with_plan(mut self, plan: SubscriptionPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Returns the avatar initial shown next to the user's name.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("test@example.com", "Test User");

        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name, "Test User");
        assert_eq!(user.plan, SubscriptionPlan::Free);
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_user_ids_are_unique() {
        let a = User::new("a@example.com", "A");
        let b = User::new("a@example.com", "A");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_plan_parsing() {
        assert_eq!("pro".parse::<SubscriptionPlan>(), Ok(SubscriptionPlan::Pro));
        assert_eq!(
            " Enterprise ".parse::<SubscriptionPlan>(),
            Ok(SubscriptionPlan::Enterprise)
        );
        assert!("gold".parse::<SubscriptionPlan>().is_err());
    }

    #[test]
    fn test_user_serialization() {
        let user = User::new("test@example.com", "test").with_id("u-1");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "u-1",
                "email": "test@example.com",
                "name": "test",
                "plan": "free"
            })
        );
    }

    #[test]
    fn test_initial() {
        let user = User::new("x@example.com", "dana");
        assert_eq!(user.initial(), Some('D'));
        let nameless = User::new("x@example.com", "");
        assert_eq!(nameless.initial(), None);
    }
}
