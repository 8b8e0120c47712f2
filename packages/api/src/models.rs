//! Wire types shared between the client and the backend.
//!
//! All structs mirror the backend's JSON shapes one-to-one; unknown fields
//! are ignored on decode. The closed sets (`Purpose`, `Pillar`,
//! `SessionTopic`) are enums so a typo cannot reach the wire.

use serde::{Deserialize, Serialize};

/// Why the user is here. Fixed set, chosen at signup, editable in the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Healing,
    Growth,
    Direction,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::Healing, Purpose::Growth, Purpose::Direction];

    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Healing => "Healing",
            Purpose::Growth => "Growth",
            Purpose::Direction => "Direction",
        }
    }

    /// Parse a form select value. Returns `None` for anything outside the set.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// One of the three life domains tracked by TANA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pillar {
    Mind,
    Money,
    Meaning,
}

impl Pillar {
    pub const ALL: [Pillar; 3] = [Pillar::Mind, Pillar::Money, Pillar::Meaning];

    pub fn as_str(self) -> &'static str {
        match self {
            Pillar::Mind => "Mind",
            Pillar::Money => "Money",
            Pillar::Meaning => "Meaning",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// The three bookable pillar/topic pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionTopic {
    #[serde(rename = "mind_clarity")]
    MindClarity,
    #[serde(rename = "money_mapping")]
    MoneyMapping,
    #[serde(rename = "meaning_compass")]
    MeaningCompass,
}

impl SessionTopic {
    pub const ALL: [SessionTopic; 3] = [
        SessionTopic::MindClarity,
        SessionTopic::MoneyMapping,
        SessionTopic::MeaningCompass,
    ];

    pub fn pillar(self) -> Pillar {
        match self {
            SessionTopic::MindClarity => Pillar::Mind,
            SessionTopic::MoneyMapping => Pillar::Money,
            SessionTopic::MeaningCompass => Pillar::Meaning,
        }
    }

    /// Wire value sent to the backend.
    pub fn value(self) -> &'static str {
        match self {
            SessionTopic::MindClarity => "mind_clarity",
            SessionTopic::MoneyMapping => "money_mapping",
            SessionTopic::MeaningCompass => "meaning_compass",
        }
    }

    /// Human label shown in the booking form and session list.
    pub fn label(self) -> &'static str {
        match self {
            SessionTopic::MindClarity => "Mind · Clarity Session",
            SessionTopic::MoneyMapping => "Money · Wealth Mapping",
            SessionTopic::MeaningCompass => "Meaning · Direction Compass",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    pub purpose: Purpose,
}

/// Server-side aggregate shown on the dashboard. Read-only for this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub name: String,
    pub tana: TanaBreakdown,
    pub sessions: SessionQuota,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TanaBreakdown {
    pub percentages: Percentages,
}

/// Per-pillar progress scores. The backend promises values in [0, 100];
/// [`Percentages::clamped`] enforces that before anything is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentages {
    pub mind: f32,
    pub money: f32,
    pub meaning: f32,
}

impl Percentages {
    pub fn clamped(self) -> Self {
        Self {
            mind: self.mind.clamp(0.0, 100.0),
            money: self.money.clamp(0.0, 100.0),
            meaning: self.meaning.clamp(0.0, 100.0),
        }
    }
}

/// Free-session quota. `used <= total` is expected but not locally enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuota {
    pub used: u32,
    pub total: u32,
}

impl SessionQuota {
    /// True once the quota is spent. Gates the booking form behind the paywall.
    pub fn exhausted(&self) -> bool {
        self.used >= self.total
    }
}

/// A booking request. Immutable from the client once created, except through
/// a full list refresh. `spatial_url` is filled in later by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub topic: SessionTopic,
    pub date: String,
    pub time: String,
    pub status: String,
    #[serde(default)]
    pub spatial_url: Option<String>,
}

/// A journal entry tagged to a pillar, optionally with a mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: String,
    pub pillar: Pillar,
    pub entry_text: String,
    #[serde(default)]
    pub mood: Option<String>,
    pub created_at: String,
}

// ---- Request payloads ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub purpose: Purpose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub user_id: String,
    pub topic: SessionTopic,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl NewSessionRequest {
    /// New bookings always start in the `"requested"` state.
    pub fn requested(user_id: String, topic: SessionTopic, date: String, time: String) -> Self {
        Self {
            user_id,
            topic,
            date,
            time,
            status: "requested".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReflectionRequest {
    pub user_id: String,
    pub pillar: Pillar,
    pub entry_text: String,
    pub mood: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub purpose: Purpose,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

// ---- Response shapes ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic `{items: [...]}` list envelope used by `/sessions` and
/// `/reflections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

/// Response to a booking POST. `limited: true` is a soft decline — the quota
/// is spent and no session was created — not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreated {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub limited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_clamped() {
        let p = Percentages {
            mind: -5.0,
            money: 42.0,
            meaning: 130.0,
        };
        let c = p.clamped();
        assert_eq!(c.mind, 0.0);
        assert_eq!(c.money, 42.0);
        assert_eq!(c.meaning, 100.0);
    }

    #[test]
    fn test_quota_exhausted_boundary() {
        assert!(!SessionQuota { used: 0, total: 3 }.exhausted());
        assert!(!SessionQuota { used: 2, total: 3 }.exhausted());
        assert!(SessionQuota { used: 3, total: 3 }.exhausted());
        // used > total is unexpected but still gates the paywall
        assert!(SessionQuota { used: 4, total: 3 }.exhausted());
    }

    #[test]
    fn test_purpose_round_trip() {
        for p in Purpose::ALL {
            assert_eq!(Purpose::from_value(p.as_str()), Some(p));
        }
        assert_eq!(Purpose::from_value("Wealth"), None);

        let json = serde_json::to_string(&Purpose::Healing).unwrap();
        assert_eq!(json, "\"Healing\"");
    }

    #[test]
    fn test_topic_values_and_pillars() {
        assert_eq!(SessionTopic::from_value("money_mapping"), Some(SessionTopic::MoneyMapping));
        assert_eq!(SessionTopic::from_value("yoga"), None);
        assert_eq!(SessionTopic::MindClarity.pillar(), Pillar::Mind);

        let json = serde_json::to_string(&SessionTopic::MeaningCompass).unwrap();
        assert_eq!(json, "\"meaning_compass\"");
    }

    #[test]
    fn test_limited_defaults_to_false() {
        let created: SessionCreated = serde_json::from_str(r#"{"id":"s1"}"#).unwrap();
        assert!(!created.limited);

        let declined: SessionCreated = serde_json::from_str(r#"{"limited":true}"#).unwrap();
        assert!(declined.limited);
        assert_eq!(declined.id, None);
    }

    #[test]
    fn test_signup_omits_missing_age() {
        let req = SignupRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            age: None,
            purpose: Purpose::Growth,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("age"));
    }

    #[test]
    fn test_new_session_starts_requested() {
        let req = NewSessionRequest::requested(
            "u1".to_string(),
            SessionTopic::MindClarity,
            "2025-03-01".to_string(),
            "10:00".to_string(),
        );
        assert_eq!(req.status, "requested");
    }

    #[test]
    fn test_dashboard_decodes_nested_shape() {
        let dashboard: Dashboard = serde_json::from_str(
            r#"{
                "name": "Ana",
                "tana": {"percentages": {"mind": 60, "money": 35.5, "meaning": 80}},
                "sessions": {"used": 1, "total": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(dashboard.tana.percentages.money, 35.5);
        assert!(!dashboard.sessions.exhausted());
    }
}
