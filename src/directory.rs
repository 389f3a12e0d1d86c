// Sales directory domain types and wire schema.
//
// These mirror the JSON shape served by the external data source. Every
// field carries `#[serde(default)]` so a partial object decodes instead of
// failing the whole payload; normalization after decode clamps values the
// model declares non-negative.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a deal, mapped from the wire strings.
///
/// Unknown labels are preserved in `Other` so the UI can still display
/// whatever the data source sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DealStatus {
    ClosedWon,
    ClosedLost,
    InProgress,
    Other(String),
}

impl DealStatus {
    /// Parse a wire label into a status.
    pub fn from_label(s: &str) -> Self {
        match s {
            "Closed Won" => DealStatus::ClosedWon,
            "Closed Lost" => DealStatus::ClosedLost,
            "In Progress" => DealStatus::InProgress,
            other => DealStatus::Other(other.to_string()),
        }
    }

    /// The display label, identical to the wire string.
    pub fn label(&self) -> &str {
        match self {
            DealStatus::ClosedWon => "Closed Won",
            DealStatus::ClosedLost => "Closed Lost",
            DealStatus::InProgress => "In Progress",
            DealStatus::Other(label) => label,
        }
    }
}

impl Default for DealStatus {
    fn default() -> Self {
        DealStatus::Other(String::new())
    }
}

impl From<String> for DealStatus {
    fn from(s: String) -> Self {
        DealStatus::from_label(&s)
    }
}

impl From<DealStatus> for String {
    fn from(status: DealStatus) -> String {
        status.label().to_string()
    }
}

/// A sales opportunity attached to a representative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub client: String,
    /// Monetary value. Non-negative after normalization.
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub status: DealStatus,
}

/// A client account attached to a representative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    /// Contact address, shown as a mail-to reference.
    #[serde(default)]
    pub contact: String,
}

impl Client {
    /// Mail-to reference for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact)
    }
}

/// One sales representative with their deals and clients.
///
/// Immutable once fetched; the UI selects representatives by `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Representative {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

/// Top-level payload returned by the data source. A missing `salesReps`
/// field decodes as an empty directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryPayload {
    #[serde(default, rename = "salesReps")]
    pub sales_reps: Vec<Representative>,
}

impl DirectoryPayload {
    /// Consume the payload, applying boundary normalization: deal values
    /// that are negative or non-finite are clamped to zero.
    pub fn into_normalized(self) -> Vec<Representative> {
        let mut reps = self.sales_reps;
        for rep in &mut reps {
            for deal in &mut rep.deals {
                if !deal.value.is_finite() || deal.value < 0.0 {
                    deal.value = 0.0;
                }
            }
        }
        reps
    }
}

/// Find a representative by id.
pub fn find_rep(reps: &[Representative], id: u32) -> Option<&Representative> {
    reps.iter().find(|rep| rep.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "salesReps": [
                {
                    "id": 1,
                    "name": "Alice Johnson",
                    "role": "Senior Sales Executive",
                    "region": "North America",
                    "skills": ["Negotiation", "CRM"],
                    "deals": [
                        { "client": "Acme Corp", "value": 120000, "status": "Closed Won" },
                        { "client": "Beta Ltd", "value": 50000, "status": "In Progress" }
                    ],
                    "clients": [
                        { "name": "Acme Corp", "industry": "Manufacturing", "contact": "alice@acme.com" }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn decode_full_payload() {
        let payload: DirectoryPayload = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(payload.sales_reps.len(), 1);
        let rep = &payload.sales_reps[0];
        assert_eq!(rep.id, 1);
        assert_eq!(rep.name, "Alice Johnson");
        assert_eq!(rep.region, "North America");
        assert_eq!(rep.skills, vec!["Negotiation", "CRM"]);
        assert_eq!(rep.deals.len(), 2);
        assert_eq!(rep.deals[0].status, DealStatus::ClosedWon);
        assert_eq!(rep.deals[1].status, DealStatus::InProgress);
        assert_eq!(rep.clients[0].contact, "alice@acme.com");
    }

    #[test]
    fn missing_sales_reps_field_decodes_empty() {
        let payload: DirectoryPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.sales_reps.is_empty());
    }

    #[test]
    fn partial_representative_uses_defaults() {
        let json = r#"{ "salesReps": [ { "name": "Bob" } ] }"#;
        let payload: DirectoryPayload = serde_json::from_str(json).unwrap();
        let rep = &payload.sales_reps[0];
        assert_eq!(rep.id, 0);
        assert_eq!(rep.name, "Bob");
        assert!(rep.role.is_empty());
        assert!(rep.skills.is_empty());
        assert!(rep.deals.is_empty());
        assert!(rep.clients.is_empty());
    }

    #[test]
    fn status_labels_roundtrip() {
        for label in ["Closed Won", "Closed Lost", "In Progress"] {
            let status = DealStatus::from_label(label);
            assert_eq!(status.label(), label);
            assert!(!matches!(status, DealStatus::Other(_)));
        }
    }

    #[test]
    fn unknown_status_preserves_label() {
        let status = DealStatus::from_label("Negotiating");
        assert_eq!(status, DealStatus::Other("Negotiating".to_string()));
        assert_eq!(status.label(), "Negotiating");
    }

    #[test]
    fn status_serializes_to_wire_string() {
        let json = serde_json::to_string(&DealStatus::ClosedWon).unwrap();
        assert_eq!(json, "\"Closed Won\"");
        let back: DealStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DealStatus::ClosedWon);
    }

    #[test]
    fn missing_status_defaults_to_other_empty() {
        let json = r#"{ "client": "Acme", "value": 10 }"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.status, DealStatus::Other(String::new()));
    }

    #[test]
    fn normalization_clamps_negative_values() {
        let json = r#"{
            "salesReps": [
                { "id": 7, "deals": [
                    { "client": "A", "value": -5, "status": "In Progress" },
                    { "client": "B", "value": 250.5, "status": "In Progress" }
                ] }
            ]
        }"#;
        let payload: DirectoryPayload = serde_json::from_str(json).unwrap();
        let reps = payload.into_normalized();
        assert_eq!(reps[0].deals[0].value, 0.0);
        assert_eq!(reps[0].deals[1].value, 250.5);
    }

    #[test]
    fn mailto_reference() {
        let client = Client {
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            contact: "alice@acme.com".to_string(),
        };
        assert_eq!(client.mailto(), "mailto:alice@acme.com");
    }

    #[test]
    fn find_rep_by_id() {
        let reps = vec![
            Representative { id: 1, name: "A".to_string(), ..Default::default() },
            Representative { id: 2, name: "B".to_string(), ..Default::default() },
        ];
        assert_eq!(find_rep(&reps, 2).map(|r| r.name.as_str()), Some("B"));
        assert!(find_rep(&reps, 9).is_none());
    }
}
