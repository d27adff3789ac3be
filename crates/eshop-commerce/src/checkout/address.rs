//! Address types.

use crate::ids::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A saved delivery address.
///
/// Created through the create-address call and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub id: AddressId,
    pub name: String,
    pub contact_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub zipcode: String,
    #[serde(default)]
    pub user: Option<UserId>,
}

impl AddressRecord {
    /// Label used in the address picker.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.zipcode)
    }

    /// Format as multi-line, the way the order summary shows it.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.name.clone()];
        lines.push(format!("Contact Number: {}", self.contact_number));
        match self.landmark.as_deref().filter(|l| !l.is_empty()) {
            Some(landmark) => lines.push(format!("{}, {}", self.street, landmark)),
            None => lines.push(self.street.clone()),
        }
        lines.push(self.city.clone());
        lines.push(format!("{} {}", self.state, self.zipcode));
        lines.join("\n")
    }
}

/// Body of the create-address call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub name: String,
    pub contact_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub zipcode: String,
    pub user: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AddressRecord {
        AddressRecord {
            id: AddressId::new("a1"),
            name: "Asha Rao".into(),
            contact_number: "9876543210".into(),
            street: "12 MG Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            landmark: None,
            zipcode: "560001".into(),
            user: Some(UserId::new("u1")),
        }
    }

    #[test]
    fn test_record_from_backend_json() {
        let json = r#"{"id":"a1","name":"Asha Rao","contactNumber":"9876543210",
            "street":"12 MG Road","city":"Bengaluru","state":"Karnataka",
            "zipcode":"560001","user":"u1"}"#;
        let parsed: AddressRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn test_labels() {
        let mut address = record();
        assert_eq!(address.label(), "Asha Rao 560001");
        assert!(address.multi_line().contains("12 MG Road\nBengaluru"));

        address.landmark = Some("Near Metro".into());
        assert!(address.multi_line().contains("12 MG Road, Near Metro"));
    }

    #[test]
    fn test_new_address_omits_absent_landmark() {
        let body = NewAddress {
            name: "Asha".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("landmark").is_none());
        assert!(json.get("contactNumber").is_some());
    }
}
