//! `Account` (persisted, has an id) and `AccountPayload` (incoming, id ignored).

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored account. Only the store constructs one, so every value carries its assigned id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    /// Rendered as `YYYY-MM-DD`.
    pub date_joined: NaiveDate,
}

/// Account fields as sent by a client. Unknown keys (including `id`) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccountPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

impl AccountPayload {
    /// Parse a request body. Fails when the input is not an object, a required
    /// field is missing, or a field has the wrong type.
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::Validation(
                "Invalid Account: body of request contained bad or no data".into(),
            ));
        }
        serde_json::from_value(value).map_err(|e| AppError::Validation(format!("Invalid Account: {}", e)))
    }

    /// Parse raw body bytes; malformed JSON is a validation failure like any other bad body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| AppError::Validation(format!("Invalid Account: {}", e)))?;
        Self::from_json(value)
    }

    pub fn date_joined_or_today(&self) -> NaiveDate {
        self.date_joined
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Account {
    /// Replace every field but `id` with the payload's.
    pub fn apply(&mut self, payload: AccountPayload) {
        self.date_joined = payload.date_joined_or_today();
        self.name = payload.name;
        self.email = payload.email;
        self.address = payload.address;
        self.phone_number = payload.phone_number;
    }

    pub fn from_payload(id: i64, payload: AccountPayload) -> Self {
        Account {
            id,
            date_joined: payload.date_joined_or_today(),
            name: payload.name,
            email: payload.email,
            address: payload.address,
            phone_number: payload.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Account {
        Account {
            id: 7,
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            address: "12 St James's Square, London".into(),
            phone_number: Some("555-0100".into()),
            date_joined: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        }
    }

    #[test]
    fn serializes_all_fields_with_iso_date() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 7,
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "address": "12 St James's Square, London",
                "phone_number": "555-0100",
                "date_joined": "2024-02-29"
            })
        );
    }

    #[test]
    fn round_trip_keeps_everything_but_id() {
        let account = sample();
        let payload = AccountPayload::from_json(serde_json::to_value(&account).unwrap()).unwrap();
        let restored = Account::from_payload(99, payload);
        assert_eq!(restored.id, 99);
        assert_eq!(Account { id: account.id, ..restored }, account);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = AccountPayload::from_json(json!({ "name": "not enough data" })).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn non_object_input_is_rejected() {
        for v in [json!(null), json!("account"), json!([1, 2]), json!(3)] {
            assert!(matches!(AccountPayload::from_json(v), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn wrong_type_and_bad_date_are_rejected() {
        let wrong_type = json!({ "name": 1, "email": "e", "address": "a" });
        assert!(AccountPayload::from_json(wrong_type).is_err());
        let bad_date = json!({ "name": "n", "email": "e", "address": "a", "date_joined": "yesterday" });
        assert!(AccountPayload::from_json(bad_date).is_err());
    }

    #[test]
    fn optional_fields_default_and_extra_keys_are_ignored() {
        let p = AccountPayload::from_json(json!({
            "id": 123,
            "name": "n",
            "email": "e",
            "address": "a",
            "phone_number": null,
            "favourite_colour": "green"
        }))
        .unwrap();
        assert_eq!(p.phone_number, None);
        assert_eq!(p.date_joined, None);
        assert_eq!(p.date_joined_or_today(), chrono::Local::now().date_naive());
    }

    #[test]
    fn malformed_json_bytes_are_a_validation_error() {
        assert!(matches!(AccountPayload::from_slice(b"{not json"), Err(AppError::Validation(_))));
    }

    #[test]
    fn apply_replaces_fields_and_keeps_id() {
        let mut account = sample();
        account.apply(AccountPayload {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            address: "Arlington".into(),
            phone_number: None,
            date_joined: NaiveDate::from_ymd_opt(2020, 1, 1),
        });
        assert_eq!(account.id, 7);
        assert_eq!(account.name, "Grace Hopper");
        assert_eq!(account.phone_number, None);
        assert_eq!(account.date_joined, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn apply_without_date_resets_to_today() {
        let mut account = sample();
        account.apply(AccountPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            address: "London".into(),
            phone_number: Some("555-0100".into()),
            date_joined: None,
        });
        assert_eq!(account.date_joined, chrono::Local::now().date_naive());
    }
}
