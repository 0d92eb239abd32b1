use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ApiConfig;

/// A registered school as reported by the `/schools` endpoint.
///
/// The client never mutates a record; the listing page only reads, filters and slices them.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SchoolRecord {
    /// Identifier assigned by the backend.
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Phone number as text. A JSON number is rendered in decimal; a JSON string is kept as-is,
    /// leading zeros included.
    #[serde(deserialize_with = "contact_from_number_or_string")]
    pub contact: String,
    pub email_id: String,
    /// Filename of the uploaded image, served from `{base}/schoolImages/`.
    pub image: String,
}

impl SchoolRecord {
    /// Absolute URL of the record's image, for use as an `<img src>`.
    pub fn image_url(&self, config: &ApiConfig) -> String {
        config.image_url(&self.image)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactValue {
    Number(u64),
    Text(String),
}

fn contact_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ContactValue::deserialize(deserializer)? {
        ContactValue::Number(n) => n.to_string(),
        ContactValue::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_listing_payload() {
        let body = r#"[
            {"id": 1, "name": "Alpha", "address": "12 Main Road", "city": "Pune",
             "state": "MH", "contact": 9876543210, "email_id": "a@alpha.in", "image": "alpha.png"},
            {"id": 2, "name": "Beta", "address": "4 Hill Street", "city": "Mumbai",
             "state": "MH", "contact": "9123456780", "email_id": "b@beta.in", "image": "beta.jpg"}
        ]"#;

        let records: Vec<SchoolRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].contact, "9876543210");
        assert_eq!(records[1].contact, "9123456780");
        assert_eq!(records[1].city, "Mumbai");
    }

    #[test]
    fn string_contact_keeps_leading_zero() {
        let body = r#"{"id": 1, "name": "Alpha", "address": "12 Main Road", "city": "Pune",
            "state": "MH", "contact": "0123456789", "email_id": "a@alpha.in",
            "image": "alpha.png"}"#;

        let record: SchoolRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.contact, "0123456789");
    }

    #[test]
    fn malformed_contact_does_not_sink_the_listing() {
        let body = r#"[
            {"id": 1, "name": "Alpha", "address": "12 Main Road", "city": "Pune",
             "state": "MH", "contact": "98-76", "email_id": "a@alpha.in", "image": "alpha.png"},
            {"id": 2, "name": "Beta", "address": "4 Hill Street", "city": "Mumbai",
             "state": "MH", "contact": 9123456780, "email_id": "b@beta.in", "image": "beta.jpg"}
        ]"#;

        let records: Vec<SchoolRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].contact, "98-76");
    }

    #[test]
    fn image_url_joins_static_path() {
        let record: SchoolRecord = serde_json::from_str(
            r#"{"id": 7, "name": "Gamma", "address": "1 Lake View", "city": "Goa",
                "state": "GA", "contact": 9000000000, "email_id": "g@gamma.in", "image": "g.png"}"#,
        )
        .unwrap();
        let config = ApiConfig::new("http://localhost:5000/");

        assert_eq!(
            record.image_url(&config),
            "http://localhost:5000/schoolImages/g.png"
        );
    }
}
