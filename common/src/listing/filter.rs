use crate::model::school::SchoolRecord;

/// Whether `record` matches an already-lowercased, non-empty query.
fn record_matches(record: &SchoolRecord, lowered: &str, raw: &str) -> bool {
    record.name.to_lowercase().contains(lowered)
        || record.city.to_lowercase().contains(lowered)
        || record.state.to_lowercase().contains(lowered)
        || record.email_id.to_lowercase().contains(lowered)
        || record.contact.contains(raw)
}

/// Records whose name, city, state or email contains `query` (ignoring case), or whose contact
/// number contains it as digits. An empty query keeps everything, in order.
pub fn filter_records<'a>(records: &'a [SchoolRecord], query: &str) -> Vec<&'a SchoolRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let lowered = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &lowered, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn school(id: i64, name: &str, city: &str, contact: &str) -> SchoolRecord {
        SchoolRecord {
            id,
            name: name.into(),
            address: "Near the Old Fort".into(),
            city: city.into(),
            state: "Maharashtra".into(),
            contact: contact.into(),
            email_id: format!("{}@schools.in", name.to_lowercase()),
            image: format!("{id}.png"),
        }
    }

    fn names<'a>(records: &[&'a SchoolRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn matches_city_case_insensitively() {
        let records = vec![
            school(1, "Alpha", "Pune", "9876543210"),
            school(2, "Beta", "Mumbai", "9123456780"),
        ];

        assert_eq!(names(&filter_records(&records, "pune")), vec!["Alpha"]);
        assert_eq!(names(&filter_records(&records, "MUM")), vec!["Beta"]);
    }

    #[test]
    fn empty_query_is_identity() {
        let records = vec![
            school(1, "Alpha", "Pune", "9876543210"),
            school(2, "Beta", "Mumbai", "9123456780"),
        ];

        assert_eq!(names(&filter_records(&records, "")), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let records = vec![school(1, "Alpha", "Pune", "9876543210")];

        assert!(filter_records(&records, "zzz").is_empty());
    }

    #[test]
    fn searches_contact_email_and_state() {
        let records = vec![
            school(1, "Alpha", "Pune", "9876543210"),
            school(2, "Beta", "Mumbai", "9123456780"),
        ];

        assert_eq!(names(&filter_records(&records, "91234")), vec!["Beta"]);
        assert_eq!(names(&filter_records(&records, "alpha@")), vec!["Alpha"]);
        assert_eq!(filter_records(&records, "maharashtra").len(), 2);
    }

    #[test]
    fn contact_search_keeps_leading_zeros() {
        let records = vec![
            school(1, "Alpha", "Pune", "0123456789"),
            school(2, "Beta", "Mumbai", "9123456780"),
        ];

        assert_eq!(names(&filter_records(&records, "0123")), vec!["Alpha"]);
    }

    #[test]
    fn address_is_not_searched() {
        let records = vec![school(1, "Alpha", "Pune", "9876543210")];

        assert!(filter_records(&records, "old fort").is_empty());
    }

    #[test]
    fn source_is_left_untouched() {
        let records = vec![
            school(1, "Alpha", "Pune", "9876543210"),
            school(2, "Beta", "Mumbai", "9123456780"),
        ];
        let before = records.clone();

        let _ = filter_records(&records, "beta");

        assert_eq!(records, before);
    }
}
