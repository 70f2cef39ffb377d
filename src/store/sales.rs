//! Read-only queries over a loaded [`Dataset`].

use serde_json::Value;

use crate::models::{ClientRecord, Dataset, SalesRep};

/// Key injected into each listed client: owning representative's id
pub const SALES_REP_ID_KEY: &str = "salesRepId";
/// Key injected into each listed client: owning representative's name
pub const SALES_REP_NAME_KEY: &str = "salesRepName";

/// First representative with a matching id. A miss is `None`, not an error.
pub fn rep_by_id(dataset: &Dataset, id: i64) -> Option<&SalesRep> {
    dataset.sales_reps.iter().find(|rep| rep.id == id)
}

/// Every client of every representative, in load order, annotated with the
/// owner. Injected keys overwrite same-named client attributes.
pub fn all_clients(dataset: &Dataset) -> Vec<ClientRecord> {
    dataset
        .sales_reps
        .iter()
        .flat_map(|rep| {
            rep.clients.iter().map(move |client| {
                let mut record = client.clone();
                record.insert(SALES_REP_ID_KEY.into(), Value::from(rep.id));
                record.insert(SALES_REP_NAME_KEY.into(), Value::from(rep.name.clone()));
                record
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dataset() -> Dataset {
        serde_json::from_value(json!({
            "salesReps": [
                {
                    "id": 1,
                    "name": "Alice",
                    "clients": [
                        {"name": "Acme", "industry": "Tech"},
                        {"name": "Globex", "industry": "Energy"}
                    ]
                },
                {
                    "id": 2,
                    "name": "Bob",
                    "clients": [{"name": "Initech", "salesRepId": 99}]
                },
                {"id": 3, "name": "Carol", "clients": []}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_rep_by_id_found() {
        let dataset = sample_dataset();
        for id in [1, 2, 3] {
            assert_eq!(rep_by_id(&dataset, id).unwrap().id, id);
        }
    }

    #[test]
    fn test_rep_by_id_missing() {
        let dataset = sample_dataset();
        assert!(rep_by_id(&dataset, 42).is_none());
        assert!(rep_by_id(&Dataset::default(), 1).is_none());
    }

    #[test]
    fn test_rep_by_id_first_match_wins() {
        let dataset: Dataset = serde_json::from_value(json!({
            "salesReps": [{"id": 5, "name": "First"}, {"id": 5, "name": "Second"}]
        }))
        .unwrap();
        assert_eq!(rep_by_id(&dataset, 5).unwrap().name, "First");
    }

    #[test]
    fn test_all_clients_count_and_order() {
        let dataset = sample_dataset();
        let clients = all_clients(&dataset);

        let expected: usize = dataset.sales_reps.iter().map(|r| r.clients.len()).sum();
        assert_eq!(clients.len(), expected);

        let names: Vec<_> = clients.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
    }

    #[test]
    fn test_all_clients_annotated_with_owner() {
        let clients = all_clients(&sample_dataset());

        assert_eq!(clients[0][SALES_REP_ID_KEY], 1);
        assert_eq!(clients[0][SALES_REP_NAME_KEY], "Alice");
        assert_eq!(clients[0]["industry"], "Tech");
        assert_eq!(clients[2][SALES_REP_NAME_KEY], "Bob");
    }

    #[test]
    fn test_injected_owner_overrides_client_attribute() {
        let clients = all_clients(&sample_dataset());
        assert_eq!(clients[2][SALES_REP_ID_KEY], 2);
    }

    #[test]
    fn test_all_clients_empty_dataset() {
        assert!(all_clients(&Dataset::default()).is_empty());
    }
}
