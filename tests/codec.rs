#[cfg(test)]
mod tests {
    use daytask::libs::codec::{self, Document};
    use daytask::libs::store::TaskStore;
    use daytask::libs::task::{Task, TaskStatus};
    use serde_json::{json, Value};

    fn names_and_statuses(store: &TaskStore, bucket: &str) -> Vec<(String, TaskStatus)> {
        store
            .list_bucket(bucket)
            .iter()
            .map(|task| (task.name.clone(), task.status))
            .collect()
    }

    #[test]
    fn test_classify_documents() {
        assert!(matches!(Document::classify(json!({"daily_tasks": {}})), Document::Legacy(Some(_))));
        assert!(matches!(Document::classify(json!({"daily_tasks": 3})), Document::Legacy(None)));
        assert!(matches!(Document::classify(json!({"Monday": []})), Document::Canonical(_)));
        assert_eq!(Document::classify(json!([1, 2, 3])), Document::Malformed);
        assert_eq!(Document::classify(json!("text")), Document::Malformed);
    }

    #[test]
    fn test_serialize_canonical_shape() {
        let mut store = TaskStore::new();
        store.add("monday", "Task 1", TaskStatus::Done);
        store.add("general", "Misc", TaskStatus::Pending);

        let value: Value = serde_json::from_str(&codec::to_json(&store).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "Monday": [{"task": "Task 1", "status": "Done"}],
                "Tuesday": [],
                "Wednesday": [],
                "Thursday": [],
                "Friday": [],
                "Saturday": [],
                "Sunday": [],
                "General": [{"task": "Misc", "status": "Pending"}]
            })
        );
    }

    #[test]
    fn test_serialize_keeps_bucket_order_and_indentation() {
        let mut store = TaskStore::new();
        store.add("sunday", "Rest", TaskStatus::Pending);

        let text = codec::to_json(&store).unwrap();

        let keys = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "General"];
        let positions: Vec<usize> = keys.iter().map(|key| text.find(&format!("\"{}\"", key)).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.starts_with("{\n  \"Monday\": []"));
        assert!(text.contains("    {\n      \"task\": \"Rest\",\n      \"status\": \"Pending\"\n    }"));
        assert!(!text.contains("\"id\""));
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut store = TaskStore::new();
        store.add("monday", "Task 1", TaskStatus::Done);
        store.add("monday", "Task 2", TaskStatus::Pending);
        store.add("thursday", "Groceries", TaskStatus::Pending);
        store.rename("monday", 0, "First Task");

        let first = codec::to_json(&store).unwrap();
        let second = codec::to_json(&codec::from_json(&first).unwrap()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_load_fills_missing_buckets() {
        let store = codec::decode(json!({
            "Monday": [{"task": "First Task", "status": "Done"}],
            "Friday": [{"task": "Task 2", "status": "Pending"}]
        }));

        assert_eq!(store.list_all().len(), 8);
        assert_eq!(store.list_bucket("monday"), &[Task::new(0, "First Task", TaskStatus::Done)]);
        assert_eq!(store.list_bucket("friday"), &[Task::new(0, "Task 2", TaskStatus::Pending)]);
        for day in ["tuesday", "wednesday", "thursday", "saturday", "sunday", "general"] {
            assert!(store.list_bucket(day).is_empty(), "{} should be empty", day);
        }
    }

    #[test]
    fn test_canonical_load_renumbers_and_sets_counters() {
        let store = codec::decode(json!({
            "Tuesday": [
                {"task": "a", "status": "Done", "id": 40},
                {"task": "b"},
                {"task": "c", "status": "Pending"}
            ]
        }));

        let ids: Vec<u32> = store.list_bucket("tuesday").iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        for (name, tasks) in store.list_all() {
            assert_eq!(store.next_id(name) as usize, tasks.len());
        }
    }

    #[test]
    fn test_canonical_key_and_field_fallbacks() {
        let store = codec::decode(json!({
            "monday": [{"name": "from lowercase key"}],
            "Wednesday": [{"task": "capitalized wins"}],
            "wednesday": [{"task": "ignored"}],
            "Sunday": ["not an object", {"task": 42, "status": "done"}]
        }));

        assert_eq!(
            names_and_statuses(&store, "monday"),
            vec![("from lowercase key".to_string(), TaskStatus::Pending)]
        );
        assert_eq!(
            names_and_statuses(&store, "wednesday"),
            vec![("capitalized wins".to_string(), TaskStatus::Pending)]
        );
        assert_eq!(
            names_and_statuses(&store, "sunday"),
            vec![
                (String::new(), TaskStatus::Pending),
                ("42".to_string(), TaskStatus::Done)
            ]
        );
    }

    #[test]
    fn test_canonical_ignores_unknown_keys() {
        let store = codec::decode(json!({"Someday": [{"task": "x"}], "Monday": []}));
        assert_eq!(store.list_all().len(), 8);
        assert_eq!(store.task_count(), 0);
    }

    #[test]
    fn test_malformed_values_degrade_to_empty() {
        let store = codec::decode(json!({"Monday": "oops", "Tuesday": null, "Friday": {"task": "x"}}));
        assert_eq!(store.list_all().len(), 8);
        assert_eq!(store.task_count(), 0);

        let store = codec::decode(json!([{"task": "x"}]));
        assert_eq!(store.list_all().len(), 8);
        assert_eq!(store.task_count(), 0);
    }

    #[test]
    fn test_unknown_status_loads_as_pending() {
        let store = codec::decode(json!({"Monday": [
            {"task": "a", "status": "In progress"},
            {"task": "b", "status": true},
            {"task": "c", "status": "DONE"}
        ]}));

        let statuses: Vec<TaskStatus> = store.list_bucket("monday").iter().map(|task| task.status).collect();
        assert_eq!(statuses, vec![TaskStatus::Pending, TaskStatus::Pending, TaskStatus::Done]);
    }

    #[test]
    fn test_legacy_load_keeps_source_ids() {
        let store = codec::decode(json!({
            "daily_tasks": {"monday": [{"id": 5, "name": "X", "status": "Pending"}]},
            "task_id": {"monday": 99}
        }));

        assert_eq!(store.list_bucket("monday"), &[Task::new(5, "X", TaskStatus::Pending)]);
        assert_eq!(store.next_id("monday"), 6);
        assert_eq!(store.list_all().len(), 8);
        assert_eq!(store.next_id("tuesday"), 0);
    }

    #[test]
    fn test_legacy_defaults_and_counters() {
        let store = codec::decode(json!({"daily_tasks": {
            "friday": [
                {"name": "no id"},
                {"id": 7, "status": "Done"},
                {"id": "2", "name": "string id"},
                {"id": 5.0, "name": "float id"}
            ],
            "sunday": []
        }}));

        let friday = store.list_bucket("friday");
        assert_eq!(friday[0], Task::new(0, "no id", TaskStatus::Pending));
        assert_eq!(friday[1], Task::new(7, "", TaskStatus::Done));
        assert_eq!(friday[2], Task::new(2, "string id", TaskStatus::Pending));
        assert_eq!(friday[3], Task::new(5, "float id", TaskStatus::Pending));
        assert_eq!(store.next_id("friday"), 8);
        assert_eq!(store.next_id("sunday"), 0);
    }

    #[test]
    fn test_legacy_skips_malformed_entries() {
        let store = codec::decode(json!({"daily_tasks": {
            "monday": ["text", {"id": -1, "name": "negative"}, {"id": "x", "name": "bad"}, {"id": 1, "name": "ok"}],
            "tuesday": "not a list"
        }}));

        assert_eq!(store.list_bucket("monday"), &[Task::new(1, "ok", TaskStatus::Pending)]);
        assert!(store.list_bucket("tuesday").is_empty());
    }

    #[test]
    fn test_legacy_rejects_fractional_and_maximum_ids() {
        let store = codec::decode(json!({"daily_tasks": {
            "monday": [
                {"id": 5.5, "name": "fraction"},
                {"id": u32::MAX, "name": "max"},
                {"id": u32::MAX.to_string(), "name": "max as text"},
                {"id": 1e12, "name": "huge"},
                {"id": u32::MAX - 1, "name": "largest"}
            ]
        }}));

        assert_eq!(store.list_bucket("monday"), &[Task::new(u32::MAX - 1, "largest", TaskStatus::Pending)]);
        assert_eq!(store.next_id("monday"), u32::MAX);
    }

    #[test]
    fn test_legacy_keeps_extra_buckets_after_canonical() {
        let store = codec::decode(json!({"daily_tasks": {
            "someday": [{"id": 0, "name": "later"}],
            "Monday": [{"id": 0, "name": "now"}]
        }}));

        let names: Vec<&str> = store.list_all().iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "monday");
        assert_eq!(names[8], "someday");
        assert_eq!(store.list_bucket("monday")[0].name, "now");
    }

    #[test]
    fn test_legacy_with_non_mapping_payload_is_empty() {
        let store = codec::decode(json!({"daily_tasks": ["monday"]}));
        assert_eq!(store.list_all().len(), 8);
        assert_eq!(store.task_count(), 0);
    }

    #[test]
    fn test_round_trip_preserves_names_and_statuses() {
        let mut store = TaskStore::new();
        store.add("monday", "a", TaskStatus::Pending);
        store.add("monday", "b", TaskStatus::Done);
        store.add("saturday", "c", TaskStatus::Done);

        let loaded = codec::from_json(&codec::to_json(&store).unwrap()).unwrap();

        for (name, _) in store.list_all() {
            assert_eq!(names_and_statuses(&loaded, name), names_and_statuses(&store, name));
        }
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(codec::from_json("{ not json").is_err());
    }
}
