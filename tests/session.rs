#[cfg(test)]
mod tests {
    use daytask::commands::open_working_session;
    use daytask::libs::config::Config;
    use daytask::libs::error::StorageError;
    use daytask::libs::session::Session;
    use daytask::libs::task::{Task, TaskStatus};
    use serde_json::{json, Value};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            SessionTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl SessionTestContext {
        fn path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_add_done_rename_flow() {
        let mut session = Session::new();

        session.add("Monday", "Task 1");
        assert_eq!(session.view_one("monday"), &[Task::new(0, "Task 1", TaskStatus::Pending)]);

        assert!(session.mark_done("monday", 0));
        assert_eq!(session.view_one("monday")[0].status, TaskStatus::Done);

        assert!(session.rename("monday", 0, "First Task"));
        assert_eq!(session.view_one("monday"), &[Task::new(0, "First Task", TaskStatus::Done)]);

        assert!(session.mark_pending("monday", 0));
        assert_eq!(session.view_one("monday")[0].status, TaskStatus::Pending);
    }

    #[test]
    fn test_new_session_has_no_file() {
        let mut session = Session::new();
        session.add("monday", "not persisted");
        assert!(session.current_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_associates_file_and_autosaves(ctx: &mut SessionTestContext) {
        let path = ctx.path("tasks.json");
        let mut session = Session::new();

        assert!(session.save_as(&path));
        assert_eq!(session.current_file(), Some(path.as_path()));
        assert_eq!(read_json(&path)["Monday"], json!([]));

        session.add("Monday", "Task 1");
        assert_eq!(read_json(&path)["Monday"], json!([{"task": "Task 1", "status": "Pending"}]));

        session.mark_done("monday", 0);
        assert_eq!(read_json(&path)["Monday"][0]["status"], json!("Done"));

        session.rename("monday", 0, "First Task");
        assert_eq!(read_json(&path)["Monday"][0]["task"], json!("First Task"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_no_match_does_not_autosave(ctx: &mut SessionTestContext) {
        let path = ctx.path("tasks.json");
        let mut session = Session::new();
        session.save(&path).unwrap();
        fs::write(&path, "sentinel").unwrap();

        assert!(!session.rename("monday", 3, "x"));
        assert!(!session.mark_done("monday", 3));

        assert_eq!(fs::read_to_string(&path).unwrap(), "sentinel");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_load_missing_file(ctx: &mut SessionTestContext) {
        let path = ctx.path("missing.json");
        let mut session = Session::new();

        assert!(matches!(session.load(&path), Err(StorageError::FileNotFound(_))));
        assert!(!session.load_from(&path));
        assert!(session.current_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_load_invalid_json_keeps_session(ctx: &mut SessionTestContext) {
        let path = ctx.path("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let mut session = Session::new();
        session.add("friday", "keep me");

        assert!(matches!(session.load(&path), Err(StorageError::Parse(_))));
        assert!(!session.load_from(&path));
        assert_eq!(session.view_one("friday").len(), 1);
        assert!(session.current_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_to_missing_directory_fails(ctx: &mut SessionTestContext) {
        let path = ctx.path("no/such/dir/tasks.json");
        let mut session = Session::new();

        assert!(matches!(session.save(&path), Err(StorageError::Io(_))));
        assert!(!session.save_as(&path));
        assert!(session.current_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_then_load_preserves_tasks(ctx: &mut SessionTestContext) {
        let path = ctx.path("week.json");
        let mut session = Session::new();
        session.add("monday", "a");
        session.add("monday", "b");
        session.add("wednesday", "c");
        session.add("", "d");
        session.mark_done("monday", 1);
        assert!(session.save_as(&path));

        let mut restored = Session::new();
        assert!(restored.load_from(&path));

        let triples = |session: &Session| -> Vec<(String, String, TaskStatus)> {
            session
                .view_all()
                .into_iter()
                .flat_map(|(bucket, tasks)| tasks.iter().map(move |task| (bucket.to_string(), task.name.clone(), task.status)))
                .collect()
        };
        assert_eq!(triples(&restored), triples(&session));
        assert_eq!(restored.current_file(), Some(path.as_path()));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_load_legacy_file_then_autosave_writes_canonical(ctx: &mut SessionTestContext) {
        let path = ctx.path("legacy.json");
        let legacy = json!({
            "daily_tasks": {"monday": [{"id": 5, "name": "X", "status": "Pending"}]},
            "task_id": {"monday": 1}
        });
        fs::write(&path, legacy.to_string()).unwrap();

        let mut session = Session::new();
        assert!(session.load_from(&path));
        assert_eq!(session.view_one("monday")[0].id, 5);

        let task = session.add("monday", "Y");
        assert_eq!(task.id, 6);

        let saved = read_json(&path);
        assert!(saved.get("daily_tasks").is_none());
        assert_eq!(
            saved["Monday"],
            json!([{"task": "X", "status": "Pending"}, {"task": "Y", "status": "Pending"}])
        );
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_working_session_creates_then_reuses_file(ctx: &mut SessionTestContext) {
        let path = ctx.path("work.json");
        let config = Config::default();

        let mut session = open_working_session(&config, Some(path.as_path())).unwrap();
        assert!(path.exists());
        session.add("tuesday", "persisted");

        let reopened = open_working_session(&config, Some(path.as_path())).unwrap();
        assert_eq!(reopened.view_one("tuesday")[0].name, "persisted");
    }
}
