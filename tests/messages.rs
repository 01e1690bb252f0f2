#[cfg(test)]
mod tests {
    use daytask::libs::messages::Message;

    #[test]
    fn test_import_and_export_failures_name_the_path() {
        assert_eq!(
            Message::ImportFailed("old.json".to_string()).to_string(),
            "Import from old.json was not completed"
        );
        assert_eq!(
            Message::ExportFailed("copy.json".to_string()).to_string(),
            "Export to copy.json was not completed"
        );
    }

    #[test]
    fn test_load_failure_carries_error_text() {
        let message = Message::TasksLoadFailed("expected value at line 1 column 1".to_string());
        assert_eq!(message.to_string(), "Failed to load file: expected value at line 1 column 1");
    }
}
