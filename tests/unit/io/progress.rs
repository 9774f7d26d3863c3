//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use hurdlebot::io::progress::{BatchSummary, ProgressManager, RunStatus};
    use std::path::Path;

    // Tests completed runs are tallied by status
    // Verified by counting looping runs as failed
    #[test]
    fn test_summary_tally() {
        let mut manager = ProgressManager::new();
        manager.initialize(4);
        manager.start_file(Path::new("maps/a.map"));
        manager.complete_file(RunStatus::Arrived);
        manager.complete_file(RunStatus::Looping);
        manager.complete_file(RunStatus::Failed);
        manager.complete_file(RunStatus::Arrived);
        manager.finish();

        assert_eq!(
            manager.summary(),
            BatchSummary {
                arrived: 2,
                looping: 1,
                failed: 1
            }
        );
        assert_eq!(manager.summary().total(), 4);
    }

    // Tests a single file runs without a bar and re-initialising resets the tally
    // Verified by keeping counts across initialize calls
    #[test]
    fn test_single_file_and_reset() {
        let mut manager = ProgressManager::default();
        manager.initialize(1);
        manager.start_file(Path::new("only.map"));
        manager.complete_file(RunStatus::Failed);
        manager.finish();
        assert_eq!(manager.summary().failed, 1);

        manager.initialize(1);
        assert_eq!(manager.summary(), BatchSummary::default());
        assert_eq!(manager.summary().total(), 0);
    }
}
