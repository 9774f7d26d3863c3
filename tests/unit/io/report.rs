//! Tests for plain-text run reports

#[cfg(test)]
mod tests {
    use hurdlebot::algorithm::executor::RunOutcome;
    use hurdlebot::algorithm::history::RunHistory;
    use hurdlebot::io::configuration::{CORRUPTED_MESSAGE, LOOPING_MESSAGE};
    use hurdlebot::io::error::AutomatonError;
    use hurdlebot::io::report::{Ending, ReportStyle, render_directions, render_report};
    use hurdlebot::spatial::{Direction, Grid, Position, Symbol};

    fn small_grid() -> Grid {
        Grid::from_rows(&["####", "#@ #", "#$ #", "####"]).unwrap()
    }

    fn history_of(moves: &[Direction]) -> RunHistory {
        let mut history = RunHistory::new(100);
        for direction in moves {
            history.record(*direction);
        }
        history
    }

    // Tests an arrived run lists the map then one heading per line
    // Verified by omitting the blank line after the map
    #[test]
    fn test_arrived_report() {
        let report = render_report(
            &small_grid(),
            &history_of(&[Direction::South]),
            Ending::Finished(RunOutcome::Arrived),
            ReportStyle::default(),
        );
        assert_eq!(
            report,
            "Evaluated Map:\n####\n#@ #\n#$ #\n####\n\nDirections:\nSOUTH\n"
        );
    }

    // Tests the full text of looping and corrupted reports
    // Verified by dropping the newline after the indicator
    #[test]
    fn test_failure_report_text() {
        let history = history_of(&[Direction::East]);
        assert_eq!(
            render_report(
                &small_grid(),
                &history,
                Ending::Finished(RunOutcome::StepCeiling),
                ReportStyle::default(),
            ),
            "Evaluated Map:\n####\n#@ #\n#$ #\n####\n\nDirections:\n\
             It appears that the automaton is looping.\nNo arrival within 100 moves.\n"
        );

        let error = AutomatonError::NoStartFound;
        assert_eq!(
            render_report(
                &small_grid(),
                &history,
                Ending::Failed(&error),
                ReportStyle { compact: true },
            ),
            "Evaluated Map:\n####\n#@ #\n#$ #\n####\n\nDirections:\n\
             The map appears to be corrupted.\nMap doesn't contain a starting point\n"
        );
        assert_eq!(
            render_directions(&RunHistory::new(3), ReportStyle { compact: true }),
            ""
        );
    }

    // Tests compact style collapses repeated headings
    // Verified by counting total moves per heading
    #[test]
    fn test_compact_directions() {
        let history = history_of(&[
            Direction::South,
            Direction::South,
            Direction::East,
            Direction::South,
        ]);
        assert_eq!(
            render_directions(&history, ReportStyle { compact: true }),
            "SOUTH x2\nEAST x1\nSOUTH x1\n"
        );
        assert_eq!(
            render_directions(&history, ReportStyle::default()),
            "SOUTH\nSOUTH\nEAST\nSOUTH\n"
        );
    }

    // Tests looping runs print the looping indicator instead of directions
    // Verified by listing the directions of a looping run
    #[test]
    fn test_looping_reports() {
        let history = history_of(&[Direction::East, Direction::West]);
        let ceiling = render_report(
            &small_grid(),
            &history,
            Ending::Finished(RunOutcome::StepCeiling),
            ReportStyle::default(),
        );
        assert!(ceiling.contains(LOOPING_MESSAGE));
        assert!(ceiling.contains("within 100 moves"));
        assert!(!ceiling.contains("EAST"));

        let cycle = render_report(
            &small_grid(),
            &history,
            Ending::Finished(RunOutcome::CycleDetected),
            ReportStyle::default(),
        );
        assert!(cycle.contains(LOOPING_MESSAGE));
        assert!(cycle.contains("after 2 moves"));
    }

    // Tests broken maps print the corruption indicator and the cause
    // Verified by printing the looping indicator for failures
    #[test]
    fn test_corrupted_reports() {
        let halted = render_report(
            &small_grid(),
            &history_of(&[]),
            Ending::Finished(RunOutcome::Halted(Symbol::Other('?'))),
            ReportStyle::default(),
        );
        assert!(halted.contains(CORRUPTED_MESSAGE));
        assert!(halted.contains("'?'"));

        let error = AutomatonError::BoxedIn {
            position: Position::new(1, 1),
            iteration: 2,
        };
        let ending = Ending::Failed(&error);
        assert!(!ending.arrived());
        let failed = render_report(
            &small_grid(),
            &history_of(&[]),
            ending,
            ReportStyle::default(),
        );
        assert!(failed.starts_with("Evaluated Map:\n####\n"));
        assert!(failed.contains(CORRUPTED_MESSAGE));
        assert!(failed.contains("boxed in at (1, 1)"));
        assert!(Ending::Finished(RunOutcome::Arrived).arrived());
    }
}
