//! Tests for argument parsing, single-map simulation and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hurdlebot::algorithm::executor::RunConfig;
    use hurdlebot::io::cli::{Cli, FileProcessor, simulate};
    use hurdlebot::io::configuration::{DEFAULT_HISTORY_CEILING, DEFAULT_SEED};
    use hurdlebot::io::error::AutomatonError;
    use hurdlebot::io::progress::RunStatus;
    use hurdlebot::io::report::ReportStyle;
    use hurdlebot::spatial::Grid;
    use std::path::{Path, PathBuf};

    const ARRIVING: &str = "4 4\n####\n#@ #\n#$ #\n####\n";
    const LOOPING: &str = "4 5\n#####\n#@  #\n#   #\n#####\n";
    const BROKEN: &str = "4 5\n#####\n#@  #\n#    \n#####\n";

    fn write_map(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    // Tests defaults when only a target is given
    // Verified by defaulting detect_cycles to true
    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hurdlebot", "maps"]);
        assert_eq!(cli.target, Some(PathBuf::from("maps")));
        assert_eq!(cli.ceiling, DEFAULT_HISTORY_CEILING);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(!cli.detect_cycles);
        assert!(cli.generate.is_none());
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.run_config(), RunConfig::default());
        assert!(!cli.report_style().compact);
        assert_eq!(cli.log_filter(), "warn");
    }

    // Tests flags map onto run configuration and report style
    // Verified by ignoring the ceiling flag
    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "hurdlebot",
            "-c",
            "500",
            "-d",
            "--compact",
            "-n",
            "-g",
            "12",
            "20",
            "-s",
            "9",
        ]);
        assert_eq!(
            cli.run_config(),
            RunConfig {
                history_ceiling: 500,
                detect_cycles: true
            }
        );
        assert!(cli.report_style().compact);
        assert!(!cli.skip_existing());
        assert_eq!(cli.generate, Some(vec![12, 20]));
        assert_eq!(cli.seed, 9);
        assert!(cli.target.is_none());
    }

    // Tests verbosity and quiet select the log filter
    // Verified by letting verbosity override quiet
    #[test]
    fn test_log_filter() {
        assert_eq!(Cli::parse_from(["hurdlebot", "-v"]).log_filter(), "info");
        assert_eq!(Cli::parse_from(["hurdlebot", "-vv"]).log_filter(), "debug");
        assert_eq!(Cli::parse_from(["hurdlebot", "-vvvv"]).log_filter(), "trace");
        assert_eq!(Cli::parse_from(["hurdlebot", "-q", "-vv"]).log_filter(), "error");
        assert!(!Cli::parse_from(["hurdlebot", "-q"]).should_show_progress());
    }

    // Tests result files sit next to their map with the result suffix
    // Verified by replacing the map extension only
    #[test]
    fn test_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("maps/level1.map")),
            PathBuf::from("maps/level1_result.txt")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("solo.map")),
            PathBuf::from("solo_result.txt")
        );
    }

    // Tests each run ending maps to its batch status
    // Verified by reporting boxed in runs as looping
    #[test]
    fn test_simulate_statuses() {
        let config = RunConfig {
            history_ceiling: 100,
            detect_cycles: false,
        };
        let style = ReportStyle::default();

        let (report, status) = simulate(grid(&["####", "#@ #", "#$ #", "####"]), config, style).unwrap();
        assert_eq!(status, RunStatus::Arrived);
        assert!(report.ends_with("Directions:\nSOUTH\n"));

        let (_, status) = simulate(grid(&["#####", "#@  #", "#####"]), config, style).unwrap();
        assert_eq!(status, RunStatus::Looping);

        let (report, status) = simulate(grid(&["#####", "#X@X#", "#####"]), config, style).unwrap();
        assert_eq!(status, RunStatus::Failed);
        assert!(report.contains("boxed in"));

        let (_, status) = simulate(grid(&["#####", "#@Z$#", "#####"]), config, style).unwrap();
        assert_eq!(status, RunStatus::Failed);
    }

    // Tests a map without a start is reported as corrupted rather than aborting
    // Verified by propagating NoStartFound out of simulate
    #[test]
    fn test_simulate_no_start() {
        let (report, status) = simulate(
            grid(&["####", "# $#", "####"]),
            RunConfig::default(),
            ReportStyle::default(),
        )
        .unwrap();
        assert_eq!(status, RunStatus::Failed);
        assert!(report.starts_with("Evaluated Map:\n####\n# $#\n####\n"));
        assert!(report.contains("The map appears to be corrupted."));
        assert!(report.contains("Map doesn't contain a starting point"));
    }

    // Tests a batch keeps going past a map without a start
    // Verified by aborting the batch on the first failed map
    #[test]
    fn test_batch_continues_past_missing_start() {
        let dir = tempfile::tempdir().unwrap();
        write_map(dir.path(), "a.map", "4 4\n####\n# $#\n#  #\n####\n");
        write_map(dir.path(), "b.map", ARRIVING);

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["hurdlebot", "-q", target.as_str()]);
        FileProcessor::new(cli).process().unwrap();

        let missing = std::fs::read_to_string(dir.path().join("a_result.txt")).unwrap();
        assert!(missing.contains("starting point"));
        let arrived = std::fs::read_to_string(dir.path().join("b_result.txt")).unwrap();
        assert!(arrived.ends_with("SOUTH\n"));
    }

    // Tests a rejected map does not stop the rest of a batch but still fails the run
    // Verified by returning on the first rejected map
    #[test]
    fn test_batch_continues_past_rejected_map() {
        let dir = tempfile::tempdir().unwrap();
        write_map(dir.path(), "a.map", "3 3\n###\n#@#\n###\n");
        write_map(dir.path(), "b.map", ARRIVING);

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["hurdlebot", "-q", target.as_str()]);
        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(AutomatonError::InvalidDimensions { .. })
        ));

        assert!(!dir.path().join("a_result.txt").exists());
        assert!(dir.path().join("b_result.txt").exists());
    }

    // Tests a directory run writes one result per map and ignores other files
    // Verified by writing results for non-map files
    #[test]
    fn test_process_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_map(dir.path(), "a.map", ARRIVING);
        write_map(dir.path(), "b.map", LOOPING);
        write_map(dir.path(), "c.map", BROKEN);
        write_map(dir.path(), "notes.txt", "not a map");

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["hurdlebot", "-q", "-c", "40", target.as_str()]);
        FileProcessor::new(cli).process().unwrap();

        let arrived = std::fs::read_to_string(dir.path().join("a_result.txt")).unwrap();
        assert!(arrived.starts_with("Evaluated Map:\n####\n#@ #\n#$ #\n####\n\nDirections:\n"));
        assert!(arrived.ends_with("SOUTH\n"));

        let looping = std::fs::read_to_string(dir.path().join("b_result.txt")).unwrap();
        assert!(looping.contains("looping"));

        let broken = std::fs::read_to_string(dir.path().join("c_result.txt")).unwrap();
        assert!(broken.contains("corrupted"));

        assert!(!dir.path().join("notes_result.txt").exists());
    }

    // Tests existing results are kept unless no-skip is given
    // Verified by always overwriting results
    #[test]
    fn test_skip_existing() {
        let dir = tempfile::tempdir().unwrap();
        let map = write_map(dir.path(), "a.map", ARRIVING);
        let result = dir.path().join("a_result.txt");
        std::fs::write(&result, "old").unwrap();

        let target = map.to_string_lossy().to_string();
        let cli = Cli::parse_from(["hurdlebot", "-q", target.as_str()]);
        FileProcessor::new(cli).process().unwrap();
        assert_eq!(std::fs::read_to_string(&result).unwrap(), "old");

        let cli = Cli::parse_from(["hurdlebot", "-q", "-n", target.as_str()]);
        FileProcessor::new(cli).process().unwrap();
        assert!(std::fs::read_to_string(&result).unwrap().contains("SOUTH"));
    }

    // Tests batch processing stops on a map it cannot parse
    // Verified by skipping unparsable maps
    #[test]
    fn test_process_invalid_map() {
        let dir = tempfile::tempdir().unwrap();
        let map = write_map(dir.path(), "small.map", "3 3\n###\n#@#\n###\n");

        let target = map.to_string_lossy().to_string();
        let cli = Cli::parse_from(["hurdlebot", "-q", target.as_str()]);
        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(AutomatonError::InvalidDimensions { .. })
        ));
        assert!(!dir.path().join("small_result.txt").exists());
    }

    // Tests a target that is neither file nor directory is rejected
    // Verified by treating missing targets as empty batches
    #[test]
    fn test_missing_target() {
        let cli = Cli::parse_from(["hurdlebot", "-q", "/nonexistent/maps"]);
        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(AutomatonError::InvalidParameter { .. })
        ));
    }

    // Tests generated map sizes go through the same dimension check as map files
    // Verified by generating without validating dimensions
    #[test]
    fn test_generate_bad_dimensions() {
        let cli = Cli::parse_from(["hurdlebot", "-q", "-g", "2", "50"]);
        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(AutomatonError::InvalidDimensions { .. })
        ));

        let cli = Cli::parse_from(["hurdlebot", "-q", "-g", "8", "8", "--density", "1.5"]);
        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(AutomatonError::InvalidParameter { .. })
        ));
    }
}
