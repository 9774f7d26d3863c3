//! Command-line interface for running the automaton over map files

use crate::algorithm::executor::{Automaton, RunConfig, RunOutcome};
use crate::algorithm::history::RunHistory;
use crate::io::configuration::{
    DEFAULT_HISTORY_CEILING, DEFAULT_OBSTACLE_DENSITY, DEFAULT_SEED, MAP_EXTENSION,
    OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{AutomatonError, Result, invalid_parameter, io_error};
use crate::io::map::{read_map, read_map_file, validate_dimensions};
use crate::io::progress::{ProgressManager, RunStatus};
use crate::io::report::{Ending, ReportStyle, render_report};
use crate::spatial::generator::MapGenerator;
use crate::spatial::grid::Grid;
use crate::spatial::symbol::Symbol;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hurdlebot")]
#[command(
    author,
    version,
    about = "Simulate a grid automaton and report the directions it takes"
)]
/// Command-line arguments for the automaton simulator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Map file, directory of .map files, or '-' for standard input (default)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Committed moves before a run is reported as looping
    #[arg(short, long, default_value_t = DEFAULT_HISTORY_CEILING)]
    pub ceiling: usize,

    /// Stop as soon as the automaton repeats an exact state
    #[arg(short, long)]
    pub detect_cycles: bool,

    /// Simulate a random map of the given size instead of reading one
    #[arg(short, long, num_args = 2, value_names = ["LINES", "COLUMNS"])]
    pub generate: Option<Vec<usize>>,

    /// Random seed for reproducible map generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of interior cells that become internal obstacles in generated maps
    #[arg(long, default_value_t = DEFAULT_OBSTACLE_DENSITY)]
    pub density: f64,

    /// Collapse repeated directions into NAME xCOUNT lines
    #[arg(long)]
    pub compact: bool,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Process maps even if a result file exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing result files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run parameters selected on the command line
    pub const fn run_config(&self) -> RunConfig {
        RunConfig {
            history_ceiling: self.ceiling,
            detect_cycles: self.detect_cycles,
        }
    }

    /// Report formatting selected on the command line
    pub const fn report_style(&self) -> ReportStyle {
        ReportStyle {
            compact: self.compact,
        }
    }

    /// Default log filter, overridden by `RUST_LOG`
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialise the global logger
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_filter());
        // A logger installed earlier (e.g. by a test harness) stays in place
        let _ = env_logger::Builder::from_env(env).try_init();
    }

    fn reads_stdin(&self) -> bool {
        self.target
            .as_deref()
            .is_none_or(|target| target == Path::new("-"))
    }
}

/// Simulate one map and render its report
///
/// A missing start, broken contours and boxed-in automatons are part of the
/// report rather than errors, so a batch can carry on past a bad map.
///
/// # Errors
///
/// Returns `InvalidParameter` if the run configuration is invalid
pub fn simulate(grid: Grid, config: RunConfig, style: ReportStyle) -> Result<(String, RunStatus)> {
    if config.history_ceiling > 0 && grid.find_first(Symbol::Start).is_none() {
        let error = AutomatonError::NoStartFound;
        log::warn!("{error}");
        let history = RunHistory::new(config.history_ceiling);
        let report = render_report(&grid, &history, Ending::Failed(&error), style);
        return Ok((report, RunStatus::Failed));
    }

    let mut automaton = Automaton::new(grid, config)?;

    let (ending_status, report) = match automaton.run() {
        Ok(outcome) => {
            let status = match outcome {
                RunOutcome::Arrived => RunStatus::Arrived,
                RunOutcome::StepCeiling | RunOutcome::CycleDetected => RunStatus::Looping,
                RunOutcome::Halted(_) => RunStatus::Failed,
            };
            let report = render_report(
                automaton.grid(),
                automaton.history(),
                Ending::Finished(outcome),
                style,
            );
            (status, report)
        }
        Err(error) if error.is_run_failure() => {
            log::warn!("{error}");
            let report = render_report(
                automaton.grid(),
                automaton.history(),
                Ending::Failed(&error),
                style,
            );
            (RunStatus::Failed, report)
        }
        Err(error) => return Err(error),
    };

    Ok((report, ending_status))
}

/// Orchestrates batch processing of map files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process maps according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, a run or writing a result
    /// fails. Maps rejected by the parser do not stop a batch; the first
    /// rejection is returned once every other map has been processed.
    pub fn process(&mut self) -> Result<()> {
        if let Some(dimensions) = self.cli.generate.clone() {
            return self.process_generated(&dimensions);
        }

        if self.cli.reads_stdin() {
            let grid = read_map(std::io::stdin().lock())?;
            let (report, status) =
                simulate(grid, self.cli.run_config(), self.cli.report_style())?;
            log::info!("<stdin>: {status:?}");
            return write_stdout(&report);
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut first_rejection = None;
        for file in &files {
            match self.process_file(file) {
                Ok(()) => {}
                Err(error) if error.is_map_rejection() => {
                    log::warn!("Rejected {}: {error}", file.display());
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_file(RunStatus::Failed);
                    }
                    first_rejection.get_or_insert(error);
                }
                Err(error) => return Err(error),
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        // First rejected map, reported once the rest of the batch is written
        first_rejection.map_or(Ok(()), Err)
    }

    fn process_generated(&self, dimensions: &[usize]) -> Result<()> {
        let [lines, columns] = dimensions else {
            return Err(invalid_parameter(
                "generate",
                &format!("{dimensions:?}"),
                &"expected LINES and COLUMNS",
            ));
        };

        let (lines, columns) = validate_dimensions(
            i64::try_from(*lines).unwrap_or(i64::MAX),
            i64::try_from(*columns).unwrap_or(i64::MAX),
        )?;

        let mut generator = MapGenerator::new(self.cli.seed, self.cli.density)?;
        let grid = generator.generate(lines, columns)?;

        let mut output = format!("Generated Map (seed {}):\n{lines} {columns}\n{grid}\n", self.cli.seed);
        let (report, status) = simulate(grid, self.cli.run_config(), self.cli.report_style())?;
        log::info!("generated {lines}x{columns} map: {status:?}");
        output.push_str(&report);

        write_stdout(&output)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(target) = self.cli.target.as_deref() else {
            return Ok(vec![]);
        };

        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| io_error(target, "read_dir", e))?;
            for entry in entries {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(MAP_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a map file, a directory or '-'",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            if !self.cli.quiet {
                log::warn!("Skipping: {} (result exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let grid = read_map_file(input_path)?;
        let (report, status) = simulate(grid, self.cli.run_config(), self.cli.report_style())?;
        log::info!("{}: {status:?}", input_path.display());

        std::fs::write(&output_path, report).map_err(|e| io_error(&output_path, "write", e))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(status);
        }

        Ok(())
    }

    /// Result file path for a map file: `<stem>_result.txt` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| io_error("<stdout>", "write", e))
}
