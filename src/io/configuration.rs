//! Run constants and runtime configuration defaults

// Map header limits enforced by the shell
/// Smallest accepted number of rows or columns
pub const MIN_DIMENSION: i64 = 4;
/// Largest accepted number of rows or columns
pub const MAX_DIMENSION: i64 = 100;

// Committed moves before a run is declared non-terminating
/// Default history length at which a run is reported as looping
pub const DEFAULT_HISTORY_CEILING: usize = 0xFFFE;

// Default values for the random map generator
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default fraction of interior cells turned into internal obstacles
pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.15;

// Input and output files
/// Extension of map files picked up from a directory
pub const MAP_EXTENSION: &str = "map";
/// Suffix added to result filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of result files
pub const OUTPUT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Minimum number of files before a batch progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Report wording
/// Heading printed above the final map
pub const MAP_HEADING: &str = "Evaluated Map:";
/// Heading printed above the direction list
pub const DIRECTIONS_HEADING: &str = "Directions:";
/// Indicator printed when the run did not reach the goal
pub const LOOPING_MESSAGE: &str = "It appears that the automaton is looping.";
/// Indicator printed when the run aborted on a broken map
pub const CORRUPTED_MESSAGE: &str = "The map appears to be corrupted.";
