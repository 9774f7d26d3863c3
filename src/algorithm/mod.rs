/// Exact loop detection over run states
pub mod cycle;
/// Controller state machine and run orchestration
pub mod executor;
/// Beer toggle, priority inverter and teleporter handlers
pub mod handlers;
/// Committed move history and non-termination ceiling
pub mod history;
/// Single-cell navigation step
pub mod navigation;
/// Obstacle resolution policy
pub mod obstacle;
/// Invertible obstacle priority ranking
pub mod priority;
/// Per-run automaton state
pub mod state;
