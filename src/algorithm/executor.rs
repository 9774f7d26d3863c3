use crate::{
    algorithm::cycle::CycleDetector,
    algorithm::handlers::{invert_priorities, teleport, toggle_beer},
    algorithm::history::RunHistory,
    algorithm::navigation::navigate,
    algorithm::obstacle::resolve_obstacle,
    algorithm::state::AutomatonState,
    io::configuration::DEFAULT_HISTORY_CEILING,
    io::error::{AutomatonError, Result, WithContext, invalid_parameter},
    spatial::{Direction, Grid, Symbol},
};

/// Run parameters controlling termination detection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Committed moves after which the run is reported as looping
    pub history_ceiling: usize,
    /// Whether to stop as soon as an exact state repeats
    pub detect_cycles: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            history_ceiling: DEFAULT_HISTORY_CEILING,
            detect_cycles: false,
        }
    }
}

/// How a run ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The automaton entered the `$` cell
    Arrived,
    /// The history reached its ceiling, the run is presumed to loop
    StepCeiling,
    /// An exact state repeated, the run loops forever
    CycleDetected,
    /// The automaton entered a cell outside the symbol alphabet
    Halted(Symbol),
}

impl RunOutcome {
    /// Whether the goal was reached
    pub const fn arrived(self) -> bool {
        matches!(self, Self::Arrived)
    }
}

/// Result of a single controller iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFlow {
    /// The run continues
    Continue,
    /// The run is over
    Finished(RunOutcome),
}

/// Automaton controller driving the hurdle state machine
///
/// Each iteration dispatches on the symbol of the cell last entered (or the
/// obstacle last hit) and runs exactly one handler. The first iteration
/// performs the initial step South from the start cell.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Grid, position, heading, modes and history of this run
    pub state: AutomatonState,
    /// Number of iterations executed so far
    pub iteration: usize,
    config: RunConfig,
    cycle_detector: Option<CycleDetector>,
    initial_step_done: bool,
    outcome: Option<RunOutcome>,
}

impl Automaton {
    /// Place an automaton on the start cell of `grid`
    ///
    /// No navigation step is taken until the first iteration.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidParameter` if the history ceiling is zero
    /// - `NoStartFound` if the grid holds no `@` cell
    pub fn new(grid: Grid, config: RunConfig) -> Result<Self> {
        if config.history_ceiling == 0 {
            return Err(invalid_parameter(
                "ceiling",
                &config.history_ceiling,
                &"must allow at least one move",
            ));
        }

        let start = grid
            .find_first(Symbol::Start)
            .ok_or(AutomatonError::NoStartFound)?;

        let cycle_detector = config
            .detect_cycles
            .then(|| CycleDetector::new(grid.lines(), grid.columns()));

        log::debug!(
            "Automaton placed at {start} on a {}x{} map",
            grid.lines(),
            grid.columns()
        );

        Ok(Self {
            state: AutomatonState::new(grid, start, config.history_ceiling),
            iteration: 0,
            config,
            cycle_detector,
            initial_step_done: false,
            outcome: None,
        })
    }

    /// Access the run state
    pub const fn state(&self) -> &AutomatonState {
        &self.state
    }

    /// Access the map, including any cleared obstacles
    pub const fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// Access the committed moves
    pub const fn history(&self) -> &RunHistory {
        &self.state.history
    }

    /// Access the run parameters
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Outcome of the run, once finished
    pub const fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    /// Consume the controller and keep its final state
    pub fn into_state(self) -> AutomatonState {
        self.state
    }

    /// Iterate until the run finishes
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `MapCorrupted` if a step reaches a broken contour
    /// - `BoxedIn` if an obstacle leaves no passable heading
    pub fn run(&mut self) -> Result<RunOutcome> {
        loop {
            if let StepFlow::Finished(outcome) = self.run_iteration()? {
                return Ok(outcome);
            }
        }
    }

    /// Execute a single iteration of the state machine
    ///
    /// Once finished, further calls keep returning the same outcome without
    /// touching the state.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `MapCorrupted` if a step reaches a broken contour
    /// - `BoxedIn` if an obstacle leaves no passable heading
    pub fn run_iteration(&mut self) -> Result<StepFlow> {
        if let Some(outcome) = self.outcome {
            return Ok(StepFlow::Finished(outcome));
        }

        self.iteration += 1;

        // Special case: the first iteration always heads South from the start cell
        if !self.initial_step_done {
            self.initial_step_done = true;
            navigate(&mut self.state, Direction::South).with_iteration(self.iteration)?;
            return Ok(StepFlow::Continue);
        }

        // Phase 1: the ceiling ends the run unconditionally, even on the goal
        if self.state.history.is_full() {
            return Ok(self.finish(RunOutcome::StepCeiling));
        }

        // Phase 2: terminal hurdles
        match self.state.hurdle {
            Symbol::Stop => return Ok(self.finish(RunOutcome::Arrived)),
            other @ Symbol::Other(_) => return Ok(self.finish(RunOutcome::Halted(other))),
            _ => {}
        }

        // Phase 3: exact repetition
        if let Some(detector) = &mut self.cycle_detector {
            if detector.observe(&self.state) {
                return Ok(self.finish(RunOutcome::CycleDetected));
            }
        }

        // Phase 4: run the handler for the current hurdle
        self.dispatch().with_iteration(self.iteration)?;

        Ok(StepFlow::Continue)
    }

    fn dispatch(&mut self) -> Result<()> {
        let state = &mut self.state;

        match state.hurdle {
            Symbol::Space => {}
            Symbol::Start => state.heading = Direction::South,
            Symbol::Push(direction) => state.heading = direction,
            Symbol::InternalObstacle | Symbol::ContourObstacle => {
                resolve_obstacle(state)?;
                return Ok(());
            }
            Symbol::BeerToggle => {
                toggle_beer(state);
            }
            Symbol::Inverter => invert_priorities(state),
            Symbol::Teleporter => {
                teleport(state);
            }
            // Terminal hurdles are handled before dispatch
            Symbol::Stop | Symbol::Other(_) => return Ok(()),
        }

        let heading = state.heading;
        navigate(state, heading)?;
        Ok(())
    }

    fn finish(&mut self, outcome: RunOutcome) -> StepFlow {
        log::debug!(
            "Run finished with {outcome:?} after {} iterations and {} moves",
            self.iteration,
            self.state.history.len()
        );
        self.outcome = Some(outcome);
        StepFlow::Finished(outcome)
    }
}
