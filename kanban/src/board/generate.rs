//! Pluggable id, assignee, and time sources for new tasks.
//!
//! The store never reaches for ambient randomness or the wall clock
//! directly; it asks these strategies, so tests can pin every generated
//! value.

use chrono::{DateTime, Utc};
use kanban_proto::{ASSIGNEES, TaskId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Produces candidate identifiers for new tasks.
pub trait IdGenerator: Send {
    /// Returns the next candidate identifier.
    fn next_id(&mut self) -> TaskId;
}

/// Chooses the assignee label for a new task.
pub trait AssigneePicker: Send {
    /// Returns the assignee for the next task.
    fn pick(&mut self) -> String;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// `prefix-N` identifiers from an incrementing counter.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator yielding `{prefix}-{start}`, `{prefix}-{start + 1}`, ...
    #[must_use]
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: start,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("task", 1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(format!("{}-{}", self.prefix, self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Time-ordered UUID v7 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::now_v7().to_string())
    }
}

/// Uniform random choice from a roster.
#[derive(Debug)]
pub struct RandomRoster {
    roster: Vec<String>,
    rng: StdRng,
}

impl RandomRoster {
    /// Picks from `roster` using an OS-seeded generator.
    ///
    /// An empty roster falls back to [`ASSIGNEES`].
    #[must_use]
    pub fn new(roster: Vec<String>) -> Self {
        Self::with_rng(roster, StdRng::from_os_rng())
    }

    /// Picks from `roster` with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn seeded(roster: Vec<String>, seed: u64) -> Self {
        Self::with_rng(roster, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roster: Vec<String>, rng: StdRng) -> Self {
        Self {
            roster: non_empty_roster(roster),
            rng,
        }
    }

    /// The labels this picker chooses from.
    #[must_use]
    pub fn roster(&self) -> &[String] {
        &self.roster
    }
}

impl Default for RandomRoster {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AssigneePicker for RandomRoster {
    fn pick(&mut self) -> String {
        let index = self.rng.random_range(0..self.roster.len());
        self.roster[index].clone()
    }
}

/// Cycles through a roster in order.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    roster: Vec<String>,
    next: usize,
}

impl RoundRobin {
    /// Creates a picker starting at the first roster entry.
    ///
    /// An empty roster falls back to [`ASSIGNEES`].
    #[must_use]
    pub fn new(roster: Vec<String>) -> Self {
        Self {
            roster: non_empty_roster(roster),
            next: 0,
        }
    }
}

impl AssigneePicker for RoundRobin {
    fn pick(&mut self) -> String {
        let label = self.roster[self.next % self.roster.len()].clone();
        self.next = self.next.wrapping_add(1);
        label
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns the default roster as owned labels.
#[must_use]
pub fn default_roster() -> Vec<String> {
    ASSIGNEES.iter().map(ToString::to_string).collect()
}

fn non_empty_roster(roster: Vec<String>) -> Vec<String> {
    if roster.is_empty() {
        default_roster()
    } else {
        roster
    }
}
