//! The board core: task store, column projection, and the strategies that
//! fill in defaults for new tasks.
//!
//! The store is the single owner of the task list. Presentation code reads
//! immutable snapshots of it and changes it only through the store's
//! mutation methods.

pub mod generate;
pub mod projection;
pub mod seed;
pub mod shared;
pub mod store;

pub use generate::{
    AssigneePicker, Clock, FixedClock, IdGenerator, RandomRoster, RoundRobin, SequentialIds,
    SystemClock, UuidIds,
};
pub use projection::{BoardProjection, ColumnGroup, tasks_in};
pub use shared::SharedStore;
pub use store::{DEFAULT_DUE_IN_DAYS, TaskList, TaskStore};
