// For `error_chain!`
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

extern crate app_dirs;
extern crate chrono;
extern crate serde;
extern crate serde_json;

pub mod errors {
    error_chain! {
        errors {
            /// The user's data directory could not be found or deduced.
            CannotLocateStore {
                description("cannot locate data directory")
            }
            /// The durable store could not be read or written.
            Storage(t: String) {
                description("storage error")
                display("storage error: {}", t)
            }
            /// An IO error (usually caused by `std::io::Error`).
            Io(t: String) {
                description("io error")
                display("{}", t)
            }
            /// A JSON error (usually caused by `serde_json::Error`).
            Json(t: String) {
                description("json error")
                display("{}", t)
            }
            /// A date argument or stored date could not be understood.
            InvalidDate(t: String) {
                description("invalid date")
                display("invalid date '{}' (expected YYYY-MM-DD)", t)
            }
            /// An error in the format of a plan table.
            PlanFormat(t: String) {
                description("plan format error")
                display("plan format error: {}", t)
            }
            /// A day index past the end of the current selection.
            DayOutOfRange(day: usize, len: usize) {
                description("day out of range")
                display("day {} is out of range (the plan has {} days)", day, len)
            }
            /// The progress store was used before it was hydrated or after
            /// it was torn down.
            NotInitialized {
                description("progress store is not initialized")
            }
        }
    }
}

pub use errors::*;

pub mod calendar;
pub mod files;
pub mod passage;
pub mod plan;
pub mod plan_data;
pub mod progress;
pub mod store;

pub use calendar::Clock;
pub use passage::{passage_key, split_passage, PassageRef};
pub use plan::{Plan, PlanDay, Selection};
pub use progress::{PlanProvider, ProgressStore, ReadState};
pub use store::{KeyValueStore, MemoryStore};
