#[macro_use]
mod ident;

pub mod compare;
pub mod driver;
pub mod heap;
pub mod time;

pub(crate) mod circuit;
pub(crate) mod data;
pub(crate) mod event;
pub(crate) mod schedule;
pub(crate) mod simulation;

pub use circuit::{Circuit, Gate, GateKind, Netlist};
pub use compare::{Compare, Greater, Less};
pub use data::Record;
pub use driver::{read_netlist, read_stimuli, run, Config};
pub use event::{Event, EventLess, Level, ParseLevelError, WireId};
pub use heap::Heap;
pub use schedule::Schedule;
pub use simulation::Context;
