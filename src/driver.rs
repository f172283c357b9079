use std::path::Path;

use crate::{
    circuit::{Circuit, Gate, Netlist},
    event::Event,
    heap,
    schedule::Schedule,
    simulation::Simulation,
    time::Time,
    Record,
};

#[derive(Debug, typed_builder::TypedBuilder)]
pub struct Config<C: Circuit> {
    circuit: C,
    stimuli: Vec<Event>,

    // Schedule configuration
    #[builder(default = 2)]
    arity: usize,

    #[builder(default, setter(into, strip_option))]
    max_time: Option<Time>,
}

/// Runs a simulation to completion and returns every observed level transition, in time order.
///
/// Fails only if the configured arity cannot form a heap.
pub fn run<C: Circuit>(cfg: Config<C>) -> Result<Vec<Record>, Error> {
    let mut schedule = Schedule::new(cfg.arity)?;
    schedule.extend(cfg.stimuli);
    let sim = Simulation::builder()
        .schedule(schedule)
        .circuit(cfg.circuit)
        .max_time(cfg.max_time)
        .build();
    Ok(sim.run())
}

pub fn read_stimuli(path: impl AsRef<Path>) -> Result<Vec<Event>, Error> {
    let s = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}

pub fn read_netlist(path: impl AsRef<Path>) -> Result<Netlist, Error> {
    let s = std::fs::read_to_string(path)?;
    let gates: Vec<Gate> = serde_json::from_str(&s)?;
    Ok(Netlist::new(gates))
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid schedule")]
    Heap(#[from] heap::Error),

    #[error("serde error")]
    Serde(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
