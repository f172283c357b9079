use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    circuit::Circuit,
    data::Record,
    event::{Event, Level, WireId},
    schedule::Schedule,
    time::{Delta, Time},
};

// Most reactions will not yield very many events
pub(crate) type EventList = SmallVec<[Event; 4]>;

#[derive(Debug, typed_builder::TypedBuilder)]
pub(crate) struct Simulation<C: Circuit> {
    // Run-time
    #[builder(default, setter(skip))]
    cur_time: Time,
    schedule: Schedule,
    #[builder(default, setter(skip))]
    levels: FxHashMap<WireId, Level>,
    #[builder(default, setter(skip))]
    records: Vec<Record>,

    circuit: C,

    // Used for termination
    #[builder(default)]
    max_time: Option<Time>,
}

impl<C: Circuit> Simulation<C> {
    pub(crate) fn run(mut self) -> Vec<Record> {
        while !self.should_stop() {
            self.step();
        }
        self.records
    }

    fn step(&mut self) {
        let Some(next) = self.schedule.pop() else {
            return;
        };
        assert!(self.cur_time <= next.time, "simulated time went backward");
        self.cur_time = next.time;

        let events = self.apply(next);
        self.schedule.extend(events);
    }

    // Stops before applying any event later than `max_time`
    fn should_stop(&self) -> bool {
        let limit = self.max_time.unwrap_or(Time::MAX);
        self.schedule.peek().map_or(true, |ev| ev.time > limit)
    }

    fn apply(&mut self, ev: Event) -> EventList {
        let prev = self.levels.insert(ev.target, ev.level).unwrap_or_default();
        if prev == ev.level {
            // No transition, so nothing downstream can change
            return EventList::new();
        }
        self.records.push(Record::new(ev.time, ev.target, ev.level));
        let mut ctx = Context {
            cur_time: self.cur_time,
            levels: &self.levels,
            events: EventList::new(),
        };
        self.circuit.react(&ev, &mut ctx);
        ctx.into_events()
    }
}

/// The view of the simulation handed to a [`Circuit`] while it reacts to an event.
#[derive(Debug)]
pub struct Context<'a> {
    cur_time: Time,
    levels: &'a FxHashMap<WireId, Level>,
    events: EventList,
}

impl Context<'_> {
    pub fn cur_time(&self) -> Time {
        self.cur_time
    }

    /// The current level of `wire`. Wires that never saw an event are undefined.
    pub fn level(&self, wire: WireId) -> Level {
        self.levels.get(&wire).copied().unwrap_or_default()
    }

    /// Drives `target` to `level` after `delta` ticks.
    ///
    /// Events that would land past `Time::MAX` can never be reached and are dropped.
    pub fn schedule(&mut self, delta: Delta, target: WireId, level: Level) {
        if let Some(time) = self.cur_time.checked_add(delta) {
            self.events.push(Event::new(time, target, level));
        }
    }

    pub fn schedule_now(&mut self, target: WireId, level: Level) {
        self.schedule(Delta::ZERO, target, level);
    }

    pub(crate) fn into_events(self) -> EventList {
        self.events
    }
}
