use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    event::{Event, Level, WireId},
    simulation::Context,
    time::Delta,
};

/// Reacts to wire transitions by scheduling further events.
///
/// `react` is only called when an event actually changed its target's level.
pub trait Circuit {
    fn react(&mut self, ev: &Event, ctx: &mut Context<'_>);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    Buf,
    Not,
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

impl GateKind {
    fn eval(self, mut inputs: impl Iterator<Item = Level>) -> Level {
        match self {
            GateKind::Buf => inputs.next().unwrap_or_default(),
            GateKind::Not => !inputs.next().unwrap_or_default(),
            GateKind::And => inputs.fold(Level::High, |acc, l| match (acc, l) {
                (Level::Low, _) | (_, Level::Low) => Level::Low,
                (Level::High, Level::High) => Level::High,
                _ => Level::Undefined,
            }),
            GateKind::Or => inputs.fold(Level::Low, |acc, l| match (acc, l) {
                (Level::High, _) | (_, Level::High) => Level::High,
                (Level::Low, Level::Low) => Level::Low,
                _ => Level::Undefined,
            }),
            GateKind::Xor => inputs.fold(Level::Low, |acc, l| match (acc, l) {
                (Level::Undefined, _) | (_, Level::Undefined) => Level::Undefined,
                (a, b) if a == b => Level::Low,
                _ => Level::High,
            }),
            GateKind::Nand => !GateKind::And.eval(inputs),
            GateKind::Nor => !GateKind::Or.eval(inputs),
        }
    }
}

/// A logic gate driving one output wire after a fixed propagation delay.
#[derive(Debug, Clone, derive_new::new, serde::Serialize, serde::Deserialize)]
pub struct Gate {
    pub kind: GateKind,
    pub inputs: SmallVec<[WireId; 2]>,
    pub output: WireId,
    pub delay: Delta,
}

/// A set of gates, indexed by the wires they listen on.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    gates: Vec<Gate>,
    fanout: FxHashMap<WireId, SmallVec<[usize; 4]>>,
}

impl Netlist {
    pub fn new(gates: Vec<Gate>) -> Self {
        let mut fanout = FxHashMap::<WireId, SmallVec<[usize; 4]>>::default();
        for (i, gate) in gates.iter().enumerate() {
            for &input in &gate.inputs {
                let listeners = fanout.entry(input).or_default();
                // A gate reading the same wire twice is evaluated once
                if listeners.last() != Some(&i) {
                    listeners.push(i);
                }
            }
        }
        Self { gates, fanout }
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
}

impl Circuit for Netlist {
    fn react(&mut self, ev: &Event, ctx: &mut Context<'_>) {
        let Some(listeners) = self.fanout.get(&ev.target) else {
            return;
        };
        for &i in listeners {
            let gate = &self.gates[i];
            let level = gate.kind.eval(gate.inputs.iter().map(|&w| ctx.level(w)));
            ctx.schedule(gate.delay, gate.output, level);
        }
    }
}

impl FromIterator<Gate> for Netlist {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
