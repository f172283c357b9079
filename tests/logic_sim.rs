use mheap::{
    time::{Delta, Time},
    Config, Event, Gate, GateKind, Level, Netlist, Record, WireId,
};
use smallvec::smallvec;

const A: WireId = WireId::new(0);
const B: WireId = WireId::new(1);
const OUT: WireId = WireId::new(2);
const NOT_OUT: WireId = WireId::new(3);

// OUT = A & B after 2 ticks, NOT_OUT = !OUT after 1 tick
fn and_not() -> Netlist {
    Netlist::new(vec![
        Gate::new(GateKind::And, smallvec![A, B], OUT, Delta::new(2)),
        Gate::new(GateKind::Not, smallvec![OUT], NOT_OUT, Delta::ONE),
    ])
}

fn at(t: u64, wire: WireId, level: Level) -> Event {
    Event::new(Time::new(t), wire, level)
}

fn transitions_on(records: &[Record], wire: WireId) -> Vec<(u64, Level)> {
    records
        .iter()
        .filter(|r| r.wire == wire)
        .map(|r| (r.time.into_u64(), r.level))
        .collect()
}

#[test]
fn and_gate_propagates() -> anyhow::Result<()> {
    let stimuli = vec![
        at(0, B, Level::High),
        at(1, A, Level::Low),
        at(10, A, Level::High),
        at(20, B, Level::Low),
    ];
    let cfg = Config::builder()
        .circuit(and_not())
        .stimuli(stimuli)
        .arity(3)
        .build();
    let records = mheap::run(cfg)?;

    assert!(records.windows(2).all(|w| w[0].time <= w[1].time));
    assert_eq!(
        transitions_on(&records, OUT),
        vec![(3, Level::Low), (12, Level::High), (22, Level::Low)]
    );
    assert_eq!(
        transitions_on(&records, NOT_OUT),
        vec![(4, Level::High), (13, Level::Low), (23, Level::High)]
    );
    Ok(())
}

#[test]
fn arity_does_not_change_trace() -> anyhow::Result<()> {
    let stimuli: Vec<Event> = (0..40)
        .map(|t| {
            let wire = if t % 3 == 0 { A } else { B };
            let level = if t % 2 == 0 { Level::High } else { Level::Low };
            at(t * 5 % 97, wire, level)
        })
        .collect();
    let mut traces = Vec::new();
    for arity in [2, 4, 7] {
        let cfg = Config::builder()
            .circuit(and_not())
            .stimuli(stimuli.clone())
            .arity(arity)
            .build();
        let records = mheap::run(cfg)?;
        traces.push(transitions_on(&records, OUT));
    }
    assert!(traces.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

#[test]
fn max_time_cuts_off() -> anyhow::Result<()> {
    let cfg = Config::builder()
        .circuit(and_not())
        .stimuli(vec![at(0, B, Level::High), at(1, A, Level::High)])
        .max_time(3u64)
        .build();
    let records = mheap::run(cfg)?;
    assert_eq!(transitions_on(&records, OUT), vec![(3, Level::High)]);
    assert!(transitions_on(&records, NOT_OUT).is_empty());
    Ok(())
}

#[test]
fn gate_output_past_end_of_time_is_dropped() -> anyhow::Result<()> {
    let netlist = Netlist::new(vec![Gate::new(
        GateKind::Not,
        smallvec![A],
        B,
        Delta::ONE,
    )]);
    let cfg = Config::builder()
        .circuit(netlist)
        .stimuli(vec![Event::new(Time::MAX, A, Level::High)])
        .build();
    let records = mheap::run(cfg)?;
    assert_eq!(records, vec![Record::new(Time::MAX, A, Level::High)]);
    Ok(())
}

#[test]
fn invalid_arity_is_reported() {
    let cfg = Config::builder()
        .circuit(and_not())
        .stimuli(Vec::new())
        .arity(1)
        .build();
    assert!(matches!(
        mheap::run(cfg),
        Err(mheap::driver::Error::Heap(_))
    ));
}

#[test]
fn reads_json_inputs() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("mheap-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let stimuli_path = dir.join("stimuli.json");
    let netlist_path = dir.join("netlist.json");
    std::fs::write(
        &stimuli_path,
        r#"[{"time": 0, "target": 0, "level": "1"}, {"time": 4, "target": 0, "level": "0"}]"#,
    )?;
    std::fs::write(
        &netlist_path,
        r#"[{"kind": "not", "inputs": [0], "output": 1, "delay": 3}]"#,
    )?;

    let cfg = Config::builder()
        .circuit(mheap::read_netlist(&netlist_path)?)
        .stimuli(mheap::read_stimuli(&stimuli_path)?)
        .build();
    let records = mheap::run(cfg)?;
    assert_eq!(
        transitions_on(&records, B),
        vec![(3, Level::Low), (7, Level::High)]
    );

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
