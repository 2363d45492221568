use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tapedeck::interpreter::config::EngineConfig;
use tapedeck::interpreter::scheduler::ManualClock;
use tapedeck::{Engine, Event, RunState, TickOutcome};

const TICK: Duration = Duration::from_millis(100);

fn manual_engine(batch_size: usize) -> (Engine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = EngineConfig::default()
        .with_tick_interval(TICK)
        .with_batch_size(batch_size);
    (Engine::with_clock(clock.clone(), config), clock)
}

/// Start `code` and drive a continuous run until it stops
fn run_to_completion(code: &str, input: &str) -> Engine<ManualClock> {
    let (mut engine, clock) = manual_engine(1_000_000);
    engine.start(code, input).expect("start failed");
    engine.run_to_end().expect("run failed");
    while engine.is_batch_active() {
        clock.advance(TICK);
        engine.poll();
    }
    engine
}

#[test]
fn test_output_single_char() {
    let engine = run_to_completion("++.", "");
    assert!(engine.is_halted());
    assert_eq!(engine.output(), "\u{2}");
}

#[test]
fn test_echo_input() {
    let engine = run_to_completion(",.", "A");
    assert_eq!(engine.output(), "A");
}

#[test]
fn test_multiplication_loop() {
    let engine = run_to_completion("++++++++[>++++++++<-]>.", "");
    assert_eq!(engine.output(), "@");
    assert_eq!(engine.memory()[1], 64);
    assert_eq!(engine.memory()[0], 0);
    assert_eq!(engine.memory_pointer(), 1);
}

#[test]
fn test_hello_world() {
    let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
    let engine = run_to_completion(code, "");
    assert_eq!(engine.output(), "Hello World!\n");
}

#[test]
fn test_comments_are_ignored() {
    let engine = run_to_completion("add two: ++ then print it: .", "");
    assert_eq!(engine.output(), "\u{2}");
}

#[test]
fn test_eof_reads_zero_repeatedly() {
    // Cat program: stops at EOF because `,` yields 0
    let engine = run_to_completion(",[.,]", "abc");
    assert_eq!(engine.output(), "abc");
    assert_eq!(engine.input_remaining(), "");

    let engine = run_to_completion("+,>+,>+,", "");
    assert_eq!(engine.memory()[..3], [0, 0, 0]);
}

#[test]
fn test_loop_skip_and_drain() {
    let engine = run_to_completion("[-]", "");
    assert_eq!(engine.memory()[0], 0);
    assert_eq!(engine.program_counter(), 3);

    let engine = run_to_completion("+[-]", "");
    assert_eq!(engine.memory()[0], 0);
    assert_eq!(engine.loop_depth(), 0);
}

#[test]
fn test_wraparound_and_clamp() {
    let engine = run_to_completion("-<", "");
    assert_eq!(engine.memory()[0], 255);
    assert_eq!(engine.memory_pointer(), 0);

    let engine = run_to_completion("-+", "");
    assert_eq!(engine.memory()[0], 0);
}

#[test]
fn test_pointer_clamps_at_right_edge() {
    // Marks every cell walking right; at the edge the last cell keeps being
    // incremented until it wraps to 0 and the loop ends
    let code = "+[>+]";
    let (mut engine, _) = manual_engine(1);
    engine.start(code, "").unwrap();
    engine.step_many(200_000).unwrap();
    assert!(engine.is_halted());
    assert_eq!(engine.memory_pointer(), 29_999);
    assert_eq!(engine.memory()[29_999], 0);
    assert_eq!(engine.memory()[29_998], 1);
}

#[test]
fn test_breakpoint_stops_on_marker() {
    let (mut engine, clock) = manual_engine(1_000);
    engine.start("+++*>++", "").unwrap();
    engine.run_to_breakpoint().unwrap();
    clock.advance(TICK);
    assert_eq!(engine.poll(), Some(TickOutcome::Breakpoint));
    assert_eq!(engine.run_state(), RunState::Paused);
    assert_eq!(engine.program_counter(), 3);
    assert_eq!(engine.current_instruction(), Some('*'));
    assert_eq!(engine.memory_pointer(), 0);
    assert_eq!(engine.memory()[0], 3);

    // Resuming without another breakpoint runs to the end
    engine.run_to_breakpoint().unwrap();
    clock.advance(TICK);
    assert_eq!(engine.poll(), Some(TickOutcome::Finished));
    assert_eq!(engine.memory()[1], 2);
}

#[test]
fn test_breakpoint_inside_loop_hits_each_iteration() {
    let (mut engine, clock) = manual_engine(1_000);
    engine.start("+++[*-]", "").unwrap();
    let mut hits = 0;
    loop {
        engine.run_to_breakpoint().unwrap();
        clock.advance(TICK);
        match engine.poll() {
            Some(TickOutcome::Breakpoint) => hits += 1,
            Some(TickOutcome::Finished) => break,
            other => panic!("unexpected tick outcome {:?}", other),
        }
    }
    assert_eq!(hits, 3);
}

#[test]
fn test_update_contract() {
    let (mut engine, clock) = manual_engine(3);
    let updates = Rc::new(Cell::new(0));
    let counter = Rc::clone(&updates);
    engine.on(Event::Update, move || counter.set(counter.get() + 1));

    engine.start("++++++++", "").unwrap(); // 1
    engine.step().unwrap(); // 2
    engine.run_to_end().unwrap(); // arming is silent
    assert_eq!(updates.get(), 2);

    clock.advance(TICK);
    assert_eq!(engine.poll(), Some(TickOutcome::Yielded)); // 3
    clock.advance(TICK);
    assert_eq!(engine.poll(), Some(TickOutcome::Yielded)); // 4
    clock.advance(TICK);
    assert_eq!(engine.poll(), Some(TickOutcome::Finished)); // 5
    assert_eq!(updates.get(), 5);

    engine.stop(); // already halted, still notifies
    assert_eq!(updates.get(), 6);
}

#[test]
fn test_stop_keeps_last_snapshot() {
    let (mut engine, _) = manual_engine(10);
    engine.start("+>++.", "").unwrap();
    engine.step_many(4).unwrap();
    let before = engine.snapshot();
    engine.stop();
    let after = engine.snapshot();
    assert!(after.is_halted());
    assert!(before.same_machine_state(&after));
    assert_eq!(after.current_cell(), 2);
}

#[test]
fn test_restart_after_finish_resets_state() {
    let mut engine = run_to_completion("+++.", "");
    assert_eq!(engine.output(), "\u{3}");
    engine.start(">", "").unwrap();
    assert_eq!(engine.output(), "");
    assert_eq!(engine.memory()[0], 0);
    assert_eq!(engine.run_state(), RunState::Paused);
}

#[test]
fn test_malformed_program_faults_lazily() {
    // Never taken: the unmatched `]` is only checked when the cell is non-zero
    let engine = run_to_completion("]", "");
    assert!(engine.last_error().is_none());

    let engine = run_to_completion("+]", "");
    assert_eq!(engine.last_error().and_then(|e| e.pc()), Some(1));

    let engine = run_to_completion("[", "");
    assert_eq!(engine.last_error().and_then(|e| e.pc()), Some(0));
}

/// Balanced programs without input or unbounded loops
fn balanced_program() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec!["+", "-", ">", "<", ".", "*", "x"]).prop_map(String::from);
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..6).prop_map(|parts| parts.concat()),
            // `[-]`-style bodies always terminate
            prop::collection::vec(inner, 0..3)
                .prop_map(|parts| format!("[{}[-]]", parts.concat().replace(['[', ']'], ""))),
        ]
    })
}

proptest! {
    #[test]
    fn step_and_batch_agree(code in balanced_program()) {
        let (mut stepped, _) = manual_engine(1);
        stepped.start(&code, "").unwrap();
        let mut steps = 0;
        while !stepped.is_halted() && steps < 100_000 {
            stepped.step().unwrap();
            steps += 1;
        }
        prop_assume!(stepped.is_halted());

        let batched = run_to_completion(&code, "");
        prop_assert!(batched.is_halted());
        prop_assert!(stepped.snapshot().same_machine_state(&batched.snapshot()));
    }
}
