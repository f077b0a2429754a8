use criterion::{black_box, criterion_group, criterion_main, Criterion};
use turing_sim::common::Motion;
use turing_sim::engine::Engine;
use turing_sim::mono::MonoMachine;
use turing_sim::tape::Tape;
use turing_sim::transition::Transition;

/// Accepts the words over {0, 1} with an odd number of zeros
fn zero_parity() -> MonoMachine {
    let mut m = MonoMachine::new('_');
    m.add_tape_symbol('_');
    for state in &["par", "impar", "si"] {
        m.add_state(state);
    }
    m.set_initial_state("par");
    m.add_accept_state("si");
    m.add_input_symbol('0').unwrap();
    m.add_input_symbol('1').unwrap();
    for t in vec![
        Transition::new("par".into(), '0', "impar".into(), '0', Motion::Right),
        Transition::new("par".into(), '1', "par".into(), '1', Motion::Right),
        Transition::new("impar".into(), '0', "par".into(), '0', Motion::Right),
        Transition::new("impar".into(), '1', "impar".into(), '1', Motion::Right),
        Transition::new("impar".into(), '_', "si".into(), '_', Motion::Stay),
    ] {
        m.add_transition(t).unwrap();
    }
    m
}

fn engine_benchmark(c: &mut Criterion) {
    c.bench_function("simulate_accept", |b| {
        let machine = zero_parity();
        let word = format!("{}0", "01".repeat(32));
        b.iter(|| {
            let mut engine = Engine::new(&machine);
            black_box(engine.simulate(&word, false));
        });
    });

    c.bench_function("simulate_with_trace", |b| {
        let machine = zero_parity();
        let word = format!("{}0", "01".repeat(32));
        b.iter(|| {
            let mut engine = Engine::new(&machine);
            black_box(engine.simulate(&word, true));
        });
    });

    c.bench_function("tape_write_move", |b| {
        let mut tape = Tape::new('_');
        b.iter(|| {
            tape.write('1');
            tape.move_right();
        });
        black_box(tape.head_position());
    });
}

criterion_group!(benches, engine_benchmark);
criterion_main!(benches);
