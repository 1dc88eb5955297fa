//! # Whole-Program Runs
//!
//! Small images loaded through the text loader and run through
//! [`Simulator::run`], checking the counts, statuses and state diffs a TTY run
//! would report.

use pretty_assertions::assert_eq;
use rvseq_core::sim::snapshot::{RegDiff, WordDiff};
use rvseq_core::{Config, Simulator, Status};

fn simulator(image: &str) -> Simulator {
    let mut sim = Simulator::new(Config::default());
    let _ = sim.load(image.as_bytes()).unwrap();
    sim
}

#[test]
fn test_halt_only_program() {
    let mut sim = simulator("0x000: 00000000 | halt\n");
    let before = sim.snapshot();
    let result = sim.run(10_000);

    assert_eq!(result.executed, 1);
    assert_eq!(result.status, Status::Halted);
    assert!(before.diff(&sim.snapshot()).is_empty());
}

#[test]
fn test_store_and_load_report() {
    let image = "\
0x000: 123455b7 | lui a1, 0x12345
0x004: 67858593 | addi a1, a1, 0x678
0x008: 10000613 | addi a2, x0, 0x100
0x00c: 00b62023 | sw a1, 0(a2)
0x010: 00062503 | lw a0, 0(a2)
0x014: 00000000 | halt
";
    let mut sim = simulator(image);
    let before = sim.snapshot();
    let result = sim.run(10_000);
    let diff = before.diff(&sim.snapshot());

    assert_eq!(result.executed, 6);
    assert_eq!(result.status, Status::Halted);
    assert_eq!(
        diff.regs,
        vec![
            RegDiff {
                reg: 10,
                old: 0,
                new: 0x1234_5678
            },
            RegDiff {
                reg: 11,
                old: 0,
                new: 0x1234_5678
            },
            RegDiff {
                reg: 12,
                old: 0,
                new: 0x100
            },
        ]
    );
    assert_eq!(
        diff.mem,
        vec![WordDiff {
            addr: 0x100,
            old: 0,
            new: 0x1234_5678
        }]
    );
    assert_eq!(diff.mem[0].to_string(), "0x0100:\t0x00000000\t0x12345678");
}

#[test]
fn test_budget_exhaustion_commits_last_instruction() {
    let image = "\
0x000: 00100513 | addi a0, x0, 1
0x004: 00150513 | addi a0, a0, 1
0x008: 00150513 | addi a0, a0, 1
0x00c: 00000000 | halt
";
    let mut sim = simulator(image);
    let result = sim.run(2);

    assert_eq!(result.executed, 2);
    assert_eq!(result.status, Status::Aok);
    assert_eq!(sim.cpu.regs.read(10), 2);
    assert_eq!(sim.cpu.pc, 8);
    assert!(!sim.cpu.has_pending());

    // Resuming picks up where the budget stopped.
    let result = sim.run(10);
    assert_eq!(result.executed, 2);
    assert_eq!(result.status, Status::Halted);
    assert_eq!(sim.cpu.regs.read(10), 3);
}

#[test]
fn test_zero_budget_executes_nothing() {
    let mut sim = simulator("0x000: 00100513\n");
    let result = sim.run(0);
    assert_eq!(result.executed, 0);
    assert_eq!(result.status, Status::Aok);
    assert_eq!(sim.cpu.regs.read(10), 0);
}

#[test]
fn test_endless_loop_stops_at_limit() {
    // jal x0, 0
    let mut config = Config::default();
    config.general.instruction_limit = 50;
    let mut sim = Simulator::new(config);
    let _ = sim.load("0x000: 0000006f\n".as_bytes()).unwrap();

    let result = sim.run_to_limit();
    assert_eq!(result.executed, 50);
    assert_eq!(result.status, Status::Aok);
    assert_eq!(sim.cpu.pc, 0);
}

#[test]
fn test_address_fault_leaves_state_unchanged() {
    // a1 = 8192, then sw a1, 0(a1).
    let image = "\
0x000: 000025b7 | lui a1, 0x2
0x004: 00b5a023 | sw a1, 0(a1)
0x008: 00000000 | halt
";
    let mut sim = simulator(image);
    let result = sim.run(100);
    let after = sim.snapshot();

    assert_eq!(result.status, Status::AddressFault);
    assert_eq!(result.executed, 2);
    assert_eq!(after.pc, 4);
    assert_eq!(after.regs[11], 8192);
    assert_eq!(sim.cpu.stats.instructions_retired, 1);

    // Stepping again repeats the fault without touching anything.
    assert_eq!(sim.step(), Status::AddressFault);
    assert_eq!(sim.snapshot(), after);
}
