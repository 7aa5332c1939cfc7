//! Structural hazards: the ROB and the reservation stations are both bounded,
//! and both must stall rather than lose or duplicate an in-flight op when
//! full.

use mips_ooo_core::Config;

use crate::common::asm::{add, addi, syscall};
use crate::common::harness::TestContext;

const V0: u32 = 2;
const A0: u32 = 4;

fn exit_with(value_reg: u32) -> [u32; 2] {
    [addi(V0, 0, 10), addi(A0, value_reg, 0)]
}

fn independent_sum_program() -> Vec<u32> {
    let mut program = vec![
        addi(1, 0, 1),
        addi(3, 0, 2),
        addi(5, 0, 3),
        addi(6, 0, 4),
        addi(7, 0, 5),
        add(8, 1, 3),
        add(8, 8, 5),
        add(8, 8, 6),
        add(8, 8, 7),
    ];
    program.extend(exit_with(8));
    program.push(syscall());
    program
}

/// Runs to exit, counting cycles spent and instructions retired, so callers
/// can assert that the pipeline spent extra cycles stalling rather than
/// retiring in lock-step with fetch.
fn run_counting_stalls(ctx: &mut TestContext, max_cycles: u64) -> (u32, u64, u32) {
    let mut ticks = 0u64;
    let mut committed = 0u32;
    loop {
        ctx.core.tick().expect("core invariant violated");
        ticks += 1;
        if ctx.core.instruction_completed() {
            committed += 1;
        }
        let (exited, status) = ctx.core.exit_status();
        if exited {
            return (status, ticks, committed);
        }
        assert!(ticks < max_cycles, "program did not reach exit in time");
    }
}

#[test]
fn reservation_station_full_stalls_dispatch_without_losing_the_op() {
    let mut roomy = TestContext::with_config(Config::default());
    roomy.load_program(&independent_sum_program());
    let (roomy_status, roomy_ticks, _) = run_counting_stalls(&mut roomy, 300);

    // Only one slot per functional-unit class: every instruction after the
    // first must be re-tried through `pending_dispatch` before it fits.
    let config = Config {
        rs_size: 1,
        ..Config::default()
    };
    let mut cramped = TestContext::with_config(config);
    cramped.load_program(&independent_sum_program());
    let (cramped_status, cramped_ticks, _) = run_counting_stalls(&mut cramped, 300);

    assert_eq!(roomy_status, 1 + 2 + 3 + 4 + 5);
    assert_eq!(cramped_status, roomy_status, "the op must not be lost or corrupted by the stall");
    assert!(
        cramped_ticks > roomy_ticks,
        "a single reservation-station slot per class must force dispatch to \
         stall and retry, taking more cycles than with ample RS capacity \
         (roomy={roomy_ticks}, cramped={cramped_ticks})"
    );
}

#[test]
fn reorder_buffer_full_stalls_fetch_without_losing_the_op() {
    let mut roomy = TestContext::with_config(Config::default());
    roomy.load_program(&independent_sum_program());
    let (roomy_status, roomy_ticks, _) = run_counting_stalls(&mut roomy, 300);

    // Capacity 3 means only 2 entries can be in flight at once (one slot is
    // always reserved): fetch must see `rob.is_full()` and stall repeatedly.
    let config = Config {
        rob_size: 3,
        ..Config::default()
    };
    let mut cramped = TestContext::with_config(config);
    cramped.load_program(&independent_sum_program());
    let (cramped_status, cramped_ticks, _) = run_counting_stalls(&mut cramped, 300);

    assert_eq!(roomy_status, 1 + 2 + 3 + 4 + 5);
    assert_eq!(cramped_status, roomy_status, "the op must not be lost or corrupted by the stall");
    assert!(
        cramped_ticks > roomy_ticks,
        "a 2-deep ROB must force fetch to stall and retry rather than \
         overrun the ring, taking more cycles than with ample ROB capacity \
         (roomy={roomy_ticks}, cramped={cramped_ticks})"
    );
}

#[test]
fn linetrace_reports_live_rob_occupancy_not_just_a_count() {
    let mut ctx = TestContext::new();
    ctx.load_program(&independent_sum_program());

    ctx.core.tick().expect("core invariant violated");
    let trace = ctx.core.linetrace();
    assert!(
        trace.contains("ROB=[") && trace.contains("->"),
        "linetrace should report head->tail, got: {trace}"
    );
}
