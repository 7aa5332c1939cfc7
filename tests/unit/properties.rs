//! Algebraic properties checked against randomly generated programs: the
//! out-of-order completion order must never be observable in final register
//! state.

use proptest::prelude::*;

use crate::common::asm::{addi, syscall};
use crate::common::harness::TestContext;

/// Registers free of the `$v0`/`$a0` exit-syscall convention this harness
/// uses, and of `$0`.
const SAFE_REGS: [u32; 7] = [1, 3, 5, 6, 7, 8, 9];

proptest! {
    /// A batch of `addi $r, $0, delta` ops on distinct registers has no
    /// producer/consumer relationship between them; completion order inside
    /// the ALU reservation station must not change any register's final
    /// value from what a serial interpreter would produce.
    #[test]
    fn independent_alu_ops_match_a_serial_accumulator(
        deltas in proptest::collection::vec(-1000i32..=1000, 1..SAFE_REGS.len())
    ) {
        let mut ctx = TestContext::new();
        let mut program = Vec::new();
        for (reg, &delta) in SAFE_REGS.iter().zip(deltas.iter()) {
            program.push(addi(*reg, 0, delta as i16));
        }
        let last_reg = SAFE_REGS[deltas.len() - 1];
        program.push(addi(2, 0, 10));
        program.push(addi(4, last_reg, 0));
        program.push(syscall());
        ctx.load_program(&program);

        let (exited, status) = ctx.run_until_exit(500);
        prop_assert!(exited);
        prop_assert_eq!(status as i32, *deltas.last().unwrap());
    }

    /// A chain of `addi $1, $1, delta` is a single-producer/single-consumer
    /// relationship carried entirely through rename; the sum must match a
    /// serial accumulator regardless of how many cycles each link takes to
    /// resolve through the CDB.
    #[test]
    fn dependent_add_chain_matches_serial_accumulation(
        deltas in proptest::collection::vec(-500i32..=500, 1..8)
    ) {
        let mut ctx = TestContext::new();
        let mut program = vec![addi(1, 0, 0)];
        for &delta in &deltas {
            program.push(addi(1, 1, delta as i16));
        }
        program.push(addi(2, 0, 10));
        program.push(addi(4, 1, 0));
        program.push(syscall());
        ctx.load_program(&program);

        let (exited, status) = ctx.run_until_exit(500);
        prop_assert!(exited);
        let expected: i32 = deltas.iter().sum();
        prop_assert_eq!(status as i32, expected);
    }
}
