//! Architectural-state tests: register file, condition codes, data memory.

use apex_pipeline_sim::core::arch::{ConditionCodes, DataMemory, Gpr};

#[test]
fn test_gpr_initialized_to_zero() {
    let regs = Gpr::new();
    for i in 0..32 {
        assert_eq!(regs.read(i), 0);
    }
}

#[test]
fn test_gpr_read_write_roundtrip() {
    let mut regs = Gpr::new();
    regs.write(5, 42);
    regs.write(6, -7);
    assert_eq!(regs.read(5), 42);
    assert_eq!(regs.read(6), -7);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn test_condition_codes_default_false() {
    let cc = ConditionCodes::default();
    assert!(!cc.z);
    assert!(!cc.n);
    assert!(!cc.p);
}

#[test]
fn test_condition_codes_set_from_result() {
    let mut cc = ConditionCodes::default();
    cc.set_from_result(0);
    assert!(cc.z && !cc.n && !cc.p);

    cc.set_from_result(-3);
    assert!(!cc.z && cc.n && !cc.p);

    cc.set_from_result(9);
    assert!(!cc.z && !cc.n && cc.p);
}

#[test]
fn test_data_memory_bounds_return_zero() {
    let mem = DataMemory::new(16);
    assert_eq!(mem.read(-1), 0);
    assert_eq!(mem.read(16), 0);
    assert_eq!(mem.read(1000), 0);
}

#[test]
fn test_data_memory_write_out_of_bounds_is_noop() {
    let mut mem = DataMemory::new(16);
    mem.write(-1, 99);
    mem.write(16, 99);
    assert_eq!(mem.read(-1), 0);
    assert_eq!(mem.read(16), 0);
}

#[test]
fn test_data_memory_read_write_roundtrip() {
    let mut mem = DataMemory::new(16);
    mem.write(0, 42);
    mem.write(15, -1);
    assert_eq!(mem.read(0), 42);
    assert_eq!(mem.read(15), -1);
    assert_eq!(mem.read(1), 0);
}
