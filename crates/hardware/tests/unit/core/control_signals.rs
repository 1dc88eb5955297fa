//! Control-signal table tests.
//!
//! Each class row is checked field by field against the datapath it drives,
//! and the status and next-PC selectors are checked for their priorities.

use rstest::rstest;
use rvseq_core::Status;
use rvseq_core::common::constants::REG_NONE;
use rvseq_core::core::pipeline::signals::{
    self, ControlSignals, OpASrc, OpBSrc, PcInputs, StatusInputs,
};
use rvseq_core::isa::class::InstClass;

#[rstest]
#[case::halt(InstClass::Halt, OpASrc::Zero, OpBSrc::Zero, false, false)]
#[case::lui(InstClass::Lui, OpASrc::Zero, OpBSrc::Imm, true, false)]
#[case::auipc(InstClass::Auipc, OpASrc::Pc, OpBSrc::Imm, true, false)]
#[case::jal(InstClass::Jal, OpASrc::Zero, OpBSrc::Imm, true, false)]
#[case::jalr(InstClass::Jalr, OpASrc::Reg1, OpBSrc::Imm, true, false)]
#[case::branch(InstClass::Branch, OpASrc::Reg1, OpBSrc::Reg2, false, false)]
#[case::store(InstClass::Store, OpASrc::Reg1, OpBSrc::Imm, false, false)]
#[case::load(InstClass::Load, OpASrc::Reg1, OpBSrc::Imm, false, true)]
#[case::op_imm(InstClass::OpImm, OpASrc::Reg1, OpBSrc::Imm, true, false)]
#[case::op(InstClass::Op, OpASrc::Reg1, OpBSrc::Reg2, true, false)]
#[case::system(InstClass::System, OpASrc::Zero, OpBSrc::Zero, false, false)]
fn test_operand_and_writeback_selection(
    #[case] class: InstClass,
    #[case] a_src: OpASrc,
    #[case] b_src: OpBSrc,
    #[case] write_e: bool,
    #[case] write_m: bool,
) {
    let sig = ControlSignals::for_class(class);
    assert!(sig.valid);
    assert_eq!(sig.a_src, a_src);
    assert_eq!(sig.b_src, b_src);
    assert_eq!(sig.write_e, write_e);
    assert_eq!(sig.write_m, write_m);
}

#[test]
fn test_only_loads_read_and_only_stores_write() {
    for class in [
        InstClass::Halt,
        InstClass::Lui,
        InstClass::Auipc,
        InstClass::Jal,
        InstClass::Jalr,
        InstClass::Branch,
        InstClass::Store,
        InstClass::Load,
        InstClass::OpImm,
        InstClass::Op,
        InstClass::System,
    ] {
        let sig = ControlSignals::for_class(class);
        assert_eq!(sig.mem_read, class == InstClass::Load, "{class}");
        assert_eq!(sig.mem_write, class == InstClass::Store, "{class}");
    }
}

#[test]
fn test_unknown_class_is_invalid_and_inert() {
    let sig = ControlSignals::for_class(InstClass::Unknown(0x0b));
    assert_eq!(sig, ControlSignals::default());
    assert!(!sig.valid);
}

#[test]
fn test_destination_selection() {
    let op = ControlSignals::for_class(InstClass::Op);
    assert_eq!(signals::dst_e(&op, 5), 5);
    assert_eq!(signals::dst_m(&op, 5), REG_NONE);

    let load = ControlSignals::for_class(InstClass::Load);
    assert_eq!(signals::dst_e(&load, 5), REG_NONE);
    assert_eq!(signals::dst_m(&load, 5), 5);
}

#[test]
fn test_memory_address_and_data_selection() {
    assert_eq!(signals::mem_addr(InstClass::Load, 0x40), 0x40);
    assert_eq!(signals::mem_addr(InstClass::Store, 0x40), 0x40);
    assert_eq!(signals::mem_addr(InstClass::Op, 0x40), 0);
    assert_eq!(signals::mem_data(InstClass::Store, 9), 9);
    assert_eq!(signals::mem_data(InstClass::Load, 9), 0);
}

#[rstest]
#[case::fetch_fault_beats_invalid(true, false, false, InstClass::Unknown(1), Status::AddressFault)]
#[case::data_fault(false, true, true, InstClass::Load, Status::AddressFault)]
#[case::invalid(false, false, false, InstClass::Unknown(1), Status::InvalidInstruction)]
#[case::halt(false, false, true, InstClass::Halt, Status::Halted)]
#[case::ok(false, false, true, InstClass::Op, Status::Aok)]
fn test_status_priority(
    #[case] imem_error: bool,
    #[case] dmem_error: bool,
    #[case] valid: bool,
    #[case] class: InstClass,
    #[case] expected: Status,
) {
    let status = signals::next_status(StatusInputs {
        class,
        imem_error,
        dmem_error,
        valid,
    });
    assert_eq!(status, expected);
}

#[test]
fn test_next_pc_selection() {
    let base = PcInputs {
        class: InstClass::Branch,
        branch_taken: true,
        fetch_addr: 0x100,
        imm: -8,
        target: 0x999,
    };
    assert_eq!(signals::next_pc(base), 0xf8);
    assert_eq!(
        signals::next_pc(PcInputs {
            branch_taken: false,
            ..base
        }),
        0x104
    );
    assert_eq!(
        signals::next_pc(PcInputs {
            class: InstClass::Jalr,
            ..base
        }),
        0x999
    );
    assert_eq!(
        signals::next_pc(PcInputs {
            class: InstClass::Op,
            ..base
        }),
        0x104
    );
}
