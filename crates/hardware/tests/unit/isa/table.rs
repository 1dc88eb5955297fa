use rvseq_core::isa::abi;
use rvseq_core::isa::class::InstClass;
use rvseq_core::isa::table::{self, INSTRUCTION_SET};

#[test]
fn test_every_entry_is_reachable_by_name() {
    for entry in INSTRUCTION_SET {
        let found = table::find_instruction(entry.name).unwrap();
        assert_eq!(found.class, entry.class, "{}", entry.name);
    }
}

#[test]
fn test_branch_funct3_5_keeps_bge_name() {
    assert_eq!(table::iname(InstClass::Branch, 5, 0), "bge");
}

#[test]
fn test_immediate_funct3_3_keeps_sltiu_name() {
    assert_eq!(table::iname(InstClass::OpImm, 3, 0), "sltiu");
}

#[test]
fn test_negative_immediate_does_not_hide_addi() {
    // A negative addi immediate puts ones in the funct7 bits.
    assert_eq!(table::iname(InstClass::OpImm, 0, 0x7f), "addi");
}

#[test]
fn test_register_names() {
    assert_eq!(abi::reg_name(0), "x0");
    assert_eq!(abi::reg_name(abi::REG_A0), "a0");
    assert_eq!(abi::reg_name(abi::REG_A7), "a7");
    assert_eq!(abi::reg_name(31), "x31");
    assert_eq!(abi::reg_name(32), abi::NONE_NAME);
    assert_eq!(abi::find_register("a3"), Some(13));
    assert_eq!(abi::find_register("sp"), None);
}
