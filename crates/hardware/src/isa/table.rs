//! Instruction Mnemonic Table.
//!
//! Maps `(class, funct3, funct7)` triples to assembler mnemonics for tracing
//! and disassembly. A `None` function code matches any value; entries are
//! searched in order, so the more specific encoding of a pair is listed first.

use crate::isa::class::InstClass;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7};

/// Name returned for encodings missing from the table.
pub const BAD_NAME: &str = "<bad>";

/// One mnemonic and the encoding that selects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstrEntry {
    /// Assembler mnemonic.
    pub name: &'static str,
    /// Instruction class.
    pub class: InstClass,
    /// Required funct3, or `None` if the class does not use it.
    pub funct3: Option<u32>,
    /// Required funct7, or `None` if any value is accepted.
    pub funct7: Option<u32>,
}

impl InstrEntry {
    const fn new(
        name: &'static str,
        class: InstClass,
        funct3: Option<u32>,
        funct7: Option<u32>,
    ) -> Self {
        Self {
            name,
            class,
            funct3,
            funct7,
        }
    }

    /// Returns true if this entry describes the given encoding.
    pub fn matches(&self, class: InstClass, funct3: u32, funct7: u32) -> bool {
        self.class == class
            && self.funct3.is_none_or(|f| f == funct3)
            && self.funct7.is_none_or(|f| f == funct7)
    }
}

/// Every supported instruction.
pub const INSTRUCTION_SET: &[InstrEntry] = &[
    InstrEntry::new("lui", InstClass::Lui, None, None),
    InstrEntry::new("auipc", InstClass::Auipc, None, None),
    InstrEntry::new("jal", InstClass::Jal, None, None),
    InstrEntry::new("jalr", InstClass::Jalr, Some(0), None),
    InstrEntry::new("beq", InstClass::Branch, Some(f3::BEQ), None),
    InstrEntry::new("bne", InstClass::Branch, Some(f3::BNE), None),
    InstrEntry::new("blt", InstClass::Branch, Some(f3::BLT), None),
    InstrEntry::new("bge", InstClass::Branch, Some(f3::BGT), None),
    InstrEntry::new("bltu", InstClass::Branch, Some(f3::BLTU), None),
    InstrEntry::new("bgeu", InstClass::Branch, Some(f3::BGEU), None),
    InstrEntry::new("lw", InstClass::Load, Some(f3::LW), None),
    InstrEntry::new("sw", InstClass::Store, Some(f3::SW), None),
    InstrEntry::new("addi", InstClass::OpImm, Some(f3::ADD_SUB), None),
    InstrEntry::new("slli", InstClass::OpImm, Some(f3::SLL), None),
    InstrEntry::new("slti", InstClass::OpImm, Some(f3::SLT), None),
    InstrEntry::new("sltiu", InstClass::OpImm, Some(f3::SLTU), None),
    InstrEntry::new("xori", InstClass::OpImm, Some(f3::XOR), None),
    InstrEntry::new("srai", InstClass::OpImm, Some(f3::SRL_SRA), Some(f7::SRA)),
    InstrEntry::new("srli", InstClass::OpImm, Some(f3::SRL_SRA), None),
    InstrEntry::new("ori", InstClass::OpImm, Some(f3::OR), None),
    InstrEntry::new("andi", InstClass::OpImm, Some(f3::AND), None),
    InstrEntry::new("add", InstClass::Op, Some(f3::ADD_SUB), Some(f7::DEFAULT)),
    InstrEntry::new("sub", InstClass::Op, Some(f3::ADD_SUB), Some(f7::SUB)),
    InstrEntry::new("sll", InstClass::Op, Some(f3::SLL), Some(f7::DEFAULT)),
    InstrEntry::new("slt", InstClass::Op, Some(f3::SLT), Some(f7::DEFAULT)),
    InstrEntry::new("sltu", InstClass::Op, Some(f3::SLTU), Some(f7::DEFAULT)),
    InstrEntry::new("xor", InstClass::Op, Some(f3::XOR), Some(f7::DEFAULT)),
    InstrEntry::new("srl", InstClass::Op, Some(f3::SRL_SRA), Some(f7::DEFAULT)),
    InstrEntry::new("sra", InstClass::Op, Some(f3::SRL_SRA), Some(f7::SRA)),
    InstrEntry::new("or", InstClass::Op, Some(f3::OR), Some(f7::DEFAULT)),
    InstrEntry::new("and", InstClass::Op, Some(f3::AND), Some(f7::DEFAULT)),
    InstrEntry::new("system", InstClass::System, None, None),
    InstrEntry::new("halt", InstClass::Halt, None, None),
];

/// Finds the table entry describing an encoding.
pub fn lookup(class: InstClass, funct3: u32, funct7: u32) -> Option<&'static InstrEntry> {
    INSTRUCTION_SET
        .iter()
        .find(|e| e.matches(class, funct3, funct7))
}

/// Returns the mnemonic for an encoding, or `"<bad>"` if none matches.
pub fn iname(class: InstClass, funct3: u32, funct7: u32) -> &'static str {
    lookup(class, funct3, funct7).map_or(BAD_NAME, |e| e.name)
}

/// Finds an instruction by mnemonic.
pub fn find_instruction(name: &str) -> Option<&'static InstrEntry> {
    INSTRUCTION_SET.iter().find(|e| e.name == name)
}
