//! Branch comparator tests, one case per funct3.

use rstest::rstest;
use rvseq_core::core::units::bru::Bru;
use rvseq_core::isa::rv32i::funct3;

const NEG1: u32 = -1i32 as u32;

#[rstest]
#[case::beq_equal(funct3::BEQ, 5, 5, true)]
#[case::beq_differ(funct3::BEQ, 5, 6, false)]
#[case::bne_differ(funct3::BNE, 5, 6, true)]
#[case::bne_equal(funct3::BNE, 5, 5, false)]
#[case::blt_signed(funct3::BLT, NEG1, 0, true)]
#[case::blt_equal(funct3::BLT, 3, 3, false)]
#[case::funct3_5_is_strict_greater(funct3::BGT, 4, 3, true)]
#[case::funct3_5_equal_not_taken(funct3::BGT, 3, 3, false)]
#[case::funct3_5_signed(funct3::BGT, 0, NEG1, true)]
#[case::bltu(funct3::BLTU, 0, NEG1, true)]
#[case::bltu_signed_looking(funct3::BLTU, NEG1, 0, false)]
#[case::bgeu_equal(funct3::BGEU, 7, 7, true)]
#[case::bgeu_less(funct3::BGEU, 6, 7, false)]
#[case::reserved_2(0b010, 1, 1, false)]
#[case::reserved_3(0b011, 1, 2, false)]
fn test_branch_conditions(#[case] f3: u32, #[case] a: u32, #[case] b: u32, #[case] taken: bool) {
    assert_eq!(Bru::taken(f3, a, b), taken);
}
