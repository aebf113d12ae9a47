use crate::instr;
use crate::test::run_ok;

#[test]
fn not_taken_while_zero_flag_set() {
    let processor = run_ok(&[
        instr!(JNZ),
        0x00,
        0x06,
        instr!(MVI),
        0x55,
        instr!(RET),
        instr!(MVI),
        0xaa,
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0x55);
}
