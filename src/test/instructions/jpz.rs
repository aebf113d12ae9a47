use crate::instr;
use crate::test::run_ok;

#[test]
fn taken_while_zero_flag_set() {
    let processor = run_ok(&[
        instr!(JPZ),
        0x00,
        0x06,
        instr!(MVI),
        0x55,
        instr!(RET),
        instr!(MVI),
        0xaa,
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0xaa);
}

#[test]
fn taken_after_cla() {
    let processor = run_ok(&[
        instr!(CLA),
        instr!(JPZ),
        0x00,
        0x07,
        instr!(MVI),
        0x55,
        instr!(RET),
        instr!(MVI),
        0xaa,
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0xaa);
}
