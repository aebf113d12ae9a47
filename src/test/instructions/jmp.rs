use crate::instr;
use crate::test::run_ok;

#[test]
fn absolute() {
    let processor = run_ok(&[
        instr!(JMP),
        0x00,
        0x05,
        instr!(MVI),
        0x55,
        instr!(MVI),
        0xaa,
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0xaa);
}

#[test]
fn halt_sentinel() {
    // An all-ones address slot is the halt address itself.
    let processor = run_ok(&[instr!(JMP), 0xff, 0xff]);
    assert_eq!(processor.program_counter(), 0xffff);
    assert_eq!(processor.accumulator(), 0);
}
