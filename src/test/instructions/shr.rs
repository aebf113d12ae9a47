use crate::instr;
use crate::test::run_ok;

#[test]
fn shifts_right() {
    let processor = run_ok(&[
        instr!(MVI),
        4,
        instr!(MVR % B),
        instr!(MVI),
        0x80,
        instr!(SHR % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 8);
}

#[test]
fn wide_count_clears() {
    let processor = run_ok(&[
        instr!(MVI),
        9,
        instr!(MVR % B),
        instr!(MVI),
        0xff,
        instr!(SHR % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0);
}
