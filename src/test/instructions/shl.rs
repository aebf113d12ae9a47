use crate::instr;
use crate::test::run_ok;

#[test]
fn shifts_left() {
    let processor = run_ok(&[
        instr!(MVI),
        3,
        instr!(MVR % B),
        instr!(MVI),
        1,
        instr!(SHL % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 8);
}

#[test]
fn wide_count_clears() {
    let processor = run_ok(&[
        instr!(MVI),
        8,
        instr!(MVR % B),
        instr!(MVI),
        0xff,
        instr!(SHL % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0);
}
