use crate::instr;
use crate::test::run_ok;

#[test]
fn register_b() {
    let processor = run_ok(&[
        instr!(MVI),
        7,
        instr!(MVR % B),
        instr!(MVI),
        6,
        instr!(MUL % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 42);
}

#[test]
fn wraps() {
    let processor = run_ok(&[
        instr!(MVI),
        2,
        instr!(MVR % B),
        instr!(MVI),
        0x80,
        instr!(MUL % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0);
}
