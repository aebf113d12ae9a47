use crate::instr;
use crate::test::run_ok;

#[test]
fn register_b() {
    let processor = run_ok(&[
        instr!(MVI),
        3,
        instr!(MVR % B),
        instr!(MVI),
        5,
        instr!(SUB % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 2);
}

#[test]
fn wraps() {
    let processor = run_ok(&[
        instr!(MVI),
        1,
        instr!(MVR % B),
        instr!(CLR),
        instr!(SUB % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0xff);
}
