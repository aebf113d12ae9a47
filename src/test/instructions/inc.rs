use crate::instr;
use crate::test::run_ok;

#[test]
fn adds_one() {
    let processor = run_ok(&[instr!(MVI), 7, instr!(INC), instr!(RET)]);
    assert_eq!(processor.accumulator(), 8);
}

#[test]
fn wraps() {
    let processor = run_ok(&[instr!(MVI), 0xff, instr!(INC), instr!(RET)]);
    assert_eq!(processor.accumulator(), 0);
}
