use crate::instr;
use crate::test::run_ok;

#[test]
fn loads_literal() {
    let processor = run_ok(&[instr!(MVI), 0x2a, instr!(RET)]);
    assert_eq!(processor.accumulator(), 0x2a);
}

#[test]
fn loads_high_values() {
    let processor = run_ok(&[instr!(MVI), 0xaa, instr!(RET)]);
    assert_eq!(processor.accumulator(), 0xaa);
}

#[test]
fn overwrites_previous_value() {
    let processor = run_ok(&[instr!(MVI), 1, instr!(MVI), 2, instr!(RET)]);
    assert_eq!(processor.accumulator(), 2);
}
