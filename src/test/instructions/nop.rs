use crate::instr;
use crate::test::run_ok;

#[test]
fn does_nothing() {
    let processor = run_ok(&[instr!(NOP), instr!(NOP), instr!(RET)]);
    assert_eq!(processor.accumulator(), 0);
}
