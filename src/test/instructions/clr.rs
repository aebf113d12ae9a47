use crate::instr;
use crate::test::run_ok;

#[test]
fn clears_accumulator_only() {
    let processor = run_ok(&[instr!(MVI), 3, instr!(CLR), instr!(RET)]);
    assert_eq!(processor.accumulator(), 0);
}
