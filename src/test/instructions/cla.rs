use crate::instr;
use crate::test::run_ok;

#[test]
fn clears_accumulator_and_sets_zero() {
    let processor = run_ok(&[instr!(MVI), 3, instr!(CLA), instr!(RET)]);
    assert_eq!(processor.accumulator(), 0);
    assert!(processor.zero_flag());
}
