use crate::instr;
use crate::test::run_ok;

#[test]
fn masks() {
    let processor = run_ok(&[
        instr!(MVI),
        0b1010,
        instr!(MVR % B),
        instr!(MVI),
        0b1100,
        instr!(AND % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0b1000);
}
