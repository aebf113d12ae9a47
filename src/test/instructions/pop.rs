use crate::instr;
use crate::test::run_ok;

#[test]
fn restores_pushed_value() {
    let processor = run_ok(&[
        instr!(MVI),
        0x5a,
        instr!(PUSH),
        instr!(CLR),
        instr!(POP),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0x5a);
}
