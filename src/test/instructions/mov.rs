use crate::instr;
use crate::test::run_ok;

#[test]
fn from_b() {
    let processor = run_ok(&[
        instr!(MVI),
        7,
        instr!(MVR % B),
        instr!(CLR),
        instr!(MOV % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 7);
}

#[test]
fn from_c() {
    let processor = run_ok(&[
        instr!(MVI),
        9,
        instr!(MVR % C),
        instr!(CLR),
        instr!(MOV % C),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 9);
}
