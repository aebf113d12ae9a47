use crate::instr;
use crate::test::run_ok;
use crate::Register;

#[test]
fn to_b() {
    let processor = run_ok(&[instr!(MVI), 5, instr!(MVR % B), instr!(RET)]);
    assert_eq!(processor.register(Register::B), 5);
    assert_eq!(processor.register(Register::C), 0);
}

#[test]
fn to_c() {
    let processor = run_ok(&[instr!(MVI), 6, instr!(MVR % C), instr!(RET)]);
    assert_eq!(processor.register(Register::C), 6);
    assert_eq!(processor.register(Register::B), 0);
}

#[test]
fn keeps_accumulator() {
    let processor = run_ok(&[instr!(MVI), 5, instr!(MVR % B), instr!(RET)]);
    assert_eq!(processor.accumulator(), 5);
}
