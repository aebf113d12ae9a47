use crate::instr;
use crate::test::run_ok;

#[test]
fn register_b() {
    let processor = run_ok(&[
        instr!(MVI),
        5,
        instr!(MVR % B),
        instr!(MVI),
        3,
        instr!(ADD % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 8);
}

#[test]
fn register_c() {
    let processor = run_ok(&[
        instr!(MVI),
        40,
        instr!(MVR % C),
        instr!(MVI),
        2,
        instr!(ADD % C),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 42);
}

#[test]
fn wraps() {
    let processor = run_ok(&[
        instr!(MVI),
        2,
        instr!(MVR % B),
        instr!(MVI),
        0xff,
        instr!(ADD % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 1);
}
