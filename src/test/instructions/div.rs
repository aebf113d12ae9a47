use crate::instr;
use crate::test::{run_ok, run_text};
use crate::Fault;

#[test]
fn register_b() {
    let processor = run_ok(&[
        instr!(MVI),
        7,
        instr!(MVR % B),
        instr!(MVI),
        42,
        instr!(DIV % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 6);
}

#[test]
fn truncates() {
    let processor = run_ok(&[
        instr!(MVI),
        4,
        instr!(MVR % B),
        instr!(MVI),
        7,
        instr!(DIV % B),
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 1);
}

#[test]
fn by_zero() {
    let (_, result) = run_text(&[
        instr!(MVI),
        0,
        instr!(MVR % B),
        instr!(MVI),
        1,
        instr!(DIV % B),
        instr!(RET),
    ]);
    assert_eq!(result, Err(Fault::DivisionByZero { address: 5 }));
}
