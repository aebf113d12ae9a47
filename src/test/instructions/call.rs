use crate::instr;
use crate::test::run_ok;

#[test]
fn calls_and_returns() {
    let processor = run_ok(&[
        instr!(CALL),
        0x00,
        0x06,
        instr!(RET),
        instr!(NOP),
        instr!(NOP),
        instr!(MVI),
        0x2a,
        instr!(RET),
    ]);
    assert_eq!(processor.accumulator(), 0x2a);
}

#[test]
fn pushes_return_address_low_byte_first() {
    let processor = run_ok(&[
        instr!(CALL),
        0x00,
        0x06,
        instr!(RET),
        instr!(NOP),
        instr!(NOP),
        instr!(MVI),
        0x2a,
        instr!(RET),
    ]);
    // Text is 9 bytes, the sentinel occupies 9..=10, the frame 11..=12.
    assert_eq!(processor.memory().fetch(11), Ok(0x03));
    assert_eq!(processor.memory().fetch(12), Ok(0x00));
}
