use crate::instr;
use crate::test::run_ok;
use crate::{Fault, Processor};

#[test]
fn writes_accumulator_to_stack() {
    let processor = run_ok(&[
        instr!(MVI),
        0x5a,
        instr!(PUSH),
        instr!(POP),
        instr!(RET),
    ]);
    // Text is 5 bytes, the sentinel occupies 5..=6, the pushed byte lands
    // at 7.
    assert_eq!(processor.memory().fetch(7), Ok(0x5a));
}

#[test]
fn out_of_bounds_stack_faults() {
    let mut processor = Processor::new();
    processor.load(&[instr!(PUSH), instr!(RET)], 0).unwrap();
    processor.sp = 0xffff;

    assert_eq!(
        processor.run(),
        Err(Fault::BadMemoryAccess { address: 0xffff })
    );
}
