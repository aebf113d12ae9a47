use crate::instr;
use crate::test::run_ok;

#[test]
fn returns_to_sentinel() {
    let processor = run_ok(&[instr!(RET)]);
    assert_eq!(processor.program_counter(), 0xffff);
}

#[test]
fn combines_bytes_from_stack() {
    let mut processor = crate::Processor::new();
    processor.load(&[instr!(RET)], 0).unwrap();
    // Replace the sentinel with an ordinary return address.
    processor.memory.write(1, 0x34).unwrap();
    processor.memory.write(2, 0x12).unwrap();

    processor.step().unwrap();
    assert_eq!(processor.program_counter(), 0x1234);
}
