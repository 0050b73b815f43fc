use hack_rs::assemble;
use hack_rs::decoder::decode;
use hack_rs::disasm::fmt_decoded;

fn round_trip(src: &str) -> String {
    let rom = assemble(src).unwrap();
    fmt_decoded(&decode(rom[0]).unwrap())
}

#[test]
fn formats_address_instruction() {
    assert_eq!(round_trip("@7"), "@7");
    assert_eq!(round_trip("@SCREEN"), "@16384");
}

#[test]
fn formats_compute_instruction() {
    assert_eq!(round_trip("MD=M+1;JNE"), "MD=M+1;JNE");
    assert_eq!(round_trip("0;JMP"), "0;JMP");
    assert_eq!(round_trip("D=D|M"), "D=D|M");
}

#[test]
fn dest_group_prints_in_canonical_order() {
    // DA= assembles to the same flags as AD=; formatting is canonical.
    assert_eq!(round_trip("DA=1"), "AD=1");
    assert_eq!(round_trip("MDA=0"), "AMD=0");
}
