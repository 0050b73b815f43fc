use hack_rs::{assemble, assemble_with_symbols, render};
use pretty_assertions::assert_eq;

const ADD_TWO_AND_THREE: &str = "\
// Computes R0 = 2 + 3
@2
D=A
@3
D=D+A
@0
M=D
";

#[test]
fn canonical_add_program() {
    let rom = assemble(ADD_TWO_AND_THREE).unwrap();
    assert_eq!(rom.len(), 6);
    // @3 resolves literally
    assert_eq!(rom[2] & 0x7FFF, 3);
    // M=D stores to memory only
    assert_eq!(rom[5] & 0b111000, 0b001000);
    assert_eq!(
        render(&rom),
        "0000000000000010\n\
         1110110000010000\n\
         0000000000000011\n\
         1110000010010000\n\
         0000000000000000\n\
         1110001100001000\n"
    );
}

const COUNT_TO_TEN: &str = "\
@i
M=1
(LOOP)
@i
D=M
@10
D=D-A
@END
D;JGT
@i
M=M+1
@LOOP
0;JMP
(END)
@END
0;JMP
";

#[test]
fn loop_program_with_forward_and_backward_references() {
    let (rom, symbols) = assemble_with_symbols(COUNT_TO_TEN).unwrap();
    assert_eq!(rom.len(), 14);
    assert_eq!(symbols.get("LOOP"), Some(2));
    assert_eq!(symbols.get("END"), Some(12));
    assert_eq!(symbols.get("i"), Some(16));
    assert_eq!(rom[0], 16); // @i
    assert_eq!(rom[6], 12); // @END, declared later
    assert_eq!(rom[10], 2); // @LOOP, declared earlier
    assert_eq!(rom[12], 12); // @END after its declaration
}

#[test]
fn every_rendered_line_is_sixteen_binary_digits() {
    let rom = assemble(COUNT_TO_TEN).unwrap();
    let text = render(&rom);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), rom.len());
    for line in lines {
        assert_eq!(line.len(), 16);
        assert!(line.bytes().all(|b| b == b'0' || b == b'1'));
    }
}

#[test]
fn word_count_matches_instruction_lines() {
    // Comments, blank lines and labels emit nothing; everything else
    // emits exactly one word.
    let src = "// prologue\n\n@1\n(l1)\nD=A\n\n// gap\n@2\n(l2)\n(l3)\nM=D\n";
    let rom = assemble(src).unwrap();
    assert_eq!(rom.len(), 4);
}
