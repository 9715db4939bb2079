//! Program blob parsing: operands, sequence lookup and validation.

use ledmatrix_engine::program::{hex_char, hex_digit};
use ledmatrix_engine::{Opcode, Program, ProgramErrorKind, ProgramStats};

#[test]
fn hex_digits_accept_both_cases() {
    assert_eq!(hex_digit(b'0'), Some(0));
    assert_eq!(hex_digit(b'9'), Some(9));
    assert_eq!(hex_digit(b'a'), Some(10));
    assert_eq!(hex_digit(b'F'), Some(15));
    assert_eq!(hex_digit(b'g'), None);
    assert_eq!(hex_digit(b'x'), None);

    assert_eq!(hex_char(0x0), b'0');
    assert_eq!(hex_char(0xB), b'b');
    assert_eq!(hex_char(0x3F), b'f');
}

#[test]
fn opcodes_decode() {
    assert_eq!(Opcode::from_byte(b'e'), Opcode::Effect);
    assert_eq!(Opcode::from_byte(b'w'), Opcode::Wait);
    assert_eq!(Opcode::from_byte(b'x'), Opcode::End);
    assert_eq!(Opcode::from_byte(0), Opcode::End);
    assert_eq!(Opcode::from_byte(b'E'), Opcode::Invalid(b'E'));
    assert_eq!(Opcode::Wait.operand_digits(), 4);
    assert_eq!(Opcode::All.operand_digits(), 0);
}

#[test]
fn operand_reads_big_endian() {
    let program = Program::new(b"w1a2B");
    assert_eq!(program.operand(1, 4), (0x1A2B, 5));
    assert_eq!(program.operand(1, 2), (0x1A, 3));
}

#[test]
fn invalid_operand_digits_read_as_zero() {
    let program = Program::new(b"szz1g");
    assert_eq!(program.operand(1, 2), (0, 3));
    assert_eq!(program.operand(3, 2), (0x10, 5));
}

#[test]
fn operand_past_end_reads_zero() {
    let program = Program::new(b"s4");
    assert_eq!(program.operand(1, 2), (0x40, 3));
}

#[test]
fn byte_at_past_end_is_terminator() {
    let program = Program::new(b"a");
    assert_eq!(program.byte_at(0), b'a');
    assert_eq!(program.byte_at(1), 0);
    assert_eq!(program.byte_at(100), 0);
}

// -----------------------------------------------------------------------------
// Sequences
// -----------------------------------------------------------------------------

#[test]
fn selector_resolves_to_sequence_start() {
    let program = Program::new(b"e01xe02xe03\0");

    assert_eq!(program.sequence_start(0), (0, 0));
    assert_eq!(program.sequence_start(1), (4, 1));
    assert_eq!(program.sequence_start(2), (8, 2));
    assert_eq!(program.sequence_count(), 3);
}

#[test]
fn selector_past_end_wraps() {
    let program = Program::new(b"e01xe02xe03\0");
    assert_eq!(program.sequence_start(3), (0, 0));
    assert_eq!(program.sequence_start(200), (0, 0));
}

#[test]
fn trailing_separator_does_not_open_a_sequence() {
    let program = Program::new(b"e01xe02x\0");

    assert_eq!(program.sequence_count(), 2);
    assert_eq!(program.sequence_start(1), (4, 1));
    assert_eq!(program.sequence_start(2), (0, 0));
}

#[test]
fn empty_program_has_one_sequence() {
    let program = Program::new(b"");
    assert!(program.is_empty());
    assert_eq!(program.sequence_count(), 1);
    assert_eq!(program.sequence_start(0), (0, 0));
    assert_eq!(program.sequence_start(1), (0, 0));

    for bytes in [&b""[..], &b"\0"[..]] {
        let stats = Program::new(bytes).validate().expect("empty program is valid");
        assert_eq!(stats.sequences, 1);
        assert_eq!(stats.sequences, Program::new(bytes).sequence_count());
    }
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn valid_program_stats() {
    let program = Program::new(b"e0fs00aw0005xp81w0002x\0");
    let stats = program.validate().expect("program is valid");

    assert_eq!(
        stats,
        ProgramStats {
            sequences: 2,
            instructions: 6,
            waits: 2,
        }
    );
}

#[test]
fn validate_reports_unknown_opcode() {
    let err = Program::new(b"e0fq").validate().unwrap_err();
    assert_eq!(err.offset, 3);
    assert_eq!(err.kind, ProgramErrorKind::UnknownOpcode(b'q'));
    assert_eq!(err.to_string(), "unknown opcode 0x71 at offset 3");
}

#[test]
fn validate_reports_bad_digit() {
    let err = Program::new(b"e0fw00z1").validate().unwrap_err();
    assert_eq!(err.offset, 6);
    assert_eq!(err.kind, ProgramErrorKind::InvalidHexDigit(b'z'));
}

#[test]
fn validate_reports_truncated_operand() {
    let err = Program::new(b"s0x").validate().unwrap_err();
    assert_eq!(err.offset, 2);
    assert_eq!(err.kind, ProgramErrorKind::TruncatedOperand);

    let err = Program::new(b"w12").validate().unwrap_err();
    assert_eq!(err.offset, 3);
    assert_eq!(err.kind, ProgramErrorKind::TruncatedOperand);
}

#[test]
fn builtin_program_is_valid() {
    let program = Program::new(ledmatrix_firmware::animations::PROGRAM);
    let stats = program.validate().expect("built-in program is valid");

    assert_eq!(stats.sequences, 4);
    assert_eq!(program.sequence_count(), 4);
}
