use anyhow::Result;
use toyasm::{
    assemble_program, link::unresolved_symbols,
    pipeline::{error_scan, generate_output}, AsmError, Assembler,
    Data, Opcode, Options, Slot,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn forward_reference_resolves_to_next_instruction() -> Result<()> {
    init_logging();
    let (output, _) = assemble_program("JMP L1\nL1: ADD R1")?;

    assert_eq!(output, "0c0001");

    Ok(())
}

#[test]
fn forward_and_backward_references_agree() -> Result<()> {
    init_logging();
    let (forward, _) = assemble_program("JMP TARGET\nADD 1\nTARGET:\nSUB 2")?;
    let (backward, _) = assemble_program("ADD 1\nTARGET:\nSUB 2\nJMP TARGET")?;

    // TARGET is address 2 in the first, 1 in the second
    assert_eq!(forward, "0c0002010001020002");
    assert_eq!(backward, "0100010200020c0001");

    Ok(())
}

#[test]
fn reference_free_programs_match_single_pass_encoding() -> Result<()> {
    init_logging();
    let program = "MOV 1 2\nMUL 3\nSTART:\nDIV 4 5 6\nin 7";

    let single_pass = vec![
        Data::Opcode(Opcode::MOV),
        Data::Word(1),
        Data::Word(2),
        Data::Opcode(Opcode::MUL),
        Data::Word(3),
        Data::Opcode(Opcode::DIV),
        Data::Word(4),
        Data::Word(5),
        Data::Word(6),
        Data::Opcode(Opcode::IN),
        Data::Word(7),
    ];

    assert_eq!(assemble_program(program)?.0, generate_output(&single_pass));

    Ok(())
}

#[test]
fn every_mnemonic_matches_table() -> Result<()> {
    init_logging();
    let table = [
        ("ADD", "01"),
        ("sub", "02"),
        ("Mov", "03"),
        ("LDR", "04"),
        ("STR", "05"),
        ("MUL", "06"),
        ("DIV", "07"),
        ("AND", "08"),
        ("OR", "09"),
        ("XOR", "0a"),
        ("NOT", "0b"),
        ("JMP", "0c"),
        ("JZ", "0d"),
        ("JNZ", "0e"),
        ("JEQ", "0f"),
        ("JNE", "10"),
        ("JGT", "11"),
        ("JLT", "12"),
        ("IN", "13"),
        ("OUT", "14"),
    ];

    for (mnemonic, byte) in table {
        let (output, diagnostics) = assemble_program(mnemonic)?;
        assert_eq!(output, byte, "{mnemonic}");
        assert!(diagnostics.is_empty());
    }

    Ok(())
}

#[test]
fn duplicate_labels_fail_wherever_they_are() {
    init_logging();
    for program in ["A:\nA:\nADD 1", "A:\nADD 1\nA:", "ADD 1\nA:\nJMP A\nSUB 2\nA:"] {
        assert!(
            matches!(
                assemble_program(program),
                Err(AsmError::DuplicateLabel { ref label, .. }) if label == "A"
            ),
            "{program:?}"
        );
    }
}

#[test]
fn invalid_operands_name_token_and_line() {
    init_logging();
    assert_eq!(
        assemble_program("; header\nADD R1, R2"),
        Err(AsmError::InvalidOperand {
            line: 2,
            operand: "R1,".into()
        })
    );
    assert_eq!(
        assemble_program("MOV 1\nMOV abc"),
        Err(AsmError::InvalidOperand {
            line: 2,
            operand: "abc".into()
        })
    );
}

#[test]
fn invalid_instruction() {
    init_logging();
    let err = assemble_program("ADD 1\n  halt 2").unwrap_err();

    assert_eq!(
        err,
        AsmError::InvalidInstruction {
            line: 2,
            mnemonic: "HALT".into()
        }
    );
    assert_eq!(err.to_string(), "Invalid instruction at line 2: HALT");
}

#[test]
fn directives_validate_and_emit_nothing() -> Result<()> {
    init_logging();
    let (output, _) = assemble_program(".data\n.TEXT 100\nJMP NEXT\nNEXT:")?;

    // Directives still take an address, so NEXT is 3
    assert_eq!(output, "0c0003");

    assert_eq!(
        assemble_program(".bss"),
        Err(AsmError::InvalidDirective {
            line: 1,
            directive: ".BSS".into()
        })
    );

    Ok(())
}

#[test]
fn literals_must_fit_sixteen_bits() {
    init_logging();
    assert_eq!(assemble_program("ADD 65535").map(|r| r.0), Ok("01ffff".to_owned()));
    assert_eq!(
        assemble_program("ADD 65536"),
        Err(AsmError::OperandOutOfRange {
            line: 1,
            operand: "65536".into()
        })
    );
    assert_eq!(
        assemble_program("ADD -5"),
        Err(AsmError::OperandOutOfRange {
            line: 1,
            operand: "-5".into()
        })
    );
}

#[test]
fn valid_programs_have_no_diagnostics() -> Result<()> {
    init_logging();
    let (output, diagnostics) = assemble_program("ADD 1 2\nMOV 0")?;

    assert_eq!(output, "0100010002030000");
    assert!(diagnostics.is_empty());

    Ok(())
}

#[test]
fn sentinel_chunks_are_reported_without_failing() {
    init_logging();
    let chunks = vec![
        Data::Opcode(Opcode::ADD),
        Data::Byte(vec![0x00]),
        Data::Word(0),
    ];

    let diagnostics = error_scan(&chunks);

    assert_eq!(diagnostics, vec!["Invalid opcode: 0x00"]);
    assert_eq!(generate_output(&chunks), "01000000");
}

#[test]
fn labels_accumulate_across_runs() -> Result<()> {
    init_logging();
    let mut asm = Assembler::new();

    asm.assemble("ADD 1\nSHARED:\nSUB 2")?;
    assert_eq!(asm.symbols().get("SHARED"), Some(1));

    // A later run can refer to an earlier run's label
    let (output, _) = asm.assemble("JMP SHARED")?;
    assert_eq!(output, "0c0001");

    assert!(matches!(
        asm.assemble("SHARED:\nADD 1"),
        Err(AsmError::DuplicateLabel { line: 1, .. })
    ));

    asm.reset();
    assert!(asm.symbols().is_empty());
    asm.assemble("SHARED:\nADD 1")?;

    Ok(())
}

#[test]
fn failed_first_pass_leaves_symbols_untouched() {
    init_logging();
    let mut asm = Assembler::new();

    assert!(asm.assemble("A:\nADD 1\nA:").is_err());
    assert!(asm.symbols().is_empty());
}

#[test]
fn registered_symbols() -> Result<()> {
    init_logging();
    let mut asm = Assembler::new();
    asm.add_symbol("PORT", 0x00FF);
    asm.add_symbol("PORT", 0x0100);

    assert_eq!(asm.assemble("OUT PORT")?.0, "140100");
    assert!(matches!(
        asm.assemble("PORT:"),
        Err(AsmError::DuplicateLabel { .. })
    ));

    Ok(())
}

#[test]
fn comma_stripping_option() -> Result<()> {
    init_logging();
    let mut asm = Assembler::with_options(Options::new().strip_commas(true));

    assert_eq!(asm.assemble("ADD 1, 2")?.0, "0100010002");
    assert!(asm.options().strip_commas);

    Ok(())
}

#[test]
fn link_external_symbols() -> Result<()> {
    init_logging();
    let mut asm = Assembler::new();
    let slots = vec![Slot::opcode(0x01)?, Slot::placeholder("EXT1")];

    assert_eq!(
        asm.link(slots.clone()),
        Err(AsmError::UndefinedSymbol {
            symbol: "EXT1".into()
        })
    );
    assert_eq!(unresolved_symbols(&slots), vec!["EXT1"]);

    asm.add_external_symbol("EXT1", 0x0010);
    let linked = asm.link(slots)?;

    assert_eq!(linked, vec![Data::Opcode(Opcode::ADD), Data::Word(0x0010)]);
    assert_eq!(generate_output(&linked), "010010");
    assert_eq!(asm.external_symbols().get("EXT1"), Some(0x0010));
    // Externals never leak into label resolution
    assert!(asm.assemble("JMP EXT1").is_err());

    Ok(())
}

#[test]
fn output_is_idempotent() -> Result<()> {
    init_logging();
    let chunks = vec![Data::Opcode(Opcode::JLT), Data::Word(0xABCD)];

    assert_eq!(generate_output(&chunks), generate_output(&chunks));
    assert_eq!(generate_output(&chunks), "12abcd");

    Ok(())
}
