// tests/integration_tests.rs
//! End-to-end tests: compile and run whole Rockstar programs.

mod test_harness;

use rockstar::{CompileError, CompileOptions, RockstarError, RuntimeError, UnboundPolicy, Value, Vm};
use test_harness::TestHarness;

#[test]
fn test_poetic_number_program() {
    TestHarness::new().assert_script("poetic");
}

#[test]
fn test_arithmetic() {
    TestHarness::new().assert_script("arithmetic");
}

#[test]
fn test_pronouns() {
    TestHarness::new().assert_script("pronouns");
}

#[test]
fn test_proper_and_common_names() {
    TestHarness::new().assert_script("proper_names");
}

#[test]
fn test_counters() {
    TestHarness::new().assert_script("counters");
}

#[test]
fn test_strings_and_constants() {
    TestHarness::new().assert_script("strings");
}

#[test]
fn test_comparisons_and_logic() {
    TestHarness::new().assert_script("logic");
}

#[test]
fn test_put_then_shout() {
    TestHarness::new()
        .run_source("put", "Put 123 into X\nShout X")
        .assert_success()
        .assert_output("123\n");
}

#[test]
fn test_windows_line_endings() {
    TestHarness::new()
        .run_source("crlf", "X is 1\r\nShout X\r\n")
        .assert_success()
        .assert_output("1\n");
}

#[test]
fn test_round_trip_keeps_kind() {
    let source = "My number is 2.5\n\
                  My text is \"2.5\"\n\
                  My flag is yes\n\
                  My void is nothing\n\
                  Put my number into the copy";
    let program = rockstar::compile(source, &CompileOptions::new()).unwrap();
    let mut vm = Vm::new(&program);
    vm.execute(&mut Vec::new()).unwrap();

    assert_eq!(vm.field("my__number"), Some(&Value::Number(2.5)));
    assert_eq!(vm.field("my__text"), Some(&Value::Text("2.5".into())));
    assert_eq!(vm.field("my__flag"), Some(&Value::Boolean(true)));
    assert_eq!(vm.field("my__void"), Some(&Value::Null));
    assert_eq!(vm.field("the__copy"), vm.field("my__number"));
}

#[test]
fn test_unresolved_pronoun_is_located() {
    let result = TestHarness::new().run_source("pronoun", "\nShout it");
    match result.unwrap_err() {
        RockstarError::Compile(CompileError::UnresolvedPronoun { pronoun, span }) => {
            assert_eq!(pronoun, "it");
            assert_eq!((span.line, span.col), (2, 7));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(result.output.is_empty());
}

#[test]
fn test_unbound_variable() {
    let result = TestHarness::new().run_source("unbound", "Shout my heart");
    assert!(matches!(
        result.unwrap_err(),
        RockstarError::Compile(CompileError::UnboundVariable { name, .. }) if name == "my heart"
    ));
}

#[test]
fn test_unbound_variable_as_mysterious() {
    let options = CompileOptions::new().with_unbound_reads(UnboundPolicy::Mysterious);
    TestHarness::new()
        .with_options(options)
        .run_source("mysterious", "Shout my heart\nShout my heart is mysterious")
        .assert_success()
        .assert_output("mysterious\ntrue\n");
}

#[test]
fn test_malformed_variable_name() {
    let result = TestHarness::new().run_source("malformed", "Put 1 into rock'n");
    assert!(matches!(
        result.unwrap_err(),
        RockstarError::Compile(CompileError::MalformedVariableName { .. })
    ));
}

#[test]
fn test_static_type_mismatch() {
    let result = TestHarness::new().run_source("mismatch", "Say \"a\" times 3");
    assert!(matches!(
        result.unwrap_err(),
        RockstarError::Compile(CompileError::TypeMismatch { .. })
    ));
}

#[test]
fn test_runtime_type_mismatch() {
    let result = TestHarness::new().run_source("runtime", "Say \"first\"\nX is true\nSay X over 2");
    assert_eq!(result.output, "first\n");
    assert!(matches!(
        result.unwrap_err(),
        RockstarError::Runtime(RuntimeError::ExpectedNumber { actual: "boolean", line: 3 })
    ));
}

#[test]
fn test_parse_errors_are_collected() {
    let result = TestHarness::new().run_source("parse", "Put 1 into\nShout X\nLet X 5");
    match result.unwrap_err() {
        RockstarError::Parse(errors) => {
            assert_eq!(errors.len(), 2);
            let lines: Vec<u32> = errors.iter().map(|e| e.span.line).collect();
            assert_eq!(lines, [1, 3]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_disassembly_names_fields() {
    let program = rockstar::compile("Put 1 into my thing\nShout it", &CompileOptions::new()).unwrap();
    let listing = program.disassemble();
    assert!(listing.contains("field 0 my__thing (my thing)"), "{listing}");
    assert!(listing.contains("CALL_RUNTIME to_text/1"), "{listing}");
}
