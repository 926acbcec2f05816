use rqc::codegen::{Backend, CodegenError, LoweringError, RecordingBackend, Request, ValueType};
use rqc::parser::{parse, ParserError};
use rqc::source::read_source;
use rqc::{compile, CompileError};

/// Helper function to compile a program file against the recording backend
fn compile_program(source_path: &str) -> Result<(RecordingBackend, String), CompileError> {
    let source = read_source(source_path)?;
    let mut backend = RecordingBackend::new();
    let compilation = compile(&source, "main", &mut backend)?;
    let ir = backend.render_textual_ir(&compilation.module);
    Ok((backend, ir))
}

#[test]
fn test_return_42() {
    let (backend, ir) = compile_program("tests/programs/return_42.rq")
        .expect("Failed to compile return_42.rq");

    let functions: Vec<_> = backend
        .requests()
        .iter()
        .filter(|request| matches!(request, Request::CreateFunction { .. }))
        .collect();
    assert_eq!(
        functions,
        vec![&Request::CreateFunction {
            name: "main".to_string(),
            return_type: ValueType::I32,
        }]
    );
    assert!(ir.contains("define i32 @main() {"), "{ir}");
    assert!(ir.contains("  ret i32 42"), "{ir}");
}

#[test]
fn test_multiple_functions() {
    let (_, ir) = compile_program("tests/programs/multiple_functions.rq")
        .expect("Failed to compile multiple_functions.rq");

    let zero = ir.find("@zero").expect("missing zero");
    let answer = ir.find("@answer").expect("missing answer");
    let nothing = ir.find("@nothing").expect("missing nothing");
    assert!(zero < answer && answer < nothing, "{ir}");
    assert!(ir.contains("ret i32 0"));
    assert!(ir.contains("ret i32 42"));
    assert!(ir.contains("ret void"));
}

#[test]
fn test_duplicate_return_type() {
    let result = compile_program("tests/programs/duplicate_return_type.rq");
    assert!(matches!(
        result,
        Err(CompileError::Codegen(CodegenError::Lowering(LoweringError::DuplicateReturnType(name)))) if name == "main"
    ));
}

#[test]
fn test_unbalanced_program() {
    let result = compile_program("tests/programs/unbalanced.rq");
    assert!(matches!(
        result,
        Err(CompileError::Parser(ParserError::UnmatchedClosingBracket(_)))
    ));
}

#[test]
fn test_missing_program() {
    let result = compile_program("tests/programs/does_not_exist.rq");
    assert!(matches!(result, Err(CompileError::Source(_))));
}

#[test]
fn test_printed_tree_reparses() {
    let source = read_source("tests/programs/multiple_functions.rq").unwrap();
    let tree = parse(&source).unwrap();
    let printed = tree.to_string();

    assert!(!printed.contains('\n'));
    assert_eq!(parse(&printed).unwrap(), tree);
}

#[test]
fn test_compilation_keeps_tree() {
    let source = read_source("tests/programs/return_42.rq").unwrap();
    let mut backend = RecordingBackend::new();
    let compilation = compile(&source, "main", &mut backend).unwrap();

    assert_eq!(
        compilation.tree.to_string(),
        "[function main [return_type [i32]] [body [return 42]]]"
    );
}

#[test]
fn test_error_messages() {
    let mut backend = RecordingBackend::new();
    let err = compile("[foo 1]", "main", &mut backend).err().unwrap();
    assert_eq!(err.to_string(), "Codegen error: Invalid opcode 'foo'");

    let err = compile("]", "main", &mut backend).err().unwrap();
    assert_eq!(
        err.to_string(),
        "Parser error: Invalid closing bracket at 1:1: no node is open"
    );

    let err = compile("[function f [body [return 12a]]]", "main", &mut backend)
        .err()
        .unwrap();
    assert_eq!(
        err.to_string(),
        "Codegen error: Invalid integer literal '12a' for a 32-bit integer"
    );
}

#[cfg(feature = "llvm_backend")]
mod llvm {
    use super::*;
    use inkwell::context::Context;
    use rqc::codegen::LlvmBackend;

    #[test]
    fn test_return_42_object_file() {
        let source = read_source("tests/programs/return_42.rq").unwrap();
        let context = Context::create();
        let mut backend = LlvmBackend::new(&context);
        let compilation = compile(&source, "return_42", &mut backend).unwrap();

        let ir = backend.render_textual_ir(&compilation.module);
        assert!(ir.contains("define i32 @main()"), "{ir}");
        assert!(ir.contains("ret i32 42"), "{ir}");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.obj");
        backend.emit_object_file(&compilation.module, &path).unwrap();
        assert!(path.exists());
    }
}
