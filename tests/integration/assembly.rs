//! Program assembly over real include trees

use brainplus::frontend::core::parser::NodeKind;
use brainplus::frontend::{CompileConfig, CompileError, Compiler, Program};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a source file, including parent directories
fn create_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn compile(path: &Path) -> Result<Program, CompileError> {
    Compiler::new(CompileConfig::new()).compile_file(path)
}

#[test]
fn test_end_to_end_sum() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "5 + 3 .");
    let program = compile(&main).unwrap();

    let main = program.main.unwrap();
    let NodeKind::MultiStatement(statements) = main.kind else {
        panic!("Expected two statements");
    };
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].to_string(), "(5)+(3)");
    assert_eq!(statements[1].to_string(), ".");
}

#[test]
fn test_nested_include_tree() {
    let dir = TempDir::new().unwrap();
    let main = create_file(
        &dir,
        "main.bp",
        "include \"lib/io.bp\"\ninclude \"lib/math.bp\"\nprintln",
    );
    create_file(
        &dir,
        "lib/io.bp",
        "include \"chars.bp\"\nprintln { . = NEWLINE . }",
    );
    create_file(&dir, "lib/chars.bp", "define NEWLINE 10 enddef");
    create_file(&dir, "lib/math.bp", "include \"io.bp\"\ndouble { + @ }");

    let program = compile(&main).unwrap();
    assert_eq!(program.files.len(), 4);
    assert!(program.symbols.is_define("NEWLINE"));
    assert!(program.symbols.function("println").is_some());
    assert!(program.symbols.function("double").is_some());
    assert_eq!(program.main.unwrap().to_string(), "println");
}

#[test]
fn test_mutual_recursion_across_files() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"a.bp\"\nping");
    create_file(&dir, "a.bp", "include \"b.bp\"\nping { if (@) pong }");
    create_file(&dir, "b.bp", "pong { - ping }");

    let program = compile(&main).unwrap();
    assert_eq!(program.symbols.function_count(), 2);
}

#[test]
fn test_include_cycle_terminates() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"other.bp\"\n.");
    create_file(&dir, "other.bp", "include \"main.bp\"\ninclude \"./other.bp\"");

    let program = compile(&main).unwrap();
    assert_eq!(program.files.len(), 2);
}

#[test]
fn test_unknown_identifier_in_unused_function() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"lib.bp\"\n.");
    create_file(&dir, "lib.bp", "unused {\n  . missing\n}");

    let err = compile(&main).unwrap_err();
    assert!(matches!(err, CompileError::Semantic(_)));
    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic.code, "E2003");
    assert!(diagnostic.message.contains("missing"));
    assert_eq!(diagnostic.location.map(|l| (l.line, l.column)), Some((2, 5)));
    assert!(diagnostic.file.as_deref().unwrap().ends_with("lib.bp"));
}

#[test]
fn test_define_cycle_across_files() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"a.bp\"\ninclude \"b.bp\"\n.");
    create_file(&dir, "a.bp", "define A + B enddef");
    create_file(&dir, "b.bp", "define B - A enddef");

    let err = compile(&main).unwrap_err();
    assert_eq!(err.code(), "E2002");
}

#[test]
fn test_duplicate_function_across_files() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"lib.bp\"\nshow { . }");
    create_file(&dir, "lib.bp", "show { , }");

    let err = compile(&main).unwrap_err();
    assert_eq!(err.code(), "E2001");
    // main.bp is collected first, so the clash is reported in lib.bp
    assert!(err.diagnostic().file.as_deref().unwrap().ends_with("lib.bp"));
}

#[test]
fn test_function_shadowing_define_across_files() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"lib.bp\"\nSIZE { . }");
    create_file(&dir, "lib.bp", "define SIZE 8 enddef");

    let err = compile(&main).unwrap_err();
    assert_eq!(err.code(), "E2001");
    assert!(err.to_string().contains("already defined as a define"));
}

#[test]
fn test_include_search_path() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "src/main.bp", "include \"std.bp\"\nputs");
    create_file(&dir, "vendor/std.bp", "puts { . }");

    assert_eq!(compile(&main).unwrap_err().code(), "E2003");

    let config = CompileConfig::new().add_include_path(dir.path().join("vendor"));
    let program = Compiler::new(config).compile_file(&main).unwrap();
    assert_eq!(program.files.len(), 2);
}

#[test]
fn test_project_config_file() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"std.bp\"\nputs");
    create_file(&dir, "vendor/std.bp", "puts { . }");
    create_file(
        &dir,
        "brainplus.toml",
        &format!(
            "[compile]\ninclude_paths = [{:?}]\n",
            dir.path().join("vendor").display().to_string()
        ),
    );

    let program = brainplus::compile_file(&main).unwrap();
    assert_eq!(program.symbols.function_count(), 1);
}

#[test]
fn test_missing_entry_file() {
    let dir = TempDir::new().unwrap();
    let err = compile(&dir.path().join("absent.bp")).unwrap_err();
    assert!(matches!(err, CompileError::Environment(_)));
    assert_eq!(err.code(), "E7001");
}

#[test]
fn test_block_collapse() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "one { . }\nnone { }\ntwo { . , }");
    let program = compile(&main).unwrap();

    let one = &program.symbols.function("one").unwrap().item;
    assert!(matches!(one.body.as_ref().unwrap().kind, NodeKind::NullaryOperator(_)));
    assert!(program.symbols.function("none").unwrap().item.body.is_none());
    let two = &program.symbols.function("two").unwrap().item;
    assert!(matches!(two.body.as_ref().unwrap().kind, NodeKind::MultiStatement(ref s) if s.len() == 2));
    assert!(program.main.is_none());
}

#[test]
fn test_error_inside_define_points_at_use_site() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"lib.bp\"\n\n\nf { BAD }");
    create_file(&dir, "lib.bp", "define BAD < . enddef");

    let err = compile(&main).unwrap_err();
    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic.code, "E0012");
    assert_eq!(diagnostic.message, "Missing operand after '<'");
    assert_eq!(diagnostic.location.map(|l| (l.line, l.column)), Some((4, 5)));
    assert!(diagnostic.file.as_deref().unwrap().ends_with("main.bp"));
}

#[test]
fn test_include_after_define_in_included_file() {
    let dir = TempDir::new().unwrap();
    let main = create_file(&dir, "main.bp", "include \"lib.bp\"\nputs");
    create_file(&dir, "lib.bp", "define ONE 1 enddef\ninclude \"io.bp\"\nputs { . }");
    create_file(&dir, "io.bp", "");

    let err = compile(&main).unwrap_err();
    assert!(matches!(err, CompileError::Syntax(_)));
    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic.code, "E0011");
    assert_eq!(diagnostic.message, "Unexpected keyword 'include'");
    assert_eq!(diagnostic.location.map(|l| (l.line, l.column)), Some((2, 1)));
    assert!(diagnostic.file.as_deref().unwrap().ends_with("lib.bp"));
}
