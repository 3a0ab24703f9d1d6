use std::{fs, path::Path};

use complexpr::{
    evaluate,
    interpreter::{environment::Environment, value::Complex},
};
use walkdir::WalkDir;

fn environment() -> Environment {
    [("x".to_string(), Complex::new(2.0, 0.0)), ("y".to_string(), Complex::new(3.0, 1.0))].into_iter()
                                                                                          .collect()
}

fn check_case(path: &Path, line_no: usize, line: &str, env: &Environment) {
    let Some((source, expected)) = line.rsplit_once(" => ") else {
        panic!("{path:?}:{line_no}: expected 'expression => result', found '{line}'");
    };

    match (evaluate(source, env), expected.trim()) {
        (Err(_), "error") => {},
        (Ok(value), "error") => {
            panic!("{path:?}:{line_no}: '{source}' evaluated to {value} but should fail")
        },
        (Ok(value), expected) => assert_eq!(value.to_string(),
                                            expected,
                                            "{path:?}:{line_no}: '{source}'"),
        (Err(e), _) => panic!("{path:?}:{line_no}: '{source}' failed: {e}"),
    }
}

#[test]
fn case_files_evaluate_as_annotated() {
    let env = environment();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(path, i + 1, line, &env);
        }
    }

    assert!(count > 0, "no cases found under tests/cases");
}
