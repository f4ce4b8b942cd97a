// tests/test_harness.rs
//! Test harness for running the Rockstar programs under `test_scripts/`.
//!
//! Every `name.rock` script has a `name.out` file holding the exact output
//! the program must write.

use rockstar::{CompileOptions, RockstarError, run_with};
use std::fs;
use std::path::PathBuf;

/// Outcome of running one script.
pub struct RunResult {
    pub name: String,
    pub source: String,
    pub output: String,
    pub result: Result<(), RockstarError>,
}

/// Loads and runs scripts from `test_scripts/`.
pub struct TestHarness {
    test_scripts_dir: PathBuf,
    options: CompileOptions,
}

impl TestHarness {
    pub fn new() -> Self {
        let test_scripts_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_scripts");
        Self {
            test_scripts_dir,
            options: CompileOptions::new(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    fn read(&self, filename: &str) -> String {
        let path = self.test_scripts_dir.join(filename);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Run `name.rock`.
    pub fn run_script(&self, name: &str) -> RunResult {
        let source = self.read(&format!("{name}.rock"));
        self.run_source(name, &source)
    }

    /// Run inline source.
    pub fn run_source(&self, name: &str, source: &str) -> RunResult {
        let mut out = Vec::new();
        let result = run_with(source, &self.options, &mut out);
        RunResult {
            name: name.to_string(),
            source: source.to_string(),
            output: String::from_utf8(out).expect("output is UTF-8"),
            result,
        }
    }

    /// Contents of `name.out`.
    pub fn expected_output(&self, name: &str) -> String {
        self.read(&format!("{name}.out"))
    }

    /// Run `name.rock` and compare against `name.out`.
    pub fn assert_script(&self, name: &str) {
        let expected = self.expected_output(name);
        self.run_script(name).assert_success().assert_output(&expected);
    }
}

impl RunResult {
    /// Assert that the program compiled and ran without error.
    pub fn assert_success(&self) -> &Self {
        if let Err(err) = &self.result {
            eprintln!("Source of {}:\n{}", self.name, self.source);
            if let RockstarError::Parse(errors) = err {
                for error in errors.iter() {
                    eprintln!("{}", error.display_with_source(&self.source));
                }
            }
            panic!("{} failed: {}", self.name, err);
        }
        self
    }

    pub fn assert_output(&self, expected: &str) -> &Self {
        assert_eq!(
            self.output, expected,
            "{} wrote unexpected output",
            self.name
        );
        self
    }

    /// The error the run ended with.
    pub fn unwrap_err(&self) -> &RockstarError {
        match &self.result {
            Ok(()) => panic!("{} was expected to fail", self.name),
            Err(err) => err,
        }
    }
}
