//! Error-type display tests.

use apex_pipeline_sim::common::SimError;

#[test]
fn test_malformed_program_display() {
    let err = SimError::MalformedProgram {
        line: 3,
        text: "ADD,R1".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains("ADD,R1"));
}

#[test]
fn test_unknown_opcode_display() {
    let err = SimError::UnknownOpcode { pc: 4012 };
    assert!(err.to_string().contains("4012"));
}

#[test]
fn test_config_error_display() {
    let err = SimError::Config {
        message: "bad value".to_string(),
    };
    assert!(err.to_string().contains("bad value"));
}

#[test]
fn test_io_error_display_includes_path() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
    let err = SimError::Io {
        path: "missing.prog".to_string(),
        source,
    };
    assert!(err.to_string().contains("missing.prog"));
}
