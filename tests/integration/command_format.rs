//! Integration tests for command tokenizing

use flowhash::command::{format_cmd, CommandLine};
use flowhash::CommandError;
use serde_json::json;

#[test]
fn test_format_cmd_string_returns_list() {
    let argv = format_cmd(&json!("ls -l")).unwrap();
    assert_eq!(argv, vec!["ls".to_string(), "-l".to_string()]);
}

#[test]
fn test_format_cmd_rejects_number() {
    assert!(matches!(
        format_cmd(&json!(12)),
        Err(CommandError::InvalidType(_))
    ));
}

#[test]
fn test_job_spec_command_field() {
    let job_spec = json!({"cmd": "bash -c 'echo $HOME'", "docker_img": "busybox"});
    let cmd: CommandLine = serde_json::from_value(job_spec["cmd"].clone()).unwrap();
    assert_eq!(cmd.into_argv().unwrap(), vec!["bash", "-c", "echo $HOME"]);
}
