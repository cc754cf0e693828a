//! Tests for the process-wide creation slot.
//!
//! The global slot can only be armed once per process, so the whole lifecycle
//! runs as a single ordered test in its own test binary.

#![cfg(unix)]

use agent_inject::{ActivationError, AgentSource, ResolutionError, SpawnError, SpawnRequest};
use tempfile::TempDir;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn echo(args: &[&str]) -> SpawnRequest {
    SpawnRequest::new("/bin/echo", args.iter().map(|s| s.to_string()).collect())
}

#[tokio::test]
async fn test_global_slot_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let agents = tmp.path().join("agents");
    std::fs::create_dir(&agents).unwrap();
    std::fs::write(agents.join("a.jar"), "PK").unwrap();
    let agent = std::fs::canonicalize(agents.join("a.jar")).unwrap();

    // Unarmed: spawns pass straight through
    assert!(!agent_inject::is_armed());
    let output = agent_inject::output(echo(&["-XX:+DisableAttachMechanism", "plain"]))
        .await
        .unwrap();
    assert_eq!(stdout(&output), "-XX:+DisableAttachMechanism plain\n");

    // Armed: the agent is injected and the flag dropped
    agent_inject::activate(AgentSource::directory(&agents)).unwrap();
    assert!(agent_inject::is_armed());

    let expected = format!("-javaagent:{} -jar app.jar\n", agent.display());
    let output = agent_inject::output(echo(&["-jar", "app.jar", "-XX:+DisableAttachMechanism"]))
        .await
        .unwrap();
    assert_eq!(stdout(&output), expected);

    // A second activation is refused and doesn't double the agents
    let again = agent_inject::activate(AgentSource::directory(&agents));
    assert!(matches!(again, Err(ActivationError::AlreadyArmed)));
    let again_from_env = agent_inject::activate_from_env();
    assert!(again_from_env.is_err());

    let output = agent_inject::output(echo(&["-jar", "app.jar"])).await.unwrap();
    assert_eq!(stdout(&output), expected);

    // The synchronous entry point goes through the same wrapper
    let child = agent_inject::spawn(
        echo(&["-jar", "app.jar"]).with_stdio(
            agent_inject::StdioMode::Null,
            agent_inject::StdioMode::Piped,
            agent_inject::StdioMode::Null,
        ),
    )
    .unwrap();
    let raw = child.wait_with_output().unwrap();
    assert_eq!(String::from_utf8_lossy(&raw.stdout), expected);

    // Agent directory gone: fail closed
    std::fs::remove_dir_all(&agents).unwrap();
    let result = agent_inject::spawn(echo(&["unreachable"]));
    assert!(matches!(
        result,
        Err(SpawnError::Resolution(ResolutionError::DirNotFound { .. }))
    ));
}
