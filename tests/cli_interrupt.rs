// ============================================================================
// Console Interrupt Behavior
// Spawns the CLI binary and verifies SIGINT reports cancellation
// ============================================================================

#![cfg(all(unix, feature = "cli"))]

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

#[test]
fn test_sigint_reports_cancellation_and_exits_zero() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sum-cli"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn sum-cli");

    // Let the process install its handler and block on the first prompt
    thread::sleep(Duration::from_millis(500));

    let delivered = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("failed to run kill");
    assert!(delivered.success(), "could not deliver SIGINT");

    let output = child.wait_with_output().expect("failed to collect output");
    assert!(
        output.status.success(),
        "expected exit code 0 after interrupt, got {:?}",
        output.status
    );

    let printed = String::from_utf8_lossy(&output.stdout);
    assert!(
        printed.contains("Operation cancelled."),
        "missing cancellation message in output: {:?}",
        printed
    );
}
