//! Runs the built binary while the dummy port is already taken.

use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_exits_nonzero_when_port_is_taken() {
    // If something else already owns the port the binary must fail all the same.
    let _guard = TcpListener::bind(("0.0.0.0", 5000)).ok();

    let mut child = Command::new(env!("CARGO_BIN_EXE_dummy"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start dummy binary");

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("failed to poll dummy binary") {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            let _ = child.wait();
            panic!("dummy kept running although port 5000 was taken");
        }
        thread::sleep(Duration::from_millis(20));
    };

    assert!(!status.success(), "exit status: {:?}", status);
    assert_eq!(status.code(), Some(1));

    let output = child.wait_with_output().expect("failed to collect output");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("listening"), "stdout: {}", stdout);
    assert!(stderr.contains("Failed to bind 0.0.0.0:5000"), "stderr: {}", stderr);
}
