//! Integration tests for the get-random-port binary

use std::net::{Ipv4Addr, TcpListener};
use std::process::Command;

fn get_random_port() -> Command {
    Command::new(env!("CARGO_BIN_EXE_get-random-port"))
}

#[test]
fn test_prints_port_in_default_range() {
    let output = get_random_port().output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let port: u16 = stdout.trim().parse().unwrap();
    assert!((10000..=30000).contains(&port));
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_single_port_range() {
    let port = {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        listener.local_addr().unwrap().port()
    };

    let port_arg = port.to_string();
    let output = get_random_port()
        .args(["--min", port_arg.as_str(), "--max", port_arg.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), port_arg);
}

#[test]
fn test_inverted_range_fails() {
    let output = get_random_port()
        .args(["--min", "30000", "--max", "10000"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid port range"));
}
