use std::io::Write;
use std::process::Command;

#[test]
fn dry_run_with_config_file_succeeds() {
    let binary_path = env!("CARGO_BIN_EXE_bookstore-storefront");

    let mut config = tempfile::NamedTempFile::new().expect("temp config");
    writeln!(
        config,
        "api:\n  base_url: http://127.0.0.1:18080\n  timeout_secs: 5\nui:\n  tick_ms: 100"
    )
    .expect("write config");

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config.path())
        .arg("--dry-run")
        .arg("--log-level")
        .arg("error")
        .output()
        .expect("Failed to start bookstore-storefront binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn dry_run_with_api_url_override_succeeds() {
    let binary_path = env!("CARGO_BIN_EXE_bookstore-storefront");
    let mut config = tempfile::NamedTempFile::new().expect("temp config");
    writeln!(config, "{{}}").expect("write config");

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config.path())
        .arg("--api-url")
        .arg("http://books.example:9000/store")
        .arg("--dry-run")
        .output()
        .expect("Failed to start bookstore-storefront binary");

    assert!(output.status.success());
}

#[test]
fn missing_config_file_fails() {
    let binary_path = env!("CARGO_BIN_EXE_bookstore-storefront");

    let output = Command::new(binary_path)
        .arg("--config")
        .arg("/nonexistent/storefront.yaml")
        .arg("--dry-run")
        .output()
        .expect("Failed to start bookstore-storefront binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("storefront.yaml"), "stderr: {stderr}");
}

#[test]
fn invalid_api_url_fails() {
    let binary_path = env!("CARGO_BIN_EXE_bookstore-storefront");
    let mut config = tempfile::NamedTempFile::new().expect("temp config");
    writeln!(config, "{{}}").expect("write config");

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config.path())
        .arg("--api-url")
        .arg("not a url")
        .arg("--dry-run")
        .output()
        .expect("Failed to start bookstore-storefront binary");

    assert!(!output.status.success());
}
