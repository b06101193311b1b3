use std::fs;

use assert_cmd::Command;
use predicates::prelude::predicate;

const CONFIG_MAP: &str = r#"apiVersion: v1
kind: ConfigMap
metadata:
  name: nephio-webui-config
  namespace: nephio-webui
data:
  app-config.nephio.yaml: |
    backend:
      baseUrl: http://localhost:7007
"#;

const SERVICE: &str = r#"apiVersion: v1
kind: Service
metadata:
  name: nephio-webui
  namespace: nephio-webui
spec:
  selector:
    app: nephio-webui
  ports:
    - name: http
      port: 7007
      targetPort: http
"#;

#[test]
fn help_lists_the_operations() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("join"));

    Ok(())
}

#[test]
fn an_operation_is_required() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

#[test]
fn unknown_flags_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.args(["init", "--unknown-flag"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    Ok(())
}

#[test]
fn join_rejects_the_init_only_flags() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.args(["join", "--backend-base-url", "https://webui.example"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    Ok(())
}

#[test]
fn service_types_use_the_kubernetes_spellings() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.args(["init", "--webui-cluster-type", "nodeport"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("NodePort"));

    Ok(())
}

#[test]
fn init_fails_fast_when_kpt_is_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;

    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.env("PATH", "")
        .args(["init", "--backend-base-url", "", "--webui-cluster-type", "ClusterIP"])
        .arg("--base-path")
        .arg(base.path());
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("failed to init nephio cluster plane"))
        .stdout(predicate::str::contains("nephio-system"));

    Ok(())
}

#[test]
fn init_in_best_effort_mode_survives_a_missing_kpt() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;

    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.env("PATH", "")
        .args(["init", "--best-effort"])
        .args(["--backend-base-url", "", "--webui-cluster-type", "ClusterIP"])
        .arg("--base-path")
        .arg(base.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kpt step failed, continuing"));

    Ok(())
}

#[test]
fn webui_patch_failures_fail_even_in_best_effort_mode() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;

    // The default NodePort service type needs webui/service.yaml, which the
    // empty base path does not provide.
    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.env("PATH", "")
        .args(["init", "--best-effort", "--backend-base-url", ""])
        .arg("--base-path")
        .arg(base.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("failed to patch the nephio-webui package"));

    Ok(())
}

#[test]
fn init_rewrites_already_fetched_webui_manifests() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;
    let webui = base.path().join("webui");
    fs::create_dir(&webui)?;
    fs::write(webui.join("config-map.yaml"), CONFIG_MAP)?;
    fs::write(webui.join("service.yaml"), SERVICE)?;

    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.env("PATH", "")
        .args(["init", "--best-effort"])
        .args(["--backend-base-url", "https://webui.example"])
        .arg("--base-path")
        .arg(base.path());
    cmd.assert().success();

    let config_map = fs::read_to_string(webui.join("config-map.yaml"))?;
    assert!(config_map.contains("baseUrl: https://webui.example"));
    let service = fs::read_to_string(webui.join("service.yaml"))?;
    assert!(service.contains("type: NodePort"));
    assert!(service.contains("nodePort: 30007"));

    Ok(())
}

#[test]
fn join_fails_fast_when_kpt_is_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;

    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.env("PATH", "")
        .arg("join")
        .arg("--base-path")
        .arg(base.path());
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "failed to join to the nephio cluster plane",
        ));

    Ok(())
}

#[test]
fn join_in_best_effort_mode_survives_a_missing_kpt() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempfile::tempdir()?;

    let mut cmd = Command::cargo_bin("nephioadm")?;
    cmd.env("PATH", "")
        .args(["join", "--best-effort"])
        .arg("--base-path")
        .arg(base.path());
    cmd.assert().success();

    Ok(())
}
