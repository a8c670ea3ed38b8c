//! End-to-end tests for the prwd binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// A fake home directory the binary runs in.
struct TestContext {
    _temp_dir: TempDir,
    home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let home = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to resolve temp dir");
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    fn home(&self) -> &Path {
        &self.home
    }

    fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.home.join("custom.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Command running in `dir`, with `$HOME` pointing at the context.
    fn command_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("prwd").expect("Binary not found");
        cmd.current_dir(dir)
            .env("HOME", &self.home)
            .env("PWD", dir)
            .env_remove("PRWD_CONFIG")
            .env_remove("PRWD_LOG");
        cmd
    }

    fn command(&self) -> Command {
        self.command_in(&self.home)
    }
}

#[test]
fn renders_static_template() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-t", "hello > "])
        .assert()
        .success()
        .stdout("hello > \n")
        .stderr("");
}

#[test]
fn renders_color_escapes() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-t", "${color 1}x${color reset}"])
        .assert()
        .success()
        .stdout("\x1b[38;5;1mx\x1b[0;0m\n");
}

#[test]
fn renders_path_with_home_alias() {
    let ctx = TestContext::new();
    let deep = ctx.home().join("src/deep");
    fs::create_dir_all(&deep).unwrap();

    ctx.command_in(&deep)
        .args(["-t", "${path}"])
        .assert()
        .success()
        .stdout("~/src/deep\n");
}

#[test]
fn default_template_without_config_file() {
    let ctx = TestContext::new();
    ctx.command().assert().success().stdout("~\n");
}

#[test]
fn renders_branch_with_separator() {
    let ctx = TestContext::new();
    let repo = ctx.home().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();
    fs::write(repo.join(".git/HEAD"), "ref: refs/heads/feature/x\n").unwrap();

    ctx.command_in(&repo)
        .args(["-t", "${branch}${sep :}${path}"])
        .assert()
        .success()
        .stdout("feature/x:~/repo\n");
}

#[test]
fn elides_separator_outside_repository() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-t", "${branch}${sep :}${sep x}${path}"])
        .assert()
        .success()
        .stdout("~\n");
}

#[test]
fn command_errors_are_inline() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-t", "${color 999}|${path -q}"])
        .assert()
        .success()
        .stdout("<color-bad-code>|<path-bad-arg>\n");
}

#[test]
fn unknown_command_fails_render() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-t", "ok ${nope}"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "prwd: template error: unknown command: nope",
        ));
}

#[test]
fn unmatched_quote_fails_render() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-t", "${sep \"abc}"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unmatched quote"));
}

#[test]
fn template_from_config_file() {
    let ctx = TestContext::new();
    let config = ctx.write_config("template: \"${sep x}y\"\n");

    ctx.command()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("xy\n");
}

#[test]
fn config_from_environment() {
    let ctx = TestContext::new();
    let config = ctx.write_config("template: \"from env\"\n");

    ctx.command()
        .env("PRWD_CONFIG", &config)
        .assert()
        .success()
        .stdout("from env\n");
}

#[test]
fn template_flag_overrides_config() {
    let ctx = TestContext::new();
    let config = ctx.write_config("template: \"from config\"\n");

    ctx.command()
        .arg("-c")
        .arg(&config)
        .args(["-t", "from flag"])
        .assert()
        .success()
        .stdout("from flag\n");
}

#[test]
fn legacy_settings_in_default_config_file() {
    let ctx = TestContext::new();
    fs::write(
        ctx.home().join(".prwd.yaml"),
        "newsgroup: true\nmaxlength: 0\n",
    )
    .unwrap();
    let deep = ctx.home().join("alpha/beta/gamma");
    fs::create_dir_all(&deep).unwrap();

    ctx.command_in(&deep)
        .assert()
        .success()
        .stdout("~/a/b/gamma\n");
}

#[test]
fn invalid_config_is_user_error() {
    let ctx = TestContext::new();
    let config = ctx.write_config("maxlength: 999\n");

    ctx.command()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("maxlength must be between 0 and 255"));
}

#[test]
fn missing_explicit_config_is_user_error() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["--config", "does-not-exist.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn exports_aliases() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.home().join("proj")).unwrap();
    let config = ctx.write_config(&format!(
        "aliases:\n  $proj: {}\n  $gone: /does/not/exist\n  short: {}\n",
        ctx.home().join("proj").display(),
        ctx.home().display()
    ));

    ctx.command()
        .arg("-c")
        .arg(&config)
        .arg("-a")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("export proj="))
        .stdout(predicate::str::contains("gone").not())
        .stdout(predicate::str::contains("short").not());
}

#[test]
fn finds_repository_root() {
    let ctx = TestContext::new();
    let repo = ctx.home().join("repo");
    let deep = repo.join("src/module");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir(repo.join(".hg")).unwrap();

    ctx.command_in(&deep)
        .arg("-f")
        .assert()
        .success()
        .stdout(format!("{}\n", repo.display()));
}

#[test]
fn finds_target_root() {
    let ctx = TestContext::new();
    let repo = ctx.home().join("repo");
    let deep = repo.join("src/module");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join("src/Makefile"), "").unwrap();

    ctx.command_in(&deep)
        .args(["-f", "Makefile"])
        .assert()
        .success()
        .stdout(format!("{}\n", repo.join("src").display()));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-vv", "-t", "${sep x}"])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("rendering"));
}

#[test]
fn prints_version() {
    let ctx = TestContext::new();
    ctx.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("prwd "));
}
