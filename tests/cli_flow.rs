use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn latchkey(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("latchkey").unwrap();
    cmd.env("LATCHKEY_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("LATCHKEY_LOG");
    cmd
}

fn register(home: &Path, email: &str, password: &str) -> String {
    let output = latchkey(home)
        .args(["register", email, password, password])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Confirmation link: "))
        .map(str::to_string)
        .expect("register prints the confirmation link")
}

#[test]
fn full_account_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    let link = register(home, "alice@example.com", "secret1");
    assert!(link.starts_with("http://localhost:8080/confirm.html?token="));

    latchkey(home)
        .args(["login", "alice@example.com", "secret1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Please confirm your email before logging in",
        ));

    latchkey(home)
        .args(["confirm", &link])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email confirmed successfully!"))
        .stdout(predicate::str::contains("[login]"));

    latchkey(home)
        .args(["login", "alice@example.com", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in successfully!"))
        .stdout(predicate::str::contains("[home]"))
        .stdout(predicate::str::contains("(A) alice@example.com"));

    latchkey(home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("(A) alice@example.com"))
        .stdout(predicate::str::contains("Not logged in.").not());

    latchkey(home)
        .args(["open", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[home]"));

    latchkey(home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."))
        .stdout(predicate::str::contains("[login]"));

    latchkey(home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("(U)"))
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn duplicate_email_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    register(home, "bob@example.com", "secret1");

    latchkey(home)
        .args(["register", "bob@example.com", "other12", "other12"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("This email is already registered"));
}

#[test]
fn form_checks_run_before_registration() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    latchkey(home)
        .args(["register", "carol@example.com", "secret1", "secret2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Passwords do not match"));

    latchkey(home)
        .args(["register", "carol@example.com", "abc", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Password must be at least 6 characters long",
        ));

    // Nothing was registered, so there is no link either
    latchkey(home).arg("link").assert().failure();
}

#[test]
fn wrong_password_and_unknown_token() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    register(home, "dave@example.com", "secret1");

    latchkey(home)
        .args(["confirm", "not-a-token"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid confirmation token"));

    latchkey(home)
        .args(["login", "dave@example.com", "wrong-pass"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid email or password"));
}

#[test]
fn protected_view_redirects_to_login() {
    let temp_dir = tempfile::tempdir().unwrap();

    latchkey(temp_dir.path())
        .args(["open", "home"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("redirecting to login"))
        .stdout(predicate::str::contains("[login]"));

    latchkey(temp_dir.path())
        .args(["open", "register"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[register]"));
}

#[test]
fn theme_toggle_persists() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    latchkey(home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    latchkey(home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"))
        .stdout(predicate::str::contains("☀️ Light"));

    assert_eq!(std::fs::read_to_string(home.join("theme")).unwrap(), "dark");

    latchkey(home)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn configured_origin_is_used_for_links() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    latchkey(home)
        .args(["config", "origin", "https://example.org/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("origin set to https://example.org"));

    let link = register(home, "erin@example.com", "secret1");
    assert!(link.starts_with("https://example.org/confirm.html?token="));

    latchkey(home)
        .arg("link")
        .assert()
        .success()
        .stdout(predicate::str::contains(link.as_str()));
}

#[test]
fn doctor_resets_corrupted_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    register(home, "frank@example.com", "secret1");
    std::fs::write(home.join("currentUser"), "{broken").unwrap();

    latchkey(home)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    latchkey(home)
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("currentUser"))
        .stdout(predicate::str::contains("--reset"));

    latchkey(home).args(["doctor", "--reset"]).assert().success();

    latchkey(home)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found."));

    // Accounts survived, only the session was dropped
    latchkey(home)
        .args(["register", "frank@example.com", "secret1", "secret1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("This email is already registered"));
}

#[test]
fn doctor_recovers_from_non_text_users_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    std::fs::write(home.join("users"), [0xff, 0xfe, b'[']).unwrap();

    latchkey(home)
        .args(["register", "gina@example.com", "secret1", "secret1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage corrupted under key 'users'"));

    latchkey(home)
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("'users' is corrupted"));

    latchkey(home)
        .args(["doctor", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset 'users'"));

    register(home, "gina@example.com", "secret1");
}

#[test]
fn unusable_origin_stops_registration_before_saving() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    latchkey(home)
        .args(["config", "origin", "mailto:ops@x.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid origin"));

    // A hand-edited config bypasses the check above
    std::fs::write(
        home.join("config.json"),
        r#"{"origin":"mailto:ops@x.com"}"#,
    )
    .unwrap();

    latchkey(home)
        .args(["register", "hank@example.com", "secret1", "secret1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid origin"));
    assert!(!home.join("users").exists());

    latchkey(home)
        .args(["config", "origin", "http://localhost:9000"])
        .assert()
        .success();

    let link = register(home, "hank@example.com", "secret1");
    assert!(link.starts_with("http://localhost:9000/confirm.html?token="));
}

#[test]
fn init_creates_data_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path().join("nested").join("store");

    latchkey(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized latchkey store at"));

    assert!(home.is_dir());
}
