use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const RECORD_SIZE: usize = 424;

fn contactz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contactz").unwrap();
    cmd.env("CONTACTZ_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn add(home: &Path, name: &str, phone: &str) {
    contactz(home)
        .args(["add", "--name", name, "--phone", phone])
        .assert()
        .success();
}

fn raw_record(id: u32, name: &str) -> Vec<u8> {
    let mut record = vec![0u8; RECORD_SIZE];
    record[..4].copy_from_slice(&id.to_le_bytes());
    record[4..4 + name.len()].copy_from_slice(name.as_bytes());
    record
}

#[test]
fn add_assigns_sequential_ids_and_writes_fixed_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    contactz(home)
        .args(["add", "--name", "Alice", "--phone", "555-1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with ID 1."));
    contactz(home)
        .args(["add", "--name", "bob", "--phone", "555-9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with ID 2."));

    let bytes = std::fs::read(home.join("contacts.dat")).unwrap();
    assert_eq!(bytes.len(), 2 * RECORD_SIZE);
    assert_eq!(&bytes[RECORD_SIZE..RECORD_SIZE + 4], &2u32.to_le_bytes());

    contactz(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("bob")));
}

#[test]
fn list_on_fresh_home_is_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    contactz(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn search_matches_name_or_phone_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Alice", "555-1234");
    add(home, "bob", "555-9999");

    contactz(home)
        .args(["search", "ALI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("bob").not()));

    contactz(home)
        .args(["search", "9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"));

    contactz(home)
        .args(["search", "zed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching contacts found."));
}

#[test]
fn empty_search_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    contactz(temp_dir.path())
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty query"));
}

#[test]
fn edit_keeps_omitted_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Alice", "555-1234");

    contactz(home)
        .args(["edit", "1", "--email", "alice@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated."));

    contactz(home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Alice")
                .and(predicate::str::contains("555-1234"))
                .and(predicate::str::contains("alice@example.com")),
        );
}

#[test]
fn missing_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Alice", "1");

    for sub in ["view", "delete"] {
        contactz(home)
            .args([sub, "7"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Contact with ID 7 not found"));
    }
}

#[test]
fn deleting_last_contact_removes_store_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "Alice", "1");
    add(home, "bob", "2");
    let store = home.join("contacts.dat");

    contactz(home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted."));
    assert_eq!(std::fs::metadata(&store).unwrap().len() as usize, RECORD_SIZE);

    contactz(home)
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts remain."));
    assert!(!store.exists());
}

#[test]
fn next_id_follows_highest_id() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    contactz(home)
        .arg("next-id")
        .assert()
        .success()
        .stdout("1\n");

    add(home, "a", "1");
    add(home, "b", "2");
    add(home, "c", "3");
    contactz(home).args(["delete", "2"]).assert().success();

    contactz(home)
        .arg("next-id")
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn menu_reads_script_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    contactz(home)
        .write_stdin("1\nAlice\n555-1234\nalice@example.com\n1 Main St\n2\n6\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("=== Contact Management ===")
                .and(predicate::str::contains("Contact added with ID 1."))
                .and(predicate::str::contains("Total contacts: 1"))
                .and(predicate::str::contains("Goodbye.")),
        );

    assert!(home.join("contacts.dat").exists());
}

#[test]
fn menu_exits_cleanly_on_eof() {
    let temp_dir = tempfile::tempdir().unwrap();
    contactz(temp_dir.path())
        .arg("menu")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn doctor_reports_and_fixes_partial_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let store = home.join("contacts.dat");

    let mut bytes = raw_record(1, "Alice");
    bytes.extend_from_slice(&[0xAB; 10]);
    std::fs::write(&store, &bytes).unwrap();

    // Lenient by default: the whole record is still readable
    contactz(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    contactz(home)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("partial record"));
    assert_eq!(std::fs::metadata(&store).unwrap().len() as usize, RECORD_SIZE + 10);

    contactz(home)
        .args(["doctor", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Truncated partial record (10 bytes)"));
    assert_eq!(std::fs::metadata(&store).unwrap().len() as usize, RECORD_SIZE);
}

#[test]
fn strict_records_config_rejects_partial_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    let mut bytes = raw_record(1, "Alice");
    bytes.extend_from_slice(&[0u8; 3]);
    std::fs::write(home.join("contacts.dat"), &bytes).unwrap();

    contactz(home)
        .args(["config", "strict-records", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict-records set to true"));

    contactz(home).arg("list").assert().failure();
}

#[test]
fn config_data_file_redirects_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    contactz(home)
        .args(["config", "data-file", "people.dat"])
        .assert()
        .success();
    add(home, "Alice", "1");

    assert!(home.join("people.dat").exists());
    assert!(!home.join("contacts.dat").exists());

    contactz(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = people.dat"));
}

#[test]
fn dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    contactz(env_home.path())
        .args(["add", "--name", "Alice", "--dir"])
        .arg(flag_home.path())
        .assert()
        .success();

    assert!(flag_home.path().join("contacts.dat").exists());
    assert!(!env_home.path().join("contacts.dat").exists());
}

#[test]
fn add_after_partial_record_fails_until_repaired() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let store = home.join("contacts.dat");
    add(home, "Alice", "1");

    let mut bytes = std::fs::read(&store).unwrap();
    bytes.extend_from_slice(&[1, 2, 3]);
    std::fs::write(&store, &bytes).unwrap();

    contactz(home)
        .args(["add", "--name", "Bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("doctor --fix"));
    assert_eq!(std::fs::metadata(&store).unwrap().len() as usize, RECORD_SIZE + 3);

    contactz(home).args(["doctor", "--fix"]).assert().success();
    contactz(home)
        .args(["add", "--name", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added with ID 2."));
    contactz(home)
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn invalid_config_values_fail_and_keep_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    for bad in ["config.json", ".", ".."] {
        contactz(home)
            .args(["config", "data-file", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("plain file name"));
    }
    contactz(home)
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    add(home, "Alice", "1");
    assert!(home.join("contacts.dat").exists());
    contactz(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = contacts.dat"));
}
