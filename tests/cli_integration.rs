use assert_cmd::Command;
use predicates::prelude::*;

fn rolo(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

fn add_contact(dir: &std::path::Path, name: &str, phone: &str, email: &str, group: &str) {
    rolo(dir)
        .args(["add", name, "--phone", phone, "--email", email, "--group", group])
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));
}

#[test]
fn add_persists_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "bob@gmail.com", "Work");

    // A fresh process reads the same data back
    rolo(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("1234567890"))
        .stdout(predicate::str::contains("Work"));
}

#[test]
fn data_file_holds_fixed_size_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");
    add_contact(temp_dir.path(), "Amy", "9876543210", "NA", "Family");

    let data = std::fs::metadata(temp_dir.path().join("contacts.dat")).unwrap();
    assert_eq!(data.len(), 2 * 135);
}

#[test]
fn add_rejects_a_bad_phone_number() {
    let temp_dir = tempfile::tempdir().unwrap();
    rolo(temp_dir.path())
        .args(["add", "Bob", "--phone", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("10 digits"));

    rolo(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone book is empty."));
}

#[test]
fn add_rejects_a_bad_email() {
    let temp_dir = tempfile::tempdir().unwrap();
    rolo(temp_dir.path())
        .args(["add", "Bob", "--phone", "1234567890", "--email", "bob@badhost.org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("@gmail.com"));
}

#[test]
fn search_covers_name_phone_and_group() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Robert", "1234567890", "NA", "Work");
    add_contact(temp_dir.path(), "Amy", "9876543210", "NA", "Family");

    rolo(temp_dir.path())
        .args(["search", "rob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robert"));

    rolo(temp_dir.path())
        .args(["search", "8765", "--by", "phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy"));

    rolo(temp_dir.path())
        .args(["search", "fam", "--by", "group"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy"))
        .stdout(predicate::str::contains("Robert").not());

    rolo(temp_dir.path())
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found with the given name."));
}

#[test]
fn delete_removes_all_case_variant_matches() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Amy", "1234567890", "NA", "Work");
    add_contact(temp_dir.path(), "amy", "9876543210", "NA", "Work");
    add_contact(temp_dir.path(), "Bob", "5556667778", "NA", "Work");

    rolo(temp_dir.path())
        .args(["delete", "AMY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    rolo(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Amy").not())
        .stdout(predicate::str::contains("amy").not());
}

#[test]
fn delete_reports_an_absent_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");

    rolo(temp_dir.path())
        .args(["delete", "Zoe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact found with the given name."));
}

#[test]
fn purge_empties_the_book() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");

    rolo(temp_dir.path())
        .args(["purge", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All contacts have been deleted."));

    rolo(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone book is empty."));
}

#[test]
fn sort_orders_byte_wise_uppercase_first() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "bob", "1234567890", "NA", "Work");
    add_contact(temp_dir.path(), "Alice", "9876543210", "NA", "Work");

    rolo(temp_dir.path()).arg("sort").assert().success();

    let output = rolo(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let alice = stdout.find("Alice").unwrap();
    let bob = stdout.find("bob").unwrap();
    assert!(alice < bob);
}

#[test]
fn modify_changes_a_single_field() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");

    rolo(temp_dir.path())
        .args(["modify", "bob", "--phone", "5556667778"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modified"));

    rolo(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("5556667778"));
}

#[test]
fn modify_requires_a_sensible_flag_combination() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");

    rolo(temp_dir.path())
        .args(["modify", "Bob", "--phone", "5556667778", "--email", "NA"])
        .assert()
        .failure();
}

#[test]
fn groups_lists_defaults_and_the_custom_slot() {
    let temp_dir = tempfile::tempdir().unwrap();
    rolo(temp_dir.path())
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("Family"))
        .stdout(predicate::str::contains("Other"))
        .stdout(predicate::str::contains("Add your own group"));
}

#[test]
fn doctor_drops_a_partial_trailing_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");

    // Simulate a crash mid-write
    let path = temp_dir.path().join("contacts.dat");
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.extend_from_slice(b"garbage");
    std::fs::write(&path, &bytes).unwrap();

    rolo(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped 7 trailing byte(s)"));

    rolo(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("No inconsistencies found."));
}

#[test]
fn path_prints_the_data_file_location() {
    let temp_dir = tempfile::tempdir().unwrap();
    rolo(temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.dat"));
}

#[test]
fn config_data_file_is_honored() {
    let temp_dir = tempfile::tempdir().unwrap();
    rolo(temp_dir.path())
        .args(["config", "data-file", "book.dat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("book.dat"));

    add_contact(temp_dir.path(), "Bob", "1234567890", "NA", "Work");
    assert!(temp_dir.path().join("book.dat").exists());
}
