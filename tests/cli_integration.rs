use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stocky(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stocky").unwrap();
    cmd.env("STOCKY_HOME", home.path());
    cmd
}

#[test]
fn add_then_list_shows_the_item() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Item added: Chair"));

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Chair"))
        .stdout(predicates::str::contains("x5"))
        .stdout(predicates::str::contains("Furniture"));
}

#[test]
fn empty_inventory_prints_the_hint() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in inventory."));
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success();
    stocky(&home)
        .args(["add", "Lamp", "2", "Electronics"])
        .assert()
        .success();

    stocky(&home)
        .args(["list", "--search", "lam"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Lamp"))
        .stdout(predicates::str::contains("Chair").not());
}

#[test]
fn search_subcommand_is_list_with_a_term() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success();
    stocky(&home)
        .args(["add", "Lamp", "2", "Electronics"])
        .assert()
        .success();

    stocky(&home)
        .args(["search", "chair"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Chair"))
        .stdout(predicates::str::contains("Lamp").not());
}

#[test]
fn quantity_sort_lists_high_to_low() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "3", "Furniture"])
        .assert()
        .success();
    stocky(&home)
        .args(["add", "Monitor", "9", "Electronics"])
        .assert()
        .success();

    stocky(&home)
        .args(["list", "--sort", "quantity"])
        .assert()
        .success()
        .stdout(predicates::str::is_match("(?s)Monitor.*Chair").unwrap());
}

#[test]
fn edit_changes_the_stored_quantity() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success();

    stocky(&home)
        .args(["edit", "1", "--quantity", "9"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Item updated"));

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("x9"));
}

#[test]
fn forced_delete_removes_the_item() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success();

    stocky(&home)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Item deleted"));

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in inventory."));
}

#[test]
fn delete_prompt_declined_keeps_the_item() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success();

    stocky(&home)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Cancelled."));

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Chair"));
}

#[test]
fn delete_prompt_accepted_removes_the_item() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Furniture"])
        .assert()
        .success();

    stocky(&home)
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Item deleted"));
}

#[test]
fn zero_quantity_is_rejected_before_the_store() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "0", "Furniture"])
        .assert()
        .failure()
        .stdout(predicates::str::contains(
            "Quantity must be a positive number",
        ));

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in inventory."));
}

#[test]
fn unknown_category_is_rejected_by_the_parser() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "5", "Hardware"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown category"));
}

#[test]
fn default_sort_config_applies_to_bare_list() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .args(["add", "Chair", "3", "Furniture"])
        .assert()
        .success();
    stocky(&home)
        .args(["add", "Monitor", "9", "Electronics"])
        .assert()
        .success();

    stocky(&home)
        .args(["config", "default-sort", "quantity"])
        .assert()
        .success()
        .stdout(predicates::str::contains("default-sort = quantity"));

    stocky(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::is_match("(?s)Monitor.*Chair").unwrap());
}

#[test]
fn categories_prints_the_fixed_set() {
    let home = TempDir::new().unwrap();

    stocky(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicates::str::contains("Furniture"))
        .stdout(predicates::str::contains("Others"));
}
