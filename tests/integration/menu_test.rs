//! End-to-end runs of the interactive menu over an in-memory catalog

use car_catalog::Menu;

use crate::utils::sample_catalog;

fn run_menu(input: &str) -> String {
    let mut menu = Menu::new(sample_catalog(), input.as_bytes(), Vec::new());
    menu.run().unwrap();
    String::from_utf8(menu.into_output()).unwrap()
}

#[test]
fn test_group_by_tyre_option() {
    let output = run_menu("1\n9\n");

    assert!(output.contains("Tyre: WINTER"));
    assert!(output.contains("Tyre: ALL_SEASON"));
}

#[test]
fn test_price_range_option() {
    let output = run_menu("2\n100\n200\nsedan\n9\n");

    assert!(output.contains("Astra"));
    assert!(output.contains("Zafira"));
    assert!(!output.contains("Corsa {"));
}

#[test]
fn test_inverted_range_is_reported() {
    let output = run_menu("2\n200\n100\n9\n");
    assert!(output.contains("ERROR: Invalid range"));
}

#[test]
fn test_component_selection_loop() {
    let output = run_menu("3\n1\nsunroof\ngps\n1\nAC\n2\n9\n");

    assert!(output.contains("Unknown component: sunroof"));
    assert!(output.contains("Components: [GPS, AC]"));
    assert!(output.contains("Zafira"));
}

#[test]
fn test_mileage_option() {
    let output = run_menu("4\n9\n");
    assert!(output.contains("Car: Mokka -> Mileage: 10000"));
}

#[test]
fn test_engine_models_option() {
    let output = run_menu("5\ndiesel\n5\nhybrid\n9\n");

    assert!(output.contains("[Astra, Mokka]"));
    assert!(output.contains("ERROR: no car has a HYBRID engine"));
}

#[test]
fn test_sort_option() {
    let output = run_menu("6\nbubble\nprice\ndesc\n9\n");

    assert!(output.contains("Sorted by PRICE DESCENDING (BUBBLE_SORT)"));
    let corsa = output.find("Corsa {").unwrap();
    let mokka = output.find("Mokka {").unwrap();
    assert!(corsa < mokka);
}

#[test]
fn test_sort_option_rejects_unknown_algorithm() {
    let output = run_menu("6\nbogo\n9\n");
    assert!(output.contains("ERROR: Unknown sorting algorithm: bogo"));
}

#[test]
fn test_statistics_option() {
    let output = run_menu("7\nmileage\ntotal\nbody\n7\nprice\nsummary\n9\n");

    assert!(output.contains("SEDAN: 170000"));
    assert!(output.contains("MAX: 250.5 (Corsa)"));
    assert!(output.contains("COUNT: 5"));
}

#[test]
fn test_input_may_end_mid_request() {
    let output = run_menu("6\nmerge\n");
    assert!(output.contains("INPUT SORT CRITERION"));
}
