//! Golden snapshot tests for rendered surfaces
//!
//! These tests load resolved package documents from `tests/fixtures/` and compare the rendered surface against
//! stored snapshots. Any change to the canonical text is a change to the wire format, so it must be reviewed.
//!
//! Run with: `cargo test --test surface_snapshot_tests`
//! Review changes: `cargo insta review`

use std::path::Path;

use apisurface::format_packages;
use apisurface_model::load_program_file;

/// Load a fixture document and render every package in it
fn render_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}.json", name);
    let program = load_program_file(Path::new(&path)).unwrap_or_else(|e| panic!("Failed to load {}: {}", path, e));
    format_packages(&program.packages).expect("render failed")
}

#[test]
fn test_type_alias_surface() {
    let surface = render_fixture("type_alias");
    insta::assert_snapshot!("type_alias", surface);
}

#[test]
fn test_type_alias_import_surface() {
    let surface = render_fixture("type_alias_import");
    insta::assert_snapshot!("type_alias_import", surface);
}

#[test]
fn test_methods_surface() {
    let surface = render_fixture("methods");
    insta::assert_snapshot!("methods", surface);
}

#[test]
fn test_interface_surface() {
    let surface = render_fixture("interface");
    insta::assert_snapshot!("interface", surface);
}

#[test]
fn test_struct_with_fields_surface() {
    let surface = render_fixture("struct_with_fields");
    insta::assert_snapshot!("struct_with_fields", surface);
}

#[test]
fn test_variadic_with_labels_surface() {
    let surface = render_fixture("variadic_with_labels");
    insta::assert_snapshot!("variadic_with_labels", surface);
}

#[test]
fn test_kitchen_sink_surface() {
    let surface = render_fixture("kitchen_sink");
    insta::assert_snapshot!("kitchen_sink", surface);
}

#[test]
fn test_program_with_main_surface() {
    let surface = render_fixture("program_with_main");
    insta::assert_snapshot!("program_with_main", surface);
}
