use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docview")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn render_stdin(fixture: &str, extra_args: &[&str]) -> String {
    let input = std::fs::read_to_string(fixture_path(fixture)).unwrap();
    let assert = cmd().args(extra_args).write_stdin(input).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin mode --

#[test]
fn documentation_page() {
    let output = render_stdin("documentation.json", &[]);
    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<title>Shapes</title>"));
    assert!(output.contains("<h1>Shapes</h1>"));
    assert!(output.contains("Geometric shapes &amp; their areas."));
    assert!(output.contains("<a href=\"#Description\">More...</a>"));
    assert!(output.contains("<h2 id=\"Description\">Description</h2>"));
}

#[test]
fn documentation_overview_links() {
    let output = render_stdin("documentation.json", &[]);
    assert!(output.contains("<th><a href=\"#L12C13\">Area</a></th>"));
    assert!(output.contains("<th><a href=\"docs/ada.streams.html#L5C9\">Root_Stream_Type</a></th>"));
}

#[test]
fn documentation_details() {
    let output = render_stdin("documentation.json", &[]);
    assert!(output.contains(
        "<h3 id=\"L4C9\">Shape<sup class=\"srcHref\"><a href=\"../srcs/shapes.ads.html#L4\"> [source]</a></sup></h3>"
    ));
    // Externally defined entities only appear in the overview
    assert!(!output.contains("id=\"L5C9\""));
    assert!(output.contains(
        "<p>Inherits <a href=\"../docs/ada.finalization.html#L10C9\" target=\"contentView\">Controlled</a></p>"
    ));
    assert!(output.contains(
        "<p>Inherited by <a href=\"../docs/shapes.html#L8C9\" target=\"contentView\">Circle</a></p>"
    ));
    assert!(output.contains(
        "<dt id=\"L12C19\">Self of type <a href=\"../docs/shapes.html#L4C9\" target=\"contentView\">Shape</a></dt>"
    ));
    assert!(output.contains("<dt>Return value of type <a href=\"../docs/standard.html#L1C1\" target=\"contentView\">Float</a></dt>"));
    assert!(output.contains("<dt>Exceptions</dt>"));
    assert!(output.contains("<dt id=\"L20C19\">Red</dt>"));
    assert!(output.contains("<dt id=\"L20C24\">Green</dt>"));
}

#[test]
fn documentation_markup() {
    let output = render_stdin("documentation.json", &[]);
    assert!(output.contains("<span class=\"text\">See </span>"));
    assert!(output.contains("<span><a href=\"../docs/shapes.html#L8C9\">Circle</a></span>"));
    assert!(output.contains("<img src=\"../images/shapes.png\">"));
}

#[test]
fn index_page_default_view() {
    let output = render_stdin("index.json", &[]);
    assert!(output.contains("<span id=\"projectName\">Demo</span>"));
    assert!(output.contains("<span id=\"documentationTimestamp\">2024-05-01 10:00</span>"));
    assert!(output.contains("<ul style=\"display: block\" id=\"packagesAndClasses\">"));
    assert!(output.contains("<ul style=\"display: none\" id=\"entities\">"));
    assert!(output.contains("<ul style=\"display: none\" id=\"sources\">"));
    assert!(output.contains("<li id=\"packagesAndClassesMenu\" class=\"current\">"));
    assert!(output.contains(
        "<li><a href=\"docs/shapes.drawing.html\" target=\"contentView\">Shapes.Drawing</a></li>"
    ));
    assert!(output.contains("<iframe id=\"contentView\" name=\"contentView\" src=\"blank.html\"></iframe>"));
}

#[test]
fn index_page_selected_view() {
    let output = render_stdin("index.json", &["--view", "sources"]);
    assert!(output.contains("<ul style=\"display: none\" id=\"packagesAndClasses\">"));
    assert!(output.contains("<ul style=\"display: block\" id=\"sources\">"));
    assert!(output.contains("<li id=\"sourcesMenu\" class=\"current\">"));
    assert!(!output.contains("<li id=\"packagesAndClassesMenu\" class=\"current\">"));
}

#[test]
fn index_page_inheritance_view() {
    let output = render_stdin("index.json", &["--view", "inheritance"]);
    assert!(!output.contains("display: block"));
    assert!(output.contains("src=\"inheritance_index.html\""));
}

#[test]
fn category_page_groups() {
    let output = render_stdin("category.json", &[]);
    assert!(output.contains("<h1>Types</h1>"));
    assert_eq!(output.matches("<dt>").count(), 2);
    assert!(output.contains("<dt>A</dt>"));
    assert!(output.contains("<dt>B</dt>"));
    assert!(output.contains(
        "<dd><a href=\"../docs/fruit.html#L5C9\">apple</a> from <a href=\"../srcs/fruit.ads.html#L5\">Fruit</a></dd>"
    ));
    let a = output.find("<dt>A</dt>").unwrap();
    let apple = output.find(">apple<").unwrap();
    let b = output.find("<dt>B</dt>").unwrap();
    assert!(a < apple && apple < b);
}

#[test]
fn inheritance_page_nests() {
    let output = render_stdin("inheritance.json", &[]);
    assert!(output.contains("<title>Inheritance Tree</title>"));
    assert!(output.contains("<li><a href=\"a.html\">A</a><ul>"));
    assert!(output.contains("<li><a href=\"b.html\">B</a></li>"));
}

#[test]
fn source_page_listing() {
    let output = render_stdin("source.json", &[]);
    assert!(output.contains("<h1>shapes.ads</h1>"));
    assert!(output.contains("<table class=\"code\" cellpadding=\"0\" cellspacing=\"0\">"));
    assert!(output.contains("<th id=\"L1\">1</th>"));
    assert!(output.contains("<th id=\"L3\">3</th>"));
    assert!(output.contains("<span class=\"keyword\">package</span>"));
    assert!(output.contains("<span><a href=\"../docs/shapes.html#L8C9\"> Circle</a></span>"));
}

#[test]
fn explicit_page_kind() {
    // documentation.json also carries an Index section
    let output = render_stdin("documentation.json", &["--page", "index"]);
    assert!(output.contains("<title>Demo</title>"));
    assert!(output.contains("id=\"tocView\""));
}

#[test]
fn missing_section_fails() {
    let input = std::fs::read_to_string(fixture_path("category.json")).unwrap();
    cmd()
        .args(["--page", "source"])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshot has no SourceFile section"));
}

#[test]
fn unknown_node_kind_fails() {
    let input = std::fs::read_to_string(fixture_path("unknown_kind.json")).unwrap();
    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant `marquee`"));
}

#[test]
fn empty_snapshot_fails() {
    cmd()
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no renderable section"));
}

#[test]
fn same_input_same_output() {
    let first = render_stdin("documentation.json", &[]);
    let second = render_stdin("documentation.json", &[]);
    assert_eq!(first, second);
}

// -- output formats --

#[test]
fn json_format() {
    let output = render_stdin("source.json", &["-f", "json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"], "shapes.ads");
    assert_eq!(value["body"]["attributes"]["id"], "body");
    assert_eq!(value["body"]["children"][1]["tag"], "table");
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("documentation.json"))
        .arg(fixture_path("source.json"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("documentation.html")).unwrap();
    assert!(output.contains("<h1>Shapes</h1>"));
    assert!(dir.path().join("source.html").exists());
}

#[test]
fn file_mode_matches_stdin_mode() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("category.json"))
        .assert()
        .success();

    let from_file = std::fs::read_to_string(dir.path().join("category.html")).unwrap();
    assert_eq!(from_file, render_stdin("category.json", &[]));
}

#[test]
fn file_mode_directory_input() {
    let input = TempDir::new().unwrap();
    std::fs::copy(fixture_path("inheritance.json"), input.path().join("inheritance_index.json")).unwrap();
    std::fs::write(input.path().join("README.txt"), "not a snapshot").unwrap();
    let output = TempDir::new().unwrap();

    cmd()
        .args(["-o", output.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(output.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(output.path().join("inheritance_index.html").exists());
}

/// `href` of the menu entry with the given id.
fn menu_href<'a>(page: &'a str, menu_id: &str) -> &'a str {
    let item = format!("<li id=\"{}\"", menu_id);
    let rest = &page[page.find(&item).unwrap()..];
    let rest = &rest[rest.find("href=\"").unwrap() + "href=\"".len()..];
    &rest[..rest.find('"').unwrap()]
}

#[test]
fn file_mode_index_menu_switches_lists() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("index.json"))
        .assert()
        .success();

    let main = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(main.contains("<ul style=\"display: block\" id=\"packagesAndClasses\">"));
    assert_eq!(menu_href(&main, "packagesAndClassesMenu"), "index.html");

    let entities_href = menu_href(&main, "entitiesMenu");
    assert_eq!(entities_href, "index-entities.html");
    let entities = std::fs::read_to_string(dir.path().join(entities_href)).unwrap();
    assert!(entities.contains("<ul style=\"display: block\" id=\"entities\">"));
    assert!(entities.contains("<ul style=\"display: none\" id=\"packagesAndClasses\">"));
    assert!(entities.contains("<li id=\"entitiesMenu\" class=\"current\">"));

    let sources = std::fs::read_to_string(dir.path().join(menu_href(&main, "sourcesMenu"))).unwrap();
    assert!(sources.contains("<ul style=\"display: block\" id=\"sources\">"));
    assert_eq!(menu_href(&sources, "packagesAndClassesMenu"), "index.html");

    let inheritance =
        std::fs::read_to_string(dir.path().join(menu_href(&main, "inheritanceMenu"))).unwrap();
    assert!(!inheritance.contains("display: block"));
    assert!(inheritance.contains("src=\"inheritance_index.html\""));
}

#[test]
fn file_mode_index_initial_view_keeps_stem() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--view", "sources"])
        .arg(fixture_path("index.json"))
        .assert()
        .success();

    let main = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(main.contains("<ul style=\"display: block\" id=\"sources\">"));
    assert_eq!(menu_href(&main, "packagesAndClassesMenu"), "index-packages.html");
    assert!(dir.path().join("index-packages.html").exists());
    assert!(!dir.path().join("index-sources.html").exists());
}

#[test]
fn file_mode_skips_bad_snapshot() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("unknown_kind.json"))
        .arg(fixture_path("source.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));

    assert!(!dir.path().join("unknown_kind.html").exists());
    assert!(dir.path().join("source.html").exists());
}

#[test]
fn file_mode_json_extension() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("source.json"))
        .assert()
        .success();

    assert!(dir.path().join("source.json").exists());
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("source.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

// -- config --

#[test]
fn config_file_overrides_links_and_stylesheet() {
    let mut config = NamedTempFile::with_suffix(".toml").unwrap();
    config
        .write_all(b"[links]\nbase = \"/docs/\"\nframe_target = \"main\"\n\n[page]\nstylesheet = \"/docs/style.css\"\n")
        .unwrap();

    let output = render_stdin(
        "documentation.json",
        &["--config", config.path().to_str().unwrap()],
    );
    assert!(output.contains("<link rel=\"stylesheet\" href=\"/docs/style.css\">"));
    assert!(output.contains("<a href=\"/docs/srcs/shapes.ads.html#L4\"> [source]</a>"));
    assert!(output.contains("target=\"main\""));
    assert!(!output.contains("target=\"contentView\""));
}

#[test]
fn config_initial_view_and_cli_override() {
    let mut config = NamedTempFile::with_suffix(".toml").unwrap();
    config
        .write_all(b"[page]\ninitial_view = \"entities\"\n")
        .unwrap();
    let path = config.path().to_str().unwrap();

    let output = render_stdin("index.json", &["--config", path]);
    assert!(output.contains("<li id=\"entitiesMenu\" class=\"current\">"));

    let output = render_stdin("index.json", &["--config", path, "--view", "packages"]);
    assert!(output.contains("<li id=\"packagesAndClassesMenu\" class=\"current\">"));
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/docview.toml"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
