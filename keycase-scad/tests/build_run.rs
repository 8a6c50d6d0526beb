//! Full build runs against a real layout with the SCAD backend.

use std::{io, path::Path, time::Duration};

use keycase_build::{
    BuildMode, BuildOptions, Generator, RenderExit, RenderHandle, RenderStatus,
};
use keycase_core::OutputDirs;
use keycase_layout::Layout;
use keycase_params::{ParamValue, ParameterSet, ResolvedConfig};
use keycase_scad::{LayoutBackend, ScadWriter};
use tempfile::TempDir;

const LAYOUT: &str = r#"[
    {name: "macro"},
    ["Esc", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "Bksp"],
    [{w: 1.5}, "Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", {w: 1.5}, "\\"],
    [{w: 6.25}, "Space"]
]"#;

fn never_launched(_: &Path, _: &Path) -> io::Result<Box<dyn RenderHandle>> {
    Err(io::Error::other("rendering was not requested"))
}

struct Instant;

impl RenderHandle for Instant {
    fn wait_timeout(&mut self, _timeout: Duration) -> io::Result<Option<RenderExit>> {
        Ok(Some(RenderExit::success()))
    }
}

fn instant(_: &Path, _: &Path) -> io::Result<Box<dyn RenderHandle>> {
    Ok(Box::new(Instant))
}

/// Written design files relative to the output folder, one per line.
fn listing(temp: &TempDir, outcome: &keycase_build::BuildOutcome) -> String {
    outcome
        .written()
        .map(|a| {
            a.paths
                .design
                .strip_prefix(temp.path())
                .unwrap()
                .display()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_whole_object_build() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::parse(LAYOUT).unwrap();
    let mut overrides = ParameterSet::new();
    overrides.insert("cable_hole".to_string(), ParamValue::from(true));
    let config = ResolvedConfig::resolve(&overrides).unwrap();

    let generator = Generator::new(
        &config,
        "macro",
        OutputDirs::new(temp.path(), "macro"),
        BuildOptions::default(),
    );
    let mut backend = LayoutBackend::new(&layout, &config);

    let outcome = generator
        .run(&mut backend, &ScadWriter, &never_launched, &mut ())
        .unwrap();

    insta::assert_snapshot!(listing(&temp, &outcome), @r"
    macro/scad/macro_top.scad
    macro/scad/macro_bottom.scad
    macro/scad/macro_all.scad
    macro/scad/macro_plate.scad
    macro/scad/macro_cable_holder_main.scad
    macro/scad/macro_cable_holder_clamp.scad
    macro/scad/macro_cable_holder_all.scad
    ");

    let plate = std::fs::read_to_string(temp.path().join("macro/scad/macro_plate.scad")).unwrap();
    assert!(plate.starts_with("$fn = 8;\n\n"));
    assert!(temp.path().join("macro/stl").is_dir());
    assert!(outcome.dimensions.is_some());
}

#[test]
fn test_all_sections_with_render() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::parse(LAYOUT).unwrap();
    let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();
    let options = BuildOptions {
        mode: BuildMode::AllSections,
        render: true,
        include_switch_type: true,
        poll_interval: Duration::ZERO,
        ..BuildOptions::default()
    };

    let generator = Generator::new(&config, "macro", OutputDirs::new(temp.path(), "macro"), options);
    let mut backend = LayoutBackend::new(&layout, &config);

    let outcome = generator
        .run(&mut backend, &ScadWriter, &instant, &mut ())
        .unwrap();

    assert_eq!(outcome.counts.top, 2);
    assert_eq!(outcome.counts.bottom, 2);
    assert_eq!(outcome.written().count(), 8);
    assert_eq!(outcome.renders.len(), 8);
    assert!(
        outcome
            .renders
            .iter()
            .all(|job| job.status() == &RenderStatus::Succeeded)
    );
    assert!(
        temp.path()
            .join("macro/scad/macro_section_1_bottom_mx_openable_cherry.scad")
            .exists()
    );
}

#[test]
fn test_exploded_build_staggers_sections() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::parse(LAYOUT).unwrap();
    let config = ResolvedConfig::resolve(&ParameterSet::new()).unwrap();
    let options = BuildOptions {
        mode: BuildMode::Exploded,
        ..BuildOptions::default()
    };

    let generator = Generator::new(&config, "macro", OutputDirs::new(temp.path(), "macro"), options);
    let mut backend = LayoutBackend::new(&layout, &config);

    generator
        .run(&mut backend, &ScadWriter, &never_launched, &mut ())
        .unwrap();

    let top = std::fs::read_to_string(temp.path().join("macro/scad/macro_exploded_top.scad")).unwrap();
    assert!(top.contains("translate([0, 0, 0])"));
    assert!(top.contains("translate([10, 0, 5])"));
}
