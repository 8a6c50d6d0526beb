//! Artifact name listings for each build mode.

use keycase_build::{ArtifactNamer, BuildMode, SectionCounts, plan};
use keycase_core::OutputDirs;
use keycase_params::{Format, ResolvedConfig, parse_overrides};

fn resolve(toml: &str) -> ResolvedConfig {
    let overrides = parse_overrides(toml, "params.toml", Format::Toml).expect("valid parameters");
    ResolvedConfig::resolve(&overrides).expect("valid configuration")
}

/// Plan a build and list every design file stem in order.
fn stems(config: &ResolvedConfig, mode: BuildMode, top: usize, bottom: usize, switch: bool) -> String {
    let namer = ArtifactNamer::new("planck", OutputDirs::new("output", "planck"));
    let targets = plan(mode, SectionCounts { top, bottom }, config.params().cable_hole)
        .expect("plannable");

    let mut lines = Vec::new();
    for target in &targets {
        for &part in &target.parts {
            lines.push(namer.file_stem(target, part, config, switch));
        }
    }
    lines.join("\n")
}

#[test]
fn test_whole_object_with_cable_holder() {
    let config = resolve(
        r#"
        cable_hole = true
        kerf = 0.1
        "#,
    );

    assert_eq!(config.params().kerf, 0.1);
    assert!(config.params().cable_hole);

    insta::assert_snapshot!(stems(&config, BuildMode::WholeObject, 1, 1, false), @r"
    planck_top
    planck_bottom
    planck_all
    planck_plate
    planck_cable_holder_main
    planck_cable_holder_clamp
    planck_cable_holder_all
    ");
}

#[test]
fn test_all_sections_with_switch_type() {
    let config = resolve("");

    insta::assert_snapshot!(stems(&config, BuildMode::AllSections, 2, 1, true), @r"
    planck_section_0_top_mx_openable_cherry
    planck_section_0_all_mx_openable_cherry
    planck_section_0_plate_mx_openable_cherry
    planck_section_0_bottom_mx_openable_cherry
    planck_section_1_top_mx_openable_cherry
    planck_section_1_all_mx_openable_cherry
    planck_section_1_plate_mx_openable_cherry
    ");
}

#[test]
fn test_exploded_with_custom_switch() {
    let config = resolve(
        r#"
        switch_type = "alps"
        stabilizer_type = "costar"
        cable_hole = true
        "#,
    );

    insta::assert_snapshot!(stems(&config, BuildMode::Exploded, 3, 2, true), @r"
    planck_exploded_top_alps_costar
    planck_exploded_plate_alps_costar
    planck_exploded_bottom_alps_costar
    planck_cable_holder_main
    planck_cable_holder_clamp
    planck_cable_holder_all
    ");
}

#[test]
fn test_listing_is_stable_across_runs() {
    let config = resolve("cable_hole = true");

    let first = stems(&config, BuildMode::AllSections, 4, 3, true);
    let second = stems(&config, BuildMode::AllSections, 4, 3, true);

    assert_eq!(first, second);
}
