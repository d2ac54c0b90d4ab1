use googletest::prelude::*;
use test_casing::{TestCases, cases, test_casing};

use super::*;

#[gtest]
fn test_builtin_templates() -> anyhow::Result<()> {
    let templates = builtin()?;

    let names: Vec<&str> = templates.iter().map(|tmpl| tmpl.name.as_str()).collect();
    expect_that!(names, elements_are![eq(&"colab-centos"), eq(&"colab-multi"), eq(&"colab-ubuntu")]);

    let ubuntu = templates.get(DEFAULT_TEMPLATE)?;
    expect_eq!(ubuntu.default_mount, "/data");
    expect_eq!(ubuntu.node_id, "colab");
    expect_that!(ubuntu.default_image, ends_with("UBUNTU20-64-STD"));
    expect_that!(ubuntu.images, len(eq(2)));

    let centos = templates.get("colab-centos")?;
    expect_eq!(centos.default_mount, "/mydata");
    expect_that!(centos.default_image, ends_with("CENTOS8S-64-STD"));

    Ok(())
}

#[gtest]
fn test_builtin_images_are_all_known() -> anyhow::Result<()> {
    let templates = builtin()?;
    for tmpl in templates.iter() {
        for image in &tmpl.images {
            expect_that!(
                crate::image::OsImage::from_urn(&image.urn),
                some(anything()),
                "image {} in template {}",
                image.urn,
                tmpl.name
            );
        }
    }
    Ok(())
}

#[gtest]
fn test_get_unknown() -> anyhow::Result<()> {
    let templates = builtin()?;
    expect_that!(
        templates.get("no-such-template"),
        err(displays_as(contains_substring("no-such-template")))
    );
    Ok(())
}

#[gtest]
fn test_minimal_template_defaults() -> anyhow::Result<()> {
    let templates = load_str(
        r#"
templates:
  minimal:
    images:
      - urn: urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD
        label: Ubuntu 22.04
"#,
    )?;
    let tmpl = templates.get("minimal")?;
    expect_eq!(tmpl.node_id, "node");
    expect_eq!(tmpl.default_mount, "/mydata");
    expect_eq!(
        tmpl.default_image,
        "urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD"
    );
    expect_that!(tmpl.hardware_types, is_empty());
    Ok(())
}

#[gtest]
fn test_load_from_reader() -> anyhow::Result<()> {
    let templates = load(BUILTIN_YAML.as_bytes())?;
    expect_that!(templates.get("colab-multi")?.images, len(eq(3)));
    Ok(())
}

const INVALID_CASES: TestCases<(&'static str, &'static str)> = cases! {
    [
        (
            r#"
templates:
  bad:
    images: []
"#,
            "images must not be empty",
        ),
        (
            r#"
templates:
  bad:
    default_image: urn:publicid:IDN+emulab.net+image+emulab-ops//CENTOS8S-64-STD
    images:
      - urn: urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD
        label: Ubuntu 22.04
"#,
            "is not one of the listed images",
        ),
        (
            r#"
templates:
  bad:
    images:
      - urn: ubuntu
        label: Ubuntu
"#,
            "is not a disk image URN",
        ),
        (
            r#"
templates:
  bad:
    node_id: -colab
    images:
      - urn: urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD
        label: Ubuntu 22.04
"#,
            "node_id",
        ),
        (
            r#"
templates:
  bad:
    default_mount: data
    images:
      - urn: urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD
        label: Ubuntu 22.04
"#,
            "default_mount",
        ),
    ]
};

#[test]
fn test_invalid_cases_len() {
    assert_eq!(5, INVALID_CASES.into_iter().count());
}

#[test_casing(5, INVALID_CASES)]
#[gtest]
fn test_invalid_template(input: &'static str, reason: &'static str) {
    expect_that!(
        load_str(input),
        err(all![
            matches_pattern!(TemplateError::Invalid {
                name: eq("bad"),
                reason: anything(),
            }),
            displays_as(contains_substring(reason)),
        ])
    );
}

#[gtest]
fn test_malformed_yaml() {
    expect_that!(
        load_str("templates: [not, a, map]"),
        err(matches_pattern!(TemplateError::Parse(anything())))
    );
}
