use googletest::prelude::*;
use test_casing::{TestCases, cases, test_casing};

use super::*;

const KNOWN_URN_CASES: TestCases<(&'static str, OsImage)> = cases! {
    [
        (
            "urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU20-64-STD",
            OsImage::Ubuntu20,
        ),
        (
            "urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD",
            OsImage::Ubuntu22,
        ),
        (
            "urn:publicid:IDN+emulab.net+image+emulab-ops//CENTOS8S-64-STD",
            OsImage::Centos8,
        ),
        (
            "urn:publicid:IDN+utah.cloudlab.us+image+emulab-ops//UBUNTU22-64-STD",
            OsImage::Ubuntu22,
        ),
    ]
};

#[test]
fn test_known_urn_cases_len() {
    assert_eq!(4, KNOWN_URN_CASES.into_iter().count());
}

#[test_casing(4, KNOWN_URN_CASES)]
#[gtest]
fn test_from_urn_known(urn: &'static str, expected: OsImage) {
    expect_that!(OsImage::from_urn(urn), some(eq(expected)));
}

#[gtest]
fn test_from_urn_unknown() {
    expect_that!(
        OsImage::from_urn("urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU18-64-STD"),
        none()
    );
    expect_that!(OsImage::from_urn(""), none());
}

#[gtest]
fn test_urn_roundtrips_through_from_urn() {
    for image in OsImage::iter() {
        expect_that!(OsImage::from_urn(&image.urn()), some(eq(image)));
        expect_that!(image.urn(), starts_with(EMULAB_OPS_IMAGE_PREFIX));
    }
}

#[gtest]
fn test_display_label() {
    expect_eq!(OsImage::Ubuntu20.to_string(), "Ubuntu 20.04");
    expect_eq!(OsImage::Centos8.to_string(), "CentOS 8 Stream");
}
