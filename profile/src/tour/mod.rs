//! Post-allocation tour text shown to the experimenter.

use crate::image::OsImage;

const DESCRIPTION: &str = include_str!("instructions/description.md");
const UBUNTU20_INSTRUCTIONS: &str = include_str!("instructions/ubuntu20.md");
const UBUNTU22_INSTRUCTIONS: &str = include_str!("instructions/ubuntu22.md");
const CENTOS8_INSTRUCTIONS: &str = include_str!("instructions/centos8.md");

/// Description and markdown instructions of a profile.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tour {
    pub description: &'static str,
    /// Empty when no instructions are known for the image.
    pub instructions: &'static str,
}

impl Tour {
    pub fn for_image(image: OsImage) -> Self {
        use OsImage::*;
        let instructions = match image {
            Ubuntu20 => UBUNTU20_INSTRUCTIONS,
            Ubuntu22 => UBUNTU22_INSTRUCTIONS,
            Centos8 => CENTOS8_INSTRUCTIONS,
        };
        Self {
            description: DESCRIPTION,
            instructions,
        }
    }

    /// Selects the tour by the disk image URN. Images that are not a known [OsImage] get the
    /// common description and no instructions.
    pub fn for_image_urn(urn: &str) -> Self {
        match OsImage::from_urn(urn) {
            Some(image) => Self::for_image(image),
            None => {
                log::debug!("no instructions known for image {urn:?}");
                Self {
                    description: DESCRIPTION,
                    instructions: "",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn test_ubuntu20_instructions_use_apt() {
        let tour = Tour::for_image_urn(&OsImage::Ubuntu20.urn());
        expect_that!(tour.instructions, contains_substring("sudo apt -y install"));
        expect_that!(tour.instructions, contains_substring("jupyter_http_over_ws"));
        expect_that!(tour.description, contains_substring("Google Colab"));
    }

    #[gtest]
    fn test_centos8_instructions_use_dnf() {
        let tour = Tour::for_image(OsImage::Centos8);
        expect_that!(tour.instructions, contains_substring("sudo dnf -y install"));
        expect_that!(tour.instructions, not(contains_substring("apt")));
    }

    #[gtest]
    fn test_http_over_ws_runs_on_classic_notebook() {
        for image in [OsImage::Ubuntu22, OsImage::Centos8] {
            let tour = Tour::for_image(image);
            expect_that!(tour.instructions, contains_substring("'notebook<7'"));
            expect_that!(
                tour.instructions,
                contains_substring("jupyter serverextension enable --py jupyter_http_over_ws")
            );
        }
    }

    #[gtest]
    fn test_each_image_has_distinct_instructions() {
        let ubuntu20 = Tour::for_image(OsImage::Ubuntu20);
        let ubuntu22 = Tour::for_image(OsImage::Ubuntu22);
        let centos8 = Tour::for_image(OsImage::Centos8);
        expect_ne!(ubuntu20.instructions, ubuntu22.instructions);
        expect_ne!(ubuntu20.instructions, centos8.instructions);
        expect_ne!(ubuntu22.instructions, centos8.instructions);
    }

    #[gtest]
    fn test_selection_is_stable() {
        let urn = OsImage::Ubuntu22.urn();
        expect_eq!(Tour::for_image_urn(&urn), Tour::for_image_urn(&urn));
    }

    #[gtest]
    fn test_unknown_image_has_empty_instructions() {
        let tour = Tour::for_image_urn("urn:publicid:IDN+emulab.net+image+emulab-ops//FBSD132-64-STD");
        expect_true!(tour.instructions.is_empty());
        expect_true!(tour.description == DESCRIPTION);
    }
}
