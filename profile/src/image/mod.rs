//! Disk images that profiles know how to describe.

#[cfg(test)]
mod tests;

use strum::IntoEnumIterator;

/// Prefix shared by the standard images published by Emulab operations.
pub const EMULAB_OPS_IMAGE_PREFIX: &str = "urn:publicid:IDN+emulab.net+image+emulab-ops//";

/// A standard OS image with known post-boot instructions.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum OsImage {
    #[strum(to_string = "Ubuntu 20.04")]
    Ubuntu20,
    #[strum(to_string = "Ubuntu 22.04")]
    Ubuntu22,
    #[strum(to_string = "CentOS 8 Stream")]
    Centos8,
}

impl OsImage {
    /// Image name following the project component of the URN.
    pub fn suffix(self) -> &'static str {
        use OsImage::*;
        match self {
            Ubuntu20 => "UBUNTU20-64-STD",
            Ubuntu22 => "UBUNTU22-64-STD",
            Centos8 => "CENTOS8S-64-STD",
        }
    }

    /// Full disk image URN.
    pub fn urn(self) -> String {
        format!("{}{}", EMULAB_OPS_IMAGE_PREFIX, self.suffix())
    }

    /// Identifies the image from the suffix of a disk image URN. Returns `None` for images that are
    /// not one of the known [OsImage] values.
    pub fn from_urn(urn: &str) -> Option<Self> {
        Self::iter().find(|image| urn.ends_with(image.suffix()))
    }
}
