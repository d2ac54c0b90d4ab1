use testutils::DefaultForTest;

use crate::{
    args::ProfileParams,
    image::OsImage,
    template::{ImageChoice, ProfileTemplate},
};

impl DefaultForTest for ProfileTemplate {
    fn default_for_test() -> Self {
        Self {
            name: "test-template".into(),
            summary: "Template for tests.".into(),
            node_id: "colab".into(),
            images: [OsImage::Ubuntu20, OsImage::Ubuntu22]
                .into_iter()
                .map(|image| ImageChoice {
                    urn: image.urn(),
                    label: image.to_string(),
                })
                .collect(),
            default_image: OsImage::Ubuntu20.urn(),
            default_mount: "/data".into(),
            hardware_types: vec!["c240g5".into(), "c4130".into(), "r7525".into()],
        }
    }
}

impl DefaultForTest for ProfileParams {
    fn default_for_test() -> Self {
        Self {
            os_image: OsImage::Ubuntu20.urn(),
            phystype: String::new(),
            temp_fs_size: 0,
            temp_fs_max: true,
            temp_fs_mount: "/data".into(),
        }
    }
}
