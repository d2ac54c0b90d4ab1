//! The resource request built from validated parameters.


use crate::{
    args::ProfileParams,
    template::ProfileTemplate,
    tour::Tour,
    validate::{self, ParameterErrors},
};

/// Placement policy of every block store requested by a profile.
pub const PLACEMENT_ANY: &str = "any";

/// Size of an ephemeral block store.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockstoreSize {
    /// All space available on the node. Requested as a size of zero.
    AllAvailable,
    Gigabytes(i64),
}

impl std::fmt::Display for BlockstoreSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockstoreSize::AllAvailable => f.write_str("0GB"),
            BlockstoreSize::Gigabytes(size) => write!(f, "{size}GB"),
        }
    }
}

/// Ephemeral storage attached to a node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Blockstore {
    pub name: String,
    pub mount_point: String,
    pub size: BlockstoreSize,
    pub placement: &'static str,
}

/// The single bare metal node of a request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeDescriptor {
    pub client_id: String,
    pub disk_image: String,
    pub hardware_type: Option<String>,
    pub blockstore: Option<Blockstore>,
}

/// A complete request for submission to the provisioning service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub node: NodeDescriptor,
    pub tour: Option<Tour>,
}

/// Validates `profile` and builds the node it describes. Nothing is built if validation fails.
pub fn build_node(
    tmpl: &ProfileTemplate,
    profile: &ProfileParams,
) -> Result<NodeDescriptor, ParameterErrors> {
    validate::validate(profile)?;

    let hardware_type = if profile.phystype.is_empty() {
        None
    } else {
        Some(profile.phystype.clone())
    };

    let blockstore = if profile.temp_fs_size > 0 || profile.temp_fs_max {
        let size = if profile.temp_fs_max {
            BlockstoreSize::AllAvailable
        } else {
            BlockstoreSize::Gigabytes(profile.temp_fs_size)
        };
        Some(Blockstore {
            name: format!("{}-bs", tmpl.node_id),
            mount_point: profile.temp_fs_mount.clone(),
            size,
            placement: PLACEMENT_ANY,
        })
    } else {
        None
    };

    Ok(NodeDescriptor {
        client_id: tmpl.node_id.clone(),
        disk_image: profile.os_image.clone(),
        hardware_type,
        blockstore,
    })
}

/// Builds the full request, with the tour for the selected image if `with_tour` is set.
pub fn build_request(
    tmpl: &ProfileTemplate,
    profile: &ProfileParams,
    with_tour: bool,
) -> Result<Request, ParameterErrors> {
    let node = build_node(tmpl, profile)?;
    let tour = with_tour.then(|| Tour::for_image_urn(&node.disk_image));
    log::info!(
        "built request for node {:?} with image {}",
        node.client_id,
        node.disk_image
    );
    Ok(Request { node, tour })
}
