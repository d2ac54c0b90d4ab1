//! Generates single-node CloudLab/GENI request RSpecs for Colab-connected Jupyter servers.
//!
//! The flow for one invocation is: declare parameters from a [template::ProfileTemplate], bind raw
//! values into [args::ProfileParams], [validate], build a [request::Request], then serialize it
//! with [rspec].

pub mod args;
pub mod image;
pub mod params;
pub mod request;
pub mod rspec;
pub mod template;
#[cfg(test)]
mod testutil;
pub mod tour;
pub mod validate;
