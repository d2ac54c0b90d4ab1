//! Serialisation of a [Request] as a GENI v3 request RSpec.


use std::io::Write;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    request::{NodeDescriptor, Request},
    tour::Tour,
};

const RSPEC_NS: &str = "http://www.geni.net/resources/rspec/3";
const EMULAB_NS: &str = "http://www.protogeni.net/resources/rspec/ext/emulab/1";
const TOUR_NS: &str = "http://www.protogeni.net/resources/rspec/ext/apt-tour/1";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://www.geni.net/resources/rspec/3 http://www.geni.net/resources/rspec/3/request.xsd";

/// Sliver type of a bare metal node.
const RAW_PC: &str = "raw-pc";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("writing RSpec: {0}")]
    Io(#[from] std::io::Error),
    #[error("RSpec is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writes `request` as an indented request RSpec document to `out`.
pub fn write_request<W: Write>(request: &Request, out: W) -> Result<(), RenderError> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("rspec").with_attributes([
        ("xmlns", RSPEC_NS),
        ("xmlns:emulab", EMULAB_NS),
        ("xmlns:xsi", XSI_NS),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
        ("type", "request"),
    ])))?;

    if let Some(tour) = &request.tour {
        write_tour(&mut writer, tour)?;
    }
    write_node(&mut writer, &request.node)?;

    writer.write_event(Event::End(BytesEnd::new("rspec")))?;
    writer.into_inner().write_all(b"\n")?;
    Ok(())
}

/// Renders `request` to a string.
pub fn to_string(request: &Request) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    write_request(request, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_tour<W: Write>(writer: &mut Writer<W>, tour: &Tour) -> Result<(), RenderError> {
    writer.write_event(Event::Start(
        BytesStart::new("rspec_tour").with_attributes([("xmlns", TOUR_NS)]),
    ))?;
    write_markdown(writer, "description", tour.description)?;
    if !tour.instructions.is_empty() {
        write_markdown(writer, "instructions", tour.instructions)?;
    }
    writer.write_event(Event::End(BytesEnd::new("rspec_tour")))?;
    Ok(())
}

fn write_markdown<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    text: &str,
) -> Result<(), RenderError> {
    writer.write_event(Event::Start(
        BytesStart::new(element).with_attributes([("type", "markdown")]),
    ))?;
    // Only markup characters need escaping in text content; quotes are left readable.
    writer.write_event(Event::Text(BytesText::from_escaped(
        quick_xml::escape::partial_escape(text),
    )))?;
    writer.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &NodeDescriptor) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("node").with_attributes([
        ("client_id", node.client_id.as_str()),
        ("exclusive", "true"),
    ])))?;

    writer.write_event(Event::Start(
        BytesStart::new("sliver_type").with_attributes([("name", RAW_PC)]),
    ))?;
    writer.write_event(Event::Empty(
        BytesStart::new("disk_image").with_attributes([("name", node.disk_image.as_str())]),
    ))?;
    writer.write_event(Event::End(BytesEnd::new("sliver_type")))?;

    if let Some(hardware_type) = &node.hardware_type {
        writer.write_event(Event::Empty(
            BytesStart::new("hardware_type").with_attributes([("name", hardware_type.as_str())]),
        ))?;
    }

    if let Some(bs) = &node.blockstore {
        let size = bs.size.to_string();
        writer.write_event(Event::Empty(
            BytesStart::new("emulab:blockstore").with_attributes([
                ("name", bs.name.as_str()),
                ("mountpoint", bs.mount_point.as_str()),
                ("class", "local"),
                ("size", size.as_str()),
                ("placement", bs.placement),
            ]),
        ))?;
    }

    writer.write_event(Event::End(BytesEnd::new("node")))?;
    Ok(())
}
