//! Graphviz DOT renderer.
//!
//! The document layout is fixed:
//!
//! ```text
//! digraph Ontology {
//! 	node [shape=plaintext];
//!
//! 	"<class>"[label=<<TABLE ...> header row, one row per attribute </TABLE>>];
//! 	"<from>"->"<to>"[label=<<B><relation></B>>];
//! }
//! ```
//!
//! Classes come first, in model order, then links, in model order.

use std::borrow::Cow;
use std::fmt::Write as FmtWrite;
use std::io;

use onto2dot_extractor::{ClassRecord, LinkRecord, OntologyModel};

use crate::error::RenderError;
use crate::escape;
use crate::RenderOptions;

const HEADER: &str = "digraph Ontology {\n\tnode [shape=plaintext];\n\n\t";
const FOOTER: &str = "\n}\n";

/// Renders `model` as a DOT document.
#[must_use]
pub fn render_dot(model: &OntologyModel, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(256 + 512 * model.classes.len() + 64 * model.links.len());
    out.push_str(HEADER);
    for class in &model.classes {
        push_class(&mut out, class, options);
    }
    out.push_str("\n\t");
    for link in &model.links {
        push_link(&mut out, link, options);
    }
    out.push_str(FOOTER);
    out
}

/// Renders `model` and writes the document to `writer`, then flushes it.
///
/// # Errors
///
/// Returns [`RenderError::Write`] if writing or flushing fails.
pub fn write_dot<W: io::Write>(
    model: &OntologyModel,
    options: &RenderOptions,
    mut writer: W,
) -> Result<(), RenderError> {
    writer.write_all(render_dot(model, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn push_class(out: &mut String, class: &ClassRecord, options: &RenderOptions) {
    let _ = write!(
        out,
        "\"{id}\"[label=<<TABLE BORDER='0' CELLBORDER='1' CELLSPACING='0' CELLPADDING='5'>\n\
         \t\t\t<TR>\n\
         \t\t\t\t<TD ALIGN='LEFT' BGCOLOR='#e0e0e0'><FONT POINT-SIZE='12' FACE='monospace'>{header}</FONT><BR ALIGN='LEFT'/></TD>\n\
         \t\t\t</TR>",
        id = node_id(&class.label, options),
        header = cell(&class.label, options),
    );
    for attribute in &class.attributes {
        let _ = write!(
            out,
            "<TR><TD ALIGN='LEFT'><B>{}</B><BR ALIGN='LEFT'/></TD></TR>\n\t\t\t",
            cell(attribute, options)
        );
    }
    out.push_str("\n\t\t</TABLE>>];\n\t");
}

fn push_link(out: &mut String, link: &LinkRecord, options: &RenderOptions) {
    let _ = write!(
        out,
        "\"{}\"->\"{}\"[label=<<B>{}</B>>];\n\t",
        node_id(&link.from, options),
        node_id(&link.to, options),
        cell(&link.label, options),
    );
}

fn node_id<'a>(label: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_labels {
        escape::quoted(label)
    } else {
        Cow::Borrowed(label)
    }
}

fn cell<'a>(label: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_labels {
        escape::html(label)
    } else {
        Cow::Borrowed(label)
    }
}
