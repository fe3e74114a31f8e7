//! DOM node construction and serialization
//!
//! Panels are emitted as a sequence of top-level elements. Each element is built as a
//! small `markup5ever_rcdom` tree and serialized on its own, so text and attribute
//! values are escaped by html5ever rather than by hand.

use crate::error::RenderError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Create an HTML element with attributes
pub(crate) fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub(crate) fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

pub(crate) fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Serialize one element, including itself, to a markup string.
pub(crate) fn to_markup(node: &Handle) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| RenderError::Serialize(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| RenderError::Serialize(format!("UTF-8 conversion failed: {e}")))
}

/// `<div class="spacer"></div>` placed before every record block.
pub(crate) fn spacer() -> Handle {
    create_element("div", vec![("class", "spacer")])
}

/// Indented line container, `level` 1 to 3.
pub(crate) fn line(level: usize, extra_class: Option<&str>) -> Handle {
    let class = match extra_class {
        Some(extra) => format!("line l{level} {extra}"),
        None => format!("line l{level}"),
    };
    create_element("div", vec![("class", &class)])
}

/// `-` button copying the label next to it.
pub(crate) fn copy_line_button() -> Handle {
    let button = create_element("button", vec![("class", "list-btn"), ("data-action", "copy-line")]);
    append(&button, create_text("-"));
    button
}

/// `:` button copying everything after it on the line.
pub(crate) fn copy_value_button() -> Handle {
    let button = create_element("button", vec![("data-action", "copy-value")]);
    append(&button, create_text(":"));
    button
}

/// `:` button copying the multi-line block below it.
pub(crate) fn copy_abstract_button() -> Handle {
    let button = create_element("button", vec![("data-action", "copy-abstract")]);
    append(&button, create_text(":"));
    button
}

/// Button copying `items_json` (a JSON array of strings) joined by `separator`.
pub(crate) fn copy_joined_button(separator: &str, items_json: &str) -> Handle {
    let button = create_element(
        "button",
        vec![
            ("class", "copy-all-btn"),
            ("data-action", "copy-joined"),
            ("data-sep", separator),
            ("data-items", items_json),
        ],
    );
    append(&button, create_text(separator));
    button
}

/// Link scrolling `panel` to the element `target` and highlighting it.
pub(crate) fn goto_link(panel: &str, target: &str, text: &str) -> Handle {
    let anchor = create_element(
        "a",
        vec![
            ("data-action", "goto"),
            ("data-panel", panel),
            ("data-target", target),
        ],
    );
    append(&anchor, create_text(text));
    anchor
}

/// `<span class="...">text</span>`
pub(crate) fn span(class: &str, text: &str) -> Handle {
    let span = create_element("span", vec![("class", class)]);
    append(&span, create_text(text));
    span
}

/// `label<button>:</button>value` on an indented line.
pub(crate) fn label_value_line(level: usize, label: &str, value: &str) -> Handle {
    let div = line(level, None);
    append(&div, create_text(label));
    append(&div, copy_value_button());
    append(&div, create_text(value));
    div
}

/// A line holding only a label.
pub(crate) fn label_line(level: usize, label: &str) -> Handle {
    let div = line(level, None);
    append(&div, create_text(label));
    div
}

/// Record header: copy button plus the title span.
pub(crate) fn record_header(class: &str, id: &str, title_class: &str, title: &str) -> Handle {
    let div = create_element("div", vec![("class", class), ("id", id)]);
    append(&div, copy_line_button());
    append(&div, span(title_class, title));
    div
}
