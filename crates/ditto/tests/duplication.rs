// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ditto contributors

//! Public-API integration tests: a feed-like document graph duplicated
//! through the exported surface only.

use ditto::{duplicate, properties, Duplicator, MapValue, Value};

#[derive(Debug, Default)]
struct Document {
    title: Option<String>,
    published: Option<bool>,
    revision: Option<i64>,
    body: Option<Value>,
    attributes: Option<Value>,
}

properties! {
    Document {
        "title" => title: String,
        "published" => published: bool,
        "revision" => revision: i64,
        "body" => body: Value,
        "attributes" => attributes: Value,
    }
}

#[derive(Debug, Default)]
struct Section {
    heading: Option<String>,
    paragraphs: Option<Value>,
}

properties! {
    Section {
        "heading" => heading: String,
        "paragraphs" => paragraphs: Value,
    }
}

fn sample_document() -> Document {
    let intro = Section {
        heading: Some("Intro".to_string()),
        paragraphs: Some(Value::from(vec!["first", "second"])),
    };
    let mut attributes = MapValue::new();
    attributes.insert(Value::from("lang"), Value::from("en"));
    attributes.insert(Value::from("tags"), Value::from(vec!["a", "b"]));

    Document {
        title: Some("Field report".to_string()),
        published: Some(true),
        revision: Some(12),
        body: Some(Value::Composite(Box::new(intro))),
        attributes: Some(Value::Map(attributes)),
    }
}

#[test]
fn duplicates_whole_document_graph() {
    let source = Value::Composite(Box::new(sample_document()));
    let copy = duplicate(&source).expect("duplicate document");
    assert_eq!(copy, source);
}

#[test]
fn copy_survives_source_mutation() {
    let mut source = Value::Composite(Box::new(sample_document()));
    let copy = duplicate(&source).expect("duplicate document");

    let doc = source
        .as_composite_mut()
        .and_then(|c| c.as_any_mut().downcast_mut::<Document>())
        .expect("source document");
    doc.title = Some("Rewritten".to_string());
    doc.attributes
        .as_mut()
        .and_then(|v| v.as_map_mut())
        .expect("attributes")
        .insert(Value::from("lang"), Value::from("de"));

    let copied = copy
        .as_composite()
        .and_then(|c| c.as_any().downcast_ref::<Document>())
        .expect("copied document");
    assert_eq!(copied.title.as_deref(), Some("Field report"));
    let lang = copied
        .attributes
        .as_ref()
        .and_then(|v| v.as_map())
        .and_then(|m| m.get(&Value::from("lang")))
        .expect("lang attribute");
    assert_eq!(lang, &Value::from("en"));
}

#[test]
fn ignore_set_skips_root_convenience_property() {
    let source = Value::Composite(Box::new(sample_document()));
    let copy = Duplicator::with_ignored(["attributes"])
        .duplicate(&source)
        .expect("duplicate with ignore set");

    let copied = copy
        .as_composite()
        .and_then(|c| c.as_any().downcast_ref::<Document>())
        .expect("copied document");
    assert!(copied.attributes.is_none());
    // Everything else still copied, including the nested section.
    assert_eq!(copied.title.as_deref(), Some("Field report"));
    let heading = copied
        .body
        .as_ref()
        .and_then(|v| v.as_composite())
        .and_then(|c| c.as_any().downcast_ref::<Section>())
        .and_then(|s| s.heading.as_deref());
    assert_eq!(heading, Some("Intro"));
}

#[test]
fn rendering_shows_property_names() {
    let source = Value::Composite(Box::new(sample_document()));
    let rendered = source.to_string();
    assert!(rendered.starts_with("Document {"));
    assert!(rendered.contains("title=\"Field report\""));
    assert!(rendered.contains("revision=12"));
}
