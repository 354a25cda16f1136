#![recursion_limit = "256"]

use pretty_assertions::assert_eq;
use render_type::{render_declaration, Declaration, ProjectIndex, RenderOptions, SummaryText};
use serde_json::{json, Value};

fn project() -> Declaration {
    render_type::path_de::from_value_with_path(json!({
        "id": 0, "name": "chrome-types", "kind": 1,
        "children": [{ "id": 1, "name": "chrome", "kind": 4, "children": [
            { "id": 2, "name": "events", "kind": 4, "children": [
                { "id": 3, "name": "Event", "kind": 256, "typeParameters": [{ "id": 4, "name": "H" }],
                  "children": [] }
            ] },
            { "id": 10, "name": "tabs", "kind": 4, "children": [
                { "id": 11, "name": "Tab", "kind": 256, "children": [
                    { "id": 12, "name": "id", "kind": 1024, "flags": { "isOptional": true },
                      "comment": { "summary": [{ "kind": "text", "text": "The ID of the tab." }] },
                      "type": { "type": "intrinsic", "name": "number" } },
                    { "id": 13, "name": "status", "kind": 1024,
                      "type": { "type": "reference", "name": "TabStatus", "target": 14 } }
                ] },
                { "id": 14, "name": "TabStatus", "kind": 2097152,
                  "type": { "type": "union", "types": [
                      { "type": "literal", "value": "loading" },
                      { "type": "literal", "value": "complete" }
                  ] } },
                { "id": 15, "name": "get", "kind": 64, "signatures": [
                    { "name": "get", "kind": 4096,
                      "comment": { "summary": [{ "kind": "text", "text": "Retrieves a tab." }] },
                      "parameters": [{ "name": "tabId", "type": { "type": "intrinsic", "name": "number" } }],
                      "type": { "type": "reference", "name": "Promise",
                                "target": { "sourceFileName": "lib.es5.d.ts", "qualifiedName": "Promise" },
                                "typeArguments": [{ "type": "reference", "name": "Tab", "target": 11 }] } },
                    { "name": "get", "kind": 4096,
                      "parameters": [
                          { "name": "tabId", "type": { "type": "intrinsic", "name": "number" } },
                          { "name": "callback", "type": { "type": "reflection", "declaration": {
                              "id": 16, "name": "__type", "kind": 65536, "signatures": [{
                                  "name": "__type", "kind": 4096,
                                  "parameters": [{ "name": "tab", "type": { "type": "reference", "name": "Tab", "target": 11 } }],
                                  "type": { "type": "intrinsic", "name": "void" }
                              }]
                          } } }
                      ],
                      "type": { "type": "intrinsic", "name": "void" } }
                ] },
                { "id": 17, "name": "onRemoved", "kind": 32,
                  "type": { "type": "reference", "name": "Event", "target": 3, "typeArguments": [
                      { "type": "reflection", "declaration": {
                          "id": 18, "name": "__type", "kind": 65536, "signatures": [{
                              "name": "__type", "kind": 4096,
                              "parameters": [{ "name": "tabId", "type": { "type": "intrinsic", "name": "number" } }],
                              "type": { "type": "intrinsic", "name": "boolean" }
                          }]
                      } }
                  ] } }
            ] }
        ] }]
    })).unwrap()
}

fn render_all() -> Vec<(String, Value)> {
    let project = project();
    let options = RenderOptions { link_base: "/docs".into(), ..RenderOptions::default() };
    let index = ProjectIndex::new(&project, options);
    index
        .documented_declarations()
        .iter()
        .map(|(name, decl)| {
            let rt = render_declaration(decl, &index, &SummaryText).unwrap();
            (name.clone(), serde_json::to_value(rt).unwrap())
        })
        .collect()
}

#[test]
fn renders_every_documented_declaration_in_order() {
    let names: Vec<String> = render_all().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "chrome.events.Event",
            "chrome.tabs.Tab",
            "chrome.tabs.TabStatus",
            "chrome.tabs.get",
            "chrome.tabs.onRemoved",
        ]
    );
}

#[test]
fn interface_with_linked_member() {
    let rendered = render_all();
    assert_eq!(
        rendered[1].1,
        json!({
            "type": "type",
            "properties": [
                { "type": "primitive", "primitiveType": "number", "name": "id",
                  "comment": "The ID of the tab.", "optional": true },
                { "type": "reference", "referenceType": "TabStatus",
                  "referenceLink": "/docs/tabs/#type-TabStatus", "name": "status" }
            ]
        })
    );
}

#[test]
fn literal_union_alias_is_enum() {
    let rendered = render_all();
    assert_eq!(
        rendered[2].1,
        json!({
            "type": "union",
            "options": [
                { "type": "primitive", "literalValue": "\"loading\"" },
                { "type": "primitive", "literalValue": "\"complete\"" }
            ],
            "isEnum": true
        })
    );
}

#[test]
fn overloaded_function_takes_the_longest_signature() {
    let rendered = render_all();
    assert_eq!(
        rendered[3].1,
        json!({
            "type": "function",
            "parameters": [
                { "type": "primitive", "primitiveType": "number", "name": "tabId" },
                { "type": "function", "name": "callback", "optional": true, "parameters": [
                    { "type": "reference", "referenceType": "Tab",
                      "referenceLink": "/docs/tabs/#type-Tab", "name": "tab" }
                ] }
            ]
        })
    );
}

#[test]
fn event_listener_across_namespaces() {
    let rendered = render_all();
    assert_eq!(
        rendered[4].1,
        json!({
            "type": "reference",
            "referenceType": "events.Event",
            "referenceLink": "/docs/events/#type-Event",
            "referenceTemplates": [{
                "type": "function",
                "name": "listener",
                "parameters": [{ "type": "primitive", "primitiveType": "number", "name": "tabId" }]
            }]
        })
    );
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_all(), render_all());
}
