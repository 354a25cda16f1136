//! Reference resolution against the loaded project.
//!
//! The front-end has already bound every reference to a reflection id; this
//! module only turns ids into dotted names and, when the target lives on a
//! documented page, into a display name plus hyperlink.
use std::collections::HashMap;

use crate::reflection::{Declaration, ReferenceTarget, ReferenceType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub link: String,
}

pub trait ReferenceResolver {
    fn fully_qualified_name(&self, reference: &ReferenceType) -> String;

    /// Display name and URL, or `None` when the target has no page.
    fn link(&self, owner: &Declaration, reference: &ReferenceType) -> Option<Link>;
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prepended to every generated link.
    pub link_base: String,
    /// Removed from the front of full names before they are displayed.
    pub strip_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { link_base: String::new(), strip_prefix: "chrome.".into() }
    }
}

impl RenderOptions {
    pub fn display_name<'a>(&self, full_name: &'a str) -> &'a str {
        full_name.strip_prefix(self.strip_prefix.as_str()).unwrap_or(full_name)
    }
}

// ------------------------------- Index ------------------------------------ //

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    full_name: String,
    /// Id of the closest enclosing namespace/module.
    container: Option<u32>,
}

/// Id → name table for one project, plus the documented declarations in
/// source order.
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    entries: HashMap<u32, Entry>,
    documented: Vec<(String, Declaration)>,
    options: RenderOptions,
}

impl ProjectIndex {
    pub fn new(project: &Declaration, options: RenderOptions) -> Self {
        let mut index = ProjectIndex { options, ..ProjectIndex::default() };
        for child in &project.children {
            index.visit(child, None, None);
        }
        log::info!(
            "indexed {} reflections, {} documented declarations",
            index.entries.len(),
            index.documented.len()
        );
        index
    }

    fn visit(&mut self, decl: &Declaration, prefix: Option<&str>, container: Option<u32>) {
        let full_name = match prefix {
            Some(p) => format!("{p}.{}", decl.name),
            None => decl.name.clone(),
        };
        self.entries.insert(decl.id, Entry {
            name: decl.name.clone(),
            full_name: full_name.clone(),
            container,
        });
        if decl.kind.is_container() {
            for child in &decl.children {
                if child.kind.is_documented() {
                    self.documented.push((format!("{full_name}.{}", child.name), child.clone()));
                }
                self.visit(child, Some(&full_name), Some(decl.id));
            }
        } else {
            // Members are addressable (for names) but never documented on their own.
            for child in &decl.children {
                self.visit(child, Some(&full_name), container);
            }
        }
    }

    /// Type-bearing declarations owned directly by a namespace or module.
    pub fn documented_declarations(&self) -> &[(String, Declaration)] {
        &self.documented
    }

    pub fn full_name(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(|e| e.full_name.as_str())
    }

    /// Page path for a namespace: its display name with dots as slashes.
    fn page_path(&self, container: u32) -> Option<String> {
        let entry = self.entries.get(&container)?;
        Some(self.options.display_name(&entry.full_name).replace('.', "/"))
    }
}

impl ReferenceResolver for ProjectIndex {
    fn fully_qualified_name(&self, reference: &ReferenceType) -> String {
        if let Some(full) = reference.target_id().and_then(|id| self.full_name(id)) {
            return full.to_string();
        }
        if let Some(ReferenceTarget::Symbol { qualified_name, .. }) = &reference.target {
            return qualified_name.clone();
        }
        reference
            .qualified_name
            .clone()
            .unwrap_or_else(|| reference.name.clone())
    }

    fn link(&self, owner: &Declaration, reference: &ReferenceType) -> Option<Link> {
        let target = self.entries.get(&reference.target_id()?)?;
        let container = target.container?;
        let path = self.page_path(container)?;

        let owner_container = self.entries.get(&owner.id).and_then(|e| e.container);
        let name = if owner_container == Some(container) {
            target.name.clone()
        } else {
            self.options.display_name(&target.full_name).to_string()
        };
        let link = format!("{}/{}/#type-{}", self.options.link_base, path, target.name);
        Some(Link { name, link })
    }
}

// ------------------------------- Tests ------------------------------------ //
