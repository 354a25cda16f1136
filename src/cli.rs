//! Minimal CLI: load project → (render | list)
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;
use rayon::prelude::*;
use regex::Regex;

use crate::error::LoadError;
use crate::reflection::{Declaration, SummaryText};
use crate::render::RenderType;
use crate::resolve::{ProjectIndex, RenderOptions};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// normalize documentation-extractor declarations into renderable type descriptions
#[derive(Parser, Debug)]
#[command(name = "render-type", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render every documented declaration as a RenderType JSON map
    Render(RenderOut),
    /// list documented declarations and their kinds
    List(ListOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to the project node in each document (e.g. /project)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output is a project
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more project documents. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// only declarations whose full name matches this regex
    #[arg(long)]
    filter: Option<Regex>,
}

#[derive(Args, Debug, Clone)]
struct LinkSettings {
    /// prefix for generated documentation links
    #[arg(long, env = "RENDER_TYPE_LINK_BASE", default_value = "")]
    link_base: String,

    /// namespace prefix dropped from displayed names
    #[arg(long, env = "RENDER_TYPE_STRIP_PREFIX", default_value = "chrome.")]
    strip_prefix: String,
}

#[derive(clap::Parser, Debug)]
struct RenderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    link_settings: LinkSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(clap::Parser, Debug)]
struct ListOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Every project found in the inputs, after pointer/jq selection.
    fn load_projects(&self) -> Result<Vec<Declaration>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        let mut projects = Vec::new();
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            log::info!("loading {source_path_str}");
            let source = std::fs::read_to_string(&source_path).map_err(|source| LoadError::Io {
                path: source_path_str.clone(),
                source,
            })?;
            let mut document = serde_json::from_str::<serde_json::Value>(&source)
                .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;
            if let Some(pointer) = self.json_pointer.as_ref() {
                document = document
                    .pointer(pointer)
                    .cloned()
                    .ok_or_else(|| LoadError::Pointer {
                        pointer: pointer.clone(),
                        path: source_path_str.clone(),
                    })?;
            }
            let documents = match self.jq_expr.as_ref() {
                None => vec![document],
                Some(jq_expr) => crate::jq_exec::run_filter(jq_expr, document).with_context(|| {
                    format!("failed to apply jq expression to source file ({source_path_str})")
                })?,
            };
            for document in documents {
                let project = crate::path_de::from_value_with_path::<Declaration>(document)
                    .with_context(|| format!("malformed project in {source_path_str}"))?;
                projects.push(project);
            }
        }
        Ok(projects)
    }

    fn selects(&self, full_name: &str) -> bool {
        self.filter.as_ref().is_none_or(|rx| rx.is_match(full_name))
    }
}

impl LinkSettings {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            link_base: self.link_base.trim_end_matches('/').to_string(),
            strip_prefix: self.strip_prefix.clone(),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Render(target) => {
                let options = target.link_settings.options();
                let mut rendered = IndexMap::<String, RenderType>::new();
                for project in target.input_settings.load_projects()? {
                    let index = ProjectIndex::new(&project, options.clone());
                    merge_rendered(&mut rendered, render_project(&index, &target.input_settings)?);
                }
                let json_src = if target.compact {
                    serde_json::to_string(&rendered)?
                } else {
                    serde_json::to_string_pretty(&rendered)?
                };
                write_output(target.out.as_ref(), &json_src)
            }
            Command::List(target) => {
                for project in target.input_settings.load_projects()? {
                    let index = ProjectIndex::new(&project, RenderOptions::default());
                    for (full_name, decl) in index.documented_declarations() {
                        if !target.input_settings.selects(full_name) { continue; }
                        println!("{:<14} {}", decl.kind.label().dimmed(), full_name.bold());
                    }
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Normalize the selected declarations in parallel, keeping source order.
fn render_project(index: &ProjectIndex, settings: &InputSettings) -> Result<Vec<(String, RenderType)>> {
    index
        .documented_declarations()
        .par_iter()
        .filter(|(full_name, _)| settings.selects(full_name))
        .map(|(full_name, decl)| {
            let rt = crate::normalize::render_declaration(decl, index, &SummaryText)
                .with_context(|| format!("failed to render `{full_name}`"))?;
            Ok::<_, anyhow::Error>((full_name.clone(), rt))
        })
        .collect()
}

/// Later projects win on a shared full name; each collision is logged and
/// returned.
fn merge_rendered(
    rendered: &mut IndexMap<String, RenderType>,
    batch: Vec<(String, RenderType)>,
) -> Vec<String> {
    let mut replaced = Vec::new();
    for (full_name, rt) in batch {
        if rendered.insert(full_name.clone(), rt).is_some() {
            log::warn!("`{full_name}` is declared by more than one input; keeping the last");
            replaced.push(full_name);
        }
    }
    replaced
}

fn write_output(out: Option<&PathBuf>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            println!("{src}");
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, LoadError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let entries = glob::glob(pattern).map_err(|e| LoadError::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            let before = out.len();
            for entry in entries {
                let path = entry.map_err(|e| LoadError::Pattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
                out.push(path);
            }
            if out.len() == before {
                return Err(LoadError::NoMatches(pattern.to_string()));
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
