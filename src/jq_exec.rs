//! jq pre-processing of input documents (via jaq), e.g. to pull one namespace
//! out of a large project before rendering.
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::LoadError;

/// Run `filter_src` over `input`; every output of the filter becomes a document.
pub fn run_filter(filter_src: &str, input: Value) -> Result<Vec<Value>, LoadError> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader.load(&arena, program).map_err(parse_errors)?;
    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let outputs = filter.run((Ctx::new([], &inputs), Val::from(input)));

    let mut documents = Vec::new();
    for output in outputs {
        let output = output.map_err(|e| LoadError::Filter(format!("{e:?}")))?;
        // Val prints as JSON text.
        let document = serde_json::from_str(&output.to_string())
            .map_err(|e| LoadError::Filter(format!("filter produced invalid JSON: {e}")))?;
        documents.push(document);
    }
    log::debug!("jq filter `{filter_src}` produced {} document(s)", documents.len());
    Ok(documents)
}

fn parse_errors(errs: Vec<(load::File<&str, ()>, load::Error<&str>)>) -> LoadError {
    let lines: Vec<String> = errs
        .into_iter()
        .map(|(file, err)| format!("parse error: {err:?} in `{}`", file.code))
        .collect();
    LoadError::Filter(lines.join("\n"))
}

fn undefined_errors(errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>) -> LoadError {
    let lines: Vec<String> = errs
        .into_iter()
        .flat_map(|(file, list)| {
            list.into_iter()
                .map(move |(name, undef)| format!("undefined `{name}`: {undef:?} in `{}`", file.code))
        })
        .collect();
    LoadError::Filter(lines.join("\n"))
}
