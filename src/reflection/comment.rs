use serde::Deserialize;

use super::Declaration;

/// Raw documentation comment attached to a reflection.
///
/// Newer front-ends emit `summary` parts plus block tags; older ones emit
/// `shortText`/`text`/`returns`. Both are accepted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub summary: Vec<CommentPart>,
    #[serde(default)]
    pub block_tags: Vec<CommentTag>,
    #[serde(default)]
    pub short_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub returns: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CommentPart {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CommentTag {
    pub tag: String,
    #[serde(default)]
    pub content: Vec<CommentPart>,
}

impl Comment {
    /// The dedicated `@returns` section, lifted out as a comment of its own.
    pub fn returns(&self) -> Option<Comment> {
        if let Some(tag) = self.block_tags.iter().find(|t| t.tag == "@returns") {
            return Some(Comment {
                summary: tag.content.clone(),
                ..Comment::default()
            });
        }
        self.returns.as_ref().map(|text| Comment {
            text: Some(text.clone()),
            ..Comment::default()
        })
    }
}

// ---------------------------- Extraction ---------------------------------- //

/// Turns a raw comment into display text.
///
/// `owner` is the declaration being rendered; implementations may use it to
/// resolve inline links relative to the page the text ends up on.
pub trait CommentExtractor {
    fn extract(&self, comment: Option<&Comment>, owner: &Declaration) -> Option<String>;
}

/// Plain-text extraction: summary parts joined verbatim, legacy fields
/// separated by a blank line. Whitespace-only comments count as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryText;

impl CommentExtractor for SummaryText {
    fn extract(&self, comment: Option<&Comment>, _owner: &Declaration) -> Option<String> {
        let comment = comment?;
        let mut out = String::new();
        if !comment.summary.is_empty() {
            for part in &comment.summary {
                out.push_str(&part.text);
            }
        } else {
            let legacy = [comment.short_text.as_deref(), comment.text.as_deref()];
            for text in legacy.into_iter().flatten() {
                let text = text.trim();
                if text.is_empty() { continue; }
                if !out.is_empty() { out.push_str("\n\n"); }
                out.push_str(text);
            }
        }
        let out = out.trim();
        if out.is_empty() { None } else { Some(out.to_string()) }
    }
}
