//! Placeholder rewriting across a generated project

use crate::config::ProjectName;
use crate::product::Placeholders;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::Path;
use tokio::fs;
use walkdir::{DirEntry, WalkDir};

/// Directories never rewritten, wherever they appear in the tree
const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "dist-electron",
    "release",
    "out",
    ".git",
];

/// File extensions never rewritten
const IGNORED_EXTENSIONS: &[&str] = &["log"];

struct Rule {
    replacement: String,
    token_group: usize,
    suffix_group: Option<usize>,
}

/// Ordered placeholder substitutions compiled into a single pattern
///
/// Alternation order is rule order, and one `replace_all` pass never
/// revisits replaced text.
pub struct RuleSet {
    regex: Regex,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(placeholders: &Placeholders, name: &ProjectName) -> Result<Self> {
        let rule_inputs = [
            (
                placeholders.lower,
                name.as_str().to_string(),
                placeholders.protected_suffix,
            ),
            (placeholders.pascal, name.capitalized(), None),
            (placeholders.phrase, name.as_str().to_string(), None),
        ];

        let mut alternatives = Vec::with_capacity(rule_inputs.len());
        let mut rules = Vec::with_capacity(rule_inputs.len());
        let mut next_group = 1;

        for (token, replacement, suffix) in rule_inputs {
            let mut pattern = format!(r"(\b{}\b)", regex::escape(token));
            let token_group = next_group;
            next_group += 1;

            let suffix_group = suffix.map(|suffix| {
                pattern.push_str(&format!("({})?", regex::escape(suffix)));
                let group = next_group;
                next_group += 1;
                group
            });

            alternatives.push(pattern);
            rules.push(Rule {
                replacement,
                token_group,
                suffix_group,
            });
        }

        let regex = Regex::new(&alternatives.join("|")).context("Invalid placeholder pattern")?;
        Ok(Self { regex, rules })
    }

    /// Replace every placeholder in `text`
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(text, |caps: &Captures| {
            let Some(rule) = self
                .rules
                .iter()
                .find(|rule| caps.get(rule.token_group).is_some())
            else {
                return caps[0].to_string();
            };

            let protected = rule
                .suffix_group
                .is_some_and(|group| caps.get(group).is_some());
            if protected {
                caps[0].to_string()
            } else {
                rule.replacement.clone()
            }
        })
    }
}

/// Outcome of a rewrite pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Text files examined
    pub scanned: usize,
    /// Files whose content changed
    pub rewritten: usize,
    /// Files left alone because they are not UTF-8
    pub skipped: usize,
}

fn is_ignored(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if entry.file_type().is_dir() {
        return entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name));
    }

    entry
        .path()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IGNORED_EXTENSIONS.contains(&ext))
}

/// Apply `rules` to every regular file under `root` outside the ignore list
pub async fn rewrite_tree(root: &Path, rules: &RuleSet) -> Result<RewriteReport> {
    let mut report = RewriteReport::default();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_ignored(e)) {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let Ok(text) = String::from_utf8(bytes) else {
            tracing::trace!(file = %path.display(), "skipping binary file");
            report.skipped += 1;
            continue;
        };
        report.scanned += 1;

        if let Cow::Owned(updated) = rules.apply(&text) {
            if updated != text {
                fs::write(path, updated)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::debug!(file = %path.display(), "placeholders replaced");
                report.rewritten += 1;
            }
        }
    }

    tracing::info!(
        scanned = report.scanned,
        rewritten = report.rewritten,
        skipped = report.skipped,
        "placeholder rewrite finished"
    );
    Ok(report)
}
