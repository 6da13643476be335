//! Every `t!("...")` key used under `src/` must exist in every locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "review-explorer-ui.ftl";

fn message_ids(ftl: &str) -> BTreeSet<String> {
    ftl.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!` invocations, allowing a line break
/// between the parenthesis and the key.
fn referenced_keys(source: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut rest = source;
    while let Some(pos) = rest.find("t!(") {
        rest = &rest[pos + 3..];
        let trimmed = rest.trim_start();
        let Some(body) = trimmed.strip_prefix('"') else {
            continue;
        };
        if let Some(end) = body.find('"') {
            let key = &body[..end];
            if !key.is_empty() && key.chars().all(is_key_char) {
                keys.insert(key.to_string());
            }
        }
    }
    keys
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn referenced_keys_exist_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let mut files = Vec::new();
    rust_sources(&crate_root.join("src"), &mut files);
    let referenced: BTreeSet<String> = files
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|source| referenced_keys(&source))
        .collect();
    assert!(
        referenced.contains("explorer-title"),
        "key scan found nothing; did the source layout change?"
    );

    let mut locales: Vec<PathBuf> = fs::read_dir(crate_root.join("i18n"))
        .expect("i18n directory")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    locales.sort();
    assert!(!locales.is_empty(), "no locale folders under i18n/");

    let mut report = Vec::new();
    for dir in locales {
        let file = dir.join(FTL_FILENAME);
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", file.display()));
        let defined = message_ids(&content);
        let missing: Vec<_> = referenced.difference(&defined).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{}: {}", dir.display(), missing.join(", ")));
        }
    }

    assert!(
        report.is_empty(),
        "translation keys used in code but missing from locales:\n{}",
        report.join("\n")
    );
}

#[test]
fn key_scan_handles_wrapped_invocations() {
    let source = "let a = t!(\"app-name\");\nlet b = t!(\n    \"picker-count\",\n    selected = x\n);\nlet c = t!(dynamic);";
    let keys = referenced_keys(source);
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        ["app-name", "picker-count"]
    );
}
