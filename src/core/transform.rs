//! Import path rewriting
//!
//! Component sources import each other through `~/registry/ui/<name>` and the
//! class helper through `~/registry/lib/utils`. On install both are rewritten
//! to the aliases configured in `uikit.json`.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::core::config::Aliases;

/// Import prefix for sibling components in bundled sources
pub const REGISTRY_UI_PREFIX: &str = "~/registry/ui/";

/// Import path of the class helper in bundled sources
pub const REGISTRY_UTILS_PATH: &str = "~/registry/lib/utils";

fn ui_import_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?P<pre>\b(?:from|import)\s*\(?\s*["'])~/registry/ui/"#)
            .expect("Invalid ui import pattern")
    })
}

fn utils_import_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?P<pre>\b(?:from|import)\s*\(?\s*["'])~/registry/lib/utils(?P<post>["'])"#)
            .expect("Invalid utils import pattern")
    })
}

/// Rewrite registry imports in `source` to the project's aliases
///
/// Only quoted specifiers after `from`/`import` are touched, so the same
/// text in comments or string literals elsewhere is left alone.
pub fn rewrite_imports<'a>(source: &'a str, aliases: &Aliases) -> Cow<'a, str> {
    let components = aliases.components.trim_end_matches('/');
    let utils = aliases.utils.trim_end_matches('/');

    let step = ui_import_regex().replace_all(source, |caps: &Captures| {
        format!("{}{components}/", &caps["pre"])
    });

    match step {
        Cow::Borrowed(text) => utils_import_regex().replace_all(text, |caps: &Captures| {
            format!("{}{utils}{}", &caps["pre"], &caps["post"])
        }),
        Cow::Owned(text) => {
            let rewritten = utils_import_regex().replace_all(&text, |caps: &Captures| {
                format!("{}{utils}{}", &caps["pre"], &caps["post"])
            });
            Cow::Owned(rewritten.into_owned())
        }
    }
}
