//! `#include` discovery.

use std::sync::LazyLock;

use regex::Regex;

use crate::records::IncludeSet;
use crate::strip::strip_comments_for_includes;

/// `#include "path.h"`, capturing the path without its extension.
static LOCAL_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^\s*#include\s+"\s*(.+)\.[hH]\s*""#).expect("INVARIANT: valid regex"));

/// `#include <path>`, capturing the path between the brackets.
static SYSTEM_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#include\s+<\s*(.+)\s*>").expect("INVARIANT: valid regex"));

/// Find the include directives of a source file.
///
/// Comments are stripped first so commented-out includes are not reported. Local includes are returned without
/// their `.h` extension; system includes keep their angle brackets. Order follows the source, duplicates included.
pub fn find_includes(source: &str) -> IncludeSet {
    let stripped = strip_comments_for_includes(source);

    let local = LOCAL_INCLUDE
        .captures_iter(&stripped)
        .filter_map(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
        .collect();
    let system = SYSTEM_INCLUDE
        .captures_iter(&stripped)
        .filter_map(|c| c.get(1).map(|m| format!("<{}>", m.as_str().trim())))
        .collect();

    IncludeSet { local, system }
}
