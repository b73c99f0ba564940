use heck::ToSnakeCase;

// ============================================================================
// Tab-stop layout
// ============================================================================

// Indices are global so tab navigation is the same for every action,
// whichever capabilities it has.
pub const ACTION_TAB_STOP: u32 = 1;
pub const ARGUMENT_TAB_STOP: u32 = 1;
pub const LOCATOR_VALUE_TAB_STOP: u32 = 5;
pub const LOCATOR_KIND_TAB_STOP: u32 = 6;
pub const ATTRIBUTE_TAB_STOP: u32 = 7;
pub const REGEX_TAB_STOP: u32 = 8;

pub const DEFAULT_REGEX: &str = ".*";

// ============================================================================
// Placeholder primitives
// ============================================================================

/// `${N:default}`
pub fn placeholder(index: u32, default: &str) -> String {
    format!("${{{}:{}}}", index, escape_default(default))
}

/// `${N|a,b,c|}`
///
/// An empty alternative list degrades to a plain placeholder whose default
/// is `fallback`, since an empty choice is not valid snippet syntax.
pub fn choice(index: u32, alternatives: &[String], fallback: &str) -> String {
    if alternatives.is_empty() {
        return placeholder(index, fallback);
    }
    let joined = alternatives
        .iter()
        .map(|a| escape_choice(a))
        .collect::<Vec<_>>()
        .join(",");
    format!("${{{}|{}|}}", index, joined)
}

fn escape_default(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_choice(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '}' | '\\' | ',' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Phrases
// ============================================================================

/// Split camel-case boundaries, lowercase, join with spaces.
///
/// `ClickOnElement` → `click on element`, `doubleClick` → `double click`.
pub fn to_phrase(name: &str) -> String {
    name.to_snake_case()
        .split('_')
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Token fragments
// ============================================================================

/// The action name: plain text without aliases, otherwise a choice list with
/// the base phrase first and the aliases sorted after it.
///
/// Aliases are phrased like keys; ones that repeat or equal the base phrase
/// are dropped, and if none remain the name stays plain text.
pub fn action_token(base: &str, aliases: &[String]) -> String {
    if aliases.is_empty() {
        return base.to_string();
    }

    let mut alternatives: Vec<String> = aliases
        .iter()
        .map(|a| to_phrase(a))
        .filter(|a| !a.is_empty() && a != base)
        .collect();
    alternatives.sort();
    alternatives.dedup();
    if alternatives.is_empty() {
        return base.to_string();
    }
    alternatives.insert(0, base.to_string());

    choice(ACTION_TAB_STOP, &alternatives, base)
}

/// Single free-text value.
pub fn argument_token() -> String {
    placeholder(ARGUMENT_TAB_STOP, "value")
}

/// Free-text parameter values behind the flag-list marker, e.g.
/// `:: --${1:parameters values}`.
pub fn arguments_token(opener: &str, introducer: &str) -> String {
    format!(
        "{} {}{}",
        opener,
        introducer,
        placeholder(ARGUMENT_TAB_STOP, "parameters values")
    )
}

/// `<verb> ${5:locator value} by ${6|css,id,xpath|}`
pub fn element_token(verb: &str, locators: &[String]) -> String {
    format!(
        "{} {} by {}",
        verb,
        placeholder(LOCATOR_VALUE_TAB_STOP, "locator value"),
        choice(LOCATOR_KIND_TAB_STOP, &sorted_unique(locators), "locator")
    )
}

/// `from ${7|class,href|}`
pub fn attribute_token(attributes: &[String]) -> String {
    format!(
        "from {}",
        choice(ATTRIBUTE_TAB_STOP, &sorted_unique(attributes), "attribute")
    )
}

/// `with regex ${8:.*}`
pub fn regex_token() -> String {
    format!("with regex {}", placeholder(REGEX_TAB_STOP, DEFAULT_REGEX))
}

fn sorted_unique(names: &[String]) -> Vec<String> {
    let mut sorted = names.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted
}
