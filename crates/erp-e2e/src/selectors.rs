// Selectors - Accessible locator strings for `page.locator()`
//
// The bindings expose only `page.locator(selector)`, so the `getBy*` family is
// expressed here as the selector strings Playwright itself generates for them.
//
// Reference:
// - playwright/packages/playwright-core/src/utils/isomorphic/locatorUtils.ts
// - playwright/packages/playwright-core/src/utils/isomorphic/stringUtils.ts

/// `getByRole(role, { name, exact })`
pub fn role(role: &str, name: &str, exact: bool) -> String {
    format!(
        "internal:role={}[name={}]",
        role,
        escape_for_attribute_selector(name, exact)
    )
}

/// `getByRole(role)`
pub fn any_role(role: &str) -> String {
    format!("internal:role={}", role)
}

/// `getByRole(role, { name: /source/flags })`
pub fn role_matching(role: &str, source: &str, ignore_case: bool) -> String {
    format!(
        "internal:role={}[name={}]",
        role,
        escape_regex_for_selector(source, ignore_case)
    )
}

/// `getByTitle(text, { exact })`
pub fn title(text: &str, exact: bool) -> String {
    format!(
        "internal:attr=[title={}]",
        escape_for_attribute_selector(text, exact)
    )
}

/// `getByText(text, { exact })`
pub fn text(text: &str, exact: bool) -> String {
    format!("internal:text={}", escape_for_text_selector(text, exact))
}

/// `getByLabel(text, { exact })`
pub fn label(text: &str, exact: bool) -> String {
    format!("internal:label={}", escape_for_text_selector(text, exact))
}

/// `locator.filter({ hasText })`, also `locator(selector, { hasText })`
pub fn has_text(selector: &str, text: &str) -> String {
    format!(
        "{} >> internal:has-text={}",
        selector,
        escape_for_text_selector(text, false)
    )
}

/// `locator.filter({ hasText })` with a string whose full text must match.
pub fn has_exact_text(selector: &str, text: &str) -> String {
    format!(
        "{} >> internal:has-text={}",
        selector,
        escape_for_text_selector(text, true)
    )
}

/// `locator.filter({ has })`
pub fn has(selector: &str, inner: &str) -> String {
    format!("{} >> internal:has={}", selector, json_string(inner))
}

/// Grid row holding a cell whose normalized text equals `value`.
pub fn row_with_cell(value: &str) -> String {
    has(
        &any_role("row"),
        &format!("xpath=.//td[normalize-space()={}]", xpath_literal(value)),
    )
}

/// `first.or(second)`
pub fn or(first: &str, second: &str) -> String {
    format!("{} >> internal:or={}", first, json_string(second))
}

/// XPath matching a table cell whose normalized text equals `value`.
pub fn exact_cell(value: &str) -> String {
    format!("//td[normalize-space()={}]", xpath_literal(value))
}

fn escape_for_text_selector(text: &str, exact: bool) -> String {
    format!("{}{}", json_string(text), if exact { "s" } else { "i" })
}

fn escape_for_attribute_selector(value: &str, exact: bool) -> String {
    format!(
        "\"{}\"{}",
        value.replace('\\', "\\\\").replace('"', "\\\""),
        if exact { "s" } else { "i" }
    )
}

fn escape_regex_for_selector(source: &str, ignore_case: bool) -> String {
    let mut escaped = String::with_capacity(source.len() + 4);
    let mut backslashes = 0usize;
    for ch in source.chars() {
        if matches!(ch, '"' | '\'' | '`') && backslashes % 2 == 0 {
            escaped.push('\\');
        }
        backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
        escaped.push(ch);
    }
    let escaped = escaped.replace(">>", "\\>\\>");
    format!("/{}/{}", escaped, if ignore_case { "i" } else { "" })
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{}'", value)
    } else if !value.contains('"') {
        format!("\"{}\"", value)
    } else {
        let parts: Vec<String> = value
            .split('\'')
            .map(|part| format!("'{}'", part))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}
