//! Marketing copy as data. Builders in `pseo::builder` pick entries out of
//! these tables and render them with [`fill`]; no copy lives in control flow.
//!
//! Templates use `{name}` placeholders. Placeholders with no matching variable
//! are left in place so a missing variable shows up in review instead of
//! silently producing an empty string.

pub mod outcome;
pub mod repurpose;
pub mod tier3;

/// Look up the entry for `key` in a `(key, value)` table.
pub fn lookup<T>(table: &'static [(&'static str, T)], key: &str) -> Option<&'static T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

/// Render a `{name}` template.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_known_placeholders() {
        let out = fill(
            "Turn your {source} into {target} content",
            &[("source", "Blog post"), ("target", "LinkedIn")],
        );
        assert_eq!(out, "Turn your Blog post into LinkedIn content");
    }

    #[test]
    fn fill_keeps_unknown_and_unterminated_placeholders() {
        assert_eq!(fill("a {missing} b", &[]), "a {missing} b");
        assert_eq!(fill("open { brace", &[]), "open { brace");
        assert_eq!(fill("{x}{x}", &[("x", "1")]), "11");
    }

    #[test]
    fn lookup_finds_by_key() {
        static TABLE: &[(&str, u8)] = &[("a", 1), ("b", 2)];
        assert_eq!(lookup(TABLE, "b"), Some(&2));
        assert_eq!(lookup(TABLE, "c"), None);
    }
}
