//! Parser for `git show-ref -d`
//!
//! ```text
//! 1f0c9e...  refs/heads/main
//! 5b2a77...  refs/tags/v1.0
//! 9d0e41...  refs/tags/v1.0^{}
//! ```
//!
//! An annotated tag is listed twice: once with the tag object and once,
//! suffixed with `^{}`, with the commit it dereferences to. The dereferenced
//! line always wins so tags are drawn pointing at commits.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::RefName;
use anyhow::Context;
use std::collections::BTreeMap;

/// `<40-hex> refs/<name>` with an optional `^{}` dereference marker
const SHOW_REF_REGEX: &str = r"^([0-9a-f]{40}) refs/(.+?)(\^\{\})?$";

pub fn parse_show_ref(output: &str) -> anyhow::Result<BTreeMap<RefName, ObjectId>> {
    let re = regex::Regex::new(SHOW_REF_REGEX)
        .with_context(|| format!("invalid show-ref regex: {SHOW_REF_REGEX}"))?;

    let mut direct = BTreeMap::new();
    let mut peeled = BTreeMap::new();

    for line in output.lines() {
        let Some(captures) = re.captures(line.trim_end()) else {
            tracing::debug!(line, "skipping unrecognized show-ref line");
            continue;
        };

        let Ok(oid) = ObjectId::try_parse(captures[1].to_string()) else {
            continue;
        };
        let name = RefName::new(captures[2].to_string());

        if captures.get(3).is_some() {
            peeled.insert(name, oid);
        } else {
            direct.insert(name, oid);
        }
    }

    direct.extend(peeled);
    Ok(direct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(c: char) -> String {
        c.to_string().repeat(40)
    }

    fn lookup<'m>(refs: &'m BTreeMap<RefName, ObjectId>, name: &str) -> Option<&'m str> {
        refs.get(&RefName::new(name.to_string()))
            .map(|oid| oid.as_ref())
    }

    #[test]
    fn annotated_tags_resolve_to_the_tagged_commit() {
        let output = format!(
            "{} refs/heads/main\n{} refs/tags/v1\n{} refs/tags/v1^{{}}\n",
            hex('a'),
            hex('b'),
            hex('c')
        );

        let refs = parse_show_ref(&output).unwrap();

        assert_eq!(refs.len(), 2);
        assert_eq!(lookup(&refs, "heads/main"), Some(hex('a').as_str()));
        assert_eq!(lookup(&refs, "tags/v1"), Some(hex('c').as_str()));
    }

    #[test]
    fn dereferenced_line_wins_regardless_of_order() {
        let output = format!(
            "{} refs/tags/v1^{{}}\n{} refs/tags/v1\n",
            hex('c'),
            hex('b')
        );

        let refs = parse_show_ref(&output).unwrap();

        assert_eq!(lookup(&refs, "tags/v1"), Some(hex('c').as_str()));
    }

    #[test]
    fn skips_noise() {
        let output = format!(
            "warning: something\n{} HEAD\nabc refs/heads/short\n{} refs/stash\n\n",
            hex('a'),
            hex('d')
        );

        let refs = parse_show_ref(&output).unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(lookup(&refs, "stash"), Some(hex('d').as_str()));
    }

    #[test]
    fn empty_output_is_empty_mapping() {
        assert!(parse_show_ref("").unwrap().is_empty());
    }
}
