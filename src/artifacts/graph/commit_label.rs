use crate::artifacts::dot::html::HtmlLabel;
use crate::artifacts::graph::ELLIPSIS;
use crate::artifacts::objects::commit::Commit;
use std::borrow::Cow;

/// Cut `subject` to exactly `max_width` characters and mark the cut
pub fn truncate_subject(subject: &str, max_width: usize) -> Cow<'_, str> {
    match subject.char_indices().nth(max_width) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &subject[..cut])),
        None => Cow::Borrowed(subject),
    }
}

/// Hash, date, author, spacer and subject, one per line
pub fn commit_label(commit: &Commit, subject_width: usize) -> HtmlLabel {
    let mut label = HtmlLabel::new();

    label.element("FONT", &[("FACE", "Courier")], |label| {
        label.text(commit.oid().as_ref());
    });
    label.empty_element("BR", &[]).text(commit.date());
    label.empty_element("BR", &[]).text(commit.author());
    label.empty_element("BR", &[]).text(" ");
    label
        .empty_element("BR", &[])
        .text(&truncate_subject(commit.subject(), subject_width));

    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::graph::SUBJECT_MAX_WIDTH;
    use crate::artifacts::objects::commit::FIELD_DELIMITER;
    use pretty_assertions::assert_eq;
    use proptest::proptest;

    fn commit(subject: &str) -> Commit {
        let line = [
            "0123456789abcdef0123456789abcdef01234567",
            "",
            "A U Thor <a@example.com>",
            "Sun, 1 Jan 2023 12:00:00 +0000 (3 years ago)",
            subject,
        ]
        .join(FIELD_DELIMITER.to_string().as_str());
        Commit::parse_record(&line).unwrap()
    }

    proptest! {
        #[test]
        fn long_subjects_are_cut_to_exact_width(subject in "[a-z ]{61,120}") {
            let truncated = truncate_subject(&subject, SUBJECT_MAX_WIDTH);
            let kept = truncated.strip_suffix(ELLIPSIS).unwrap();
            assert_eq!(kept.chars().count(), SUBJECT_MAX_WIDTH);
            assert!(subject.starts_with(kept));
        }

        #[test]
        fn short_subjects_are_untouched(subject in "[a-z ]{0,60}") {
            assert_eq!(truncate_subject(&subject, SUBJECT_MAX_WIDTH), subject.as_str());
        }
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let subject = "é".repeat(61);

        let truncated = truncate_subject(&subject, SUBJECT_MAX_WIDTH);

        assert_eq!(truncated, format!("{}...", "é".repeat(60)));
    }

    #[test]
    fn exactly_max_width_is_not_truncated() {
        let subject = "x".repeat(SUBJECT_MAX_WIDTH);
        assert_eq!(truncate_subject(&subject, SUBJECT_MAX_WIDTH), subject.as_str());
    }

    #[test]
    fn builds_full_label() {
        let label = commit_label(&commit("init"), SUBJECT_MAX_WIDTH);

        assert_eq!(
            label.to_string(),
            concat!(
                r#"<<FONT FACE="Courier">0123456789abcdef0123456789abcdef01234567</FONT>"#,
                "<BR/>Sun, 1 Jan 2023 12:00:00 +0000 (3 years ago)",
                "<BR/>A U Thor &lt;a@example.com&gt;",
                "<BR/> ",
                "<BR/>init>"
            )
        );
    }

    #[test]
    fn escapes_subject_after_truncating() {
        let subject = format!("{}<&>", "a".repeat(58));

        let label = commit_label(&commit(&subject), SUBJECT_MAX_WIDTH).to_string();

        assert!(label.ends_with(&format!("<BR/>{}&lt;&amp;...>", "a".repeat(58))));
    }
}
