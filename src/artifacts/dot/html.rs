//! HTML-like labels
//!
//! Graphviz accepts a restricted HTML dialect between `<` and `>` as a label.
//! Free text placed in a label must have `&`, `<` and `>` escaped.

/// Escape text for use inside an HTML-like label
///
/// `&` is replaced first so the entities introduced for `<` and `>` are not
/// escaped a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builder for an HTML-like label
///
/// ```ignore
/// let mut label = HtmlLabel::new();
/// label.element("FONT", &[("FACE", "Courier")], |label| {
///     label.text("abc123");
/// });
/// label.empty_element("BR", &[]).text("a < b");
/// assert_eq!(label.to_string(), r#"<<FONT FACE="Courier">abc123</FONT><BR/>a &lt; b>"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlLabel {
    source: String,
}

impl HtmlLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `name`, let `body` fill it, then close it
    pub fn element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.open_tag(name, attrs);
        self.source.push('>');
        body(self);
        self.source.push_str(&format!("</{name}>"));
        self
    }

    /// Self-closing element such as `<BR/>`
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open_tag(name, attrs);
        self.source.push_str("/>");
        self
    }

    /// Append escaped text
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.source.push_str(&escape_html(text));
        self
    }

    fn open_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.source.push('<');
        self.source.push_str(name);
        for (key, value) in attrs {
            self.source.push_str(&format!(" {key}=\"{value}\""));
        }
    }
}

impl std::fmt::Display for HtmlLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::proptest;

    proptest! {
        #[test]
        fn escaping_leaves_safe_text_untouched(text in "[^&<>]*") {
            assert_eq!(escape_html(&text), text);
        }

        #[test]
        fn escaped_text_has_no_raw_angle_brackets(text in ".*") {
            let escaped = escape_html(&text);
            assert!(!escaped.contains('<'));
            assert!(!escaped.contains('>'));
        }

        #[test]
        fn escaping_is_reversible(text in ".*") {
            let unescaped = escape_html(&text)
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&");
            assert_eq!(unescaped, text);
        }
    }

    #[test]
    fn escapes_each_special_character_once() {
        assert_eq!(
            escape_html("<b>Tom & Jerry</b>"),
            "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
    }

    #[test]
    fn escaping_twice_is_not_a_no_op() {
        assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
    }

    #[test]
    fn builds_nested_markup() {
        let mut label = HtmlLabel::new();
        label.element("FONT", &[("FACE", "Courier")], |label| {
            label.text("abc123");
        });
        label.empty_element("BR", &[]).text("a < b");

        assert_eq!(
            label.to_string(),
            r#"<<FONT FACE="Courier">abc123</FONT><BR/>a &lt; b>"#
        );
    }

    #[test]
    fn empty_label_is_just_delimiters() {
        assert_eq!(HtmlLabel::new().to_string(), "<>");
    }
}
