use derive_new::new;

/// Value of a node or edge attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Emitted as a quoted string: `label="heads/main"`
    Str(String),
    /// Emitted verbatim: `color=red`, `label=<...>`
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Attribute {
    key: &'static str,
    value: AttrValue,
}

impl Attribute {
    pub fn string(key: &'static str, value: impl Into<String>) -> Self {
        Self::new(key, AttrValue::Str(value.into()))
    }

    pub fn raw(key: &'static str, value: impl Into<String>) -> Self {
        Self::new(key, AttrValue::Raw(value.into()))
    }

    pub fn render(&self) -> String {
        match &self.value {
            AttrValue::Str(value) => format!("{}=\"{}\"", self.key, quote(value)),
            AttrValue::Raw(value) => format!("{}={}", self.key, value),
        }
    }
}

/// ` [k1="v1", k2=v2]`, or nothing when there are no attributes
pub fn render_attr_list(attrs: &[Attribute]) -> String {
    if attrs.is_empty() {
        return String::new();
    }

    let list = attrs
        .iter()
        .map(Attribute::render)
        .collect::<Vec<_>>()
        .join(", ");

    format!(" [{list}]")
}

fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
