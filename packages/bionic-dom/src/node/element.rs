use markup5ever::{LocalName, QualName, local_name, namespace_url, ns};

use super::{Attribute, Attributes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The elements tag name, namespace and prefix
    pub name: QualName,

    /// The elements id attribute (if it has one)
    pub id: Option<String>,

    /// The element's attributes
    pub attrs: Attributes,
}

impl ElementData {
    pub fn new(name: QualName, attrs: Vec<Attribute>) -> Self {
        let id = attrs
            .iter()
            .find(|attr| attr.name.local == local_name!("id"))
            .map(|attr| attr.value.clone());

        ElementData {
            name,
            id,
            attrs: Attributes::new(attrs),
        }
    }

    /// Create an element in the HTML namespace
    pub fn html(local: LocalName) -> Self {
        Self::new(QualName::new(None, ns!(html), local), Vec::new())
    }

    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn attr(&self, name: impl PartialEq<LocalName>) -> Option<&str> {
        let attr = self.attrs.iter().find(|attr| name == attr.name.local)?;
        Some(&attr.value)
    }

    pub fn set_attr(&mut self, local: LocalName, value: &str) {
        if local == local_name!("id") {
            self.id = Some(value.to_string());
        }
        self.attrs.set(QualName::new(None, ns!(), local), value);
    }

    /// Iterate over the whitespace-separated tokens of the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr(local_name!("class"))
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|token| token == class)
    }

    /// Add `class` to the class list. Returns `false` if it was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }

        let value = match self.attr(local_name!("class")) {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim_end()),
            _ => class.to_string(),
        };
        self.set_attr(local_name!("class"), &value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_tokens() {
        let mut el = ElementData::new(
            QualName::new(None, ns!(html), local_name!("p")),
            vec![Attribute::new(local_name!("class"), "  lead   intro ")],
        );
        assert!(el.has_class("lead"));
        assert!(el.has_class("intro"));
        assert!(!el.has_class("lea"));

        assert!(el.add_class("marked"));
        assert!(!el.add_class("marked"));
        assert_eq!(el.attr(local_name!("class")), Some("  lead   intro marked"));
    }

    #[test]
    fn id_tracks_attribute() {
        let mut el = ElementData::html(local_name!("div"));
        assert_eq!(el.id, None);
        el.set_attr(local_name!("id"), "main");
        assert_eq!(el.id.as_deref(), Some("main"));
        assert_eq!(el.attr(local_name!("id")), Some("main"));
    }
}
