use std::ops::{Deref, DerefMut};

use markup5ever::{LocalName, QualName, namespace_url, ns};

/// A single attribute on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute's name, namespace and prefix
    pub name: QualName,
    /// The attribute's value
    pub value: String,
}

impl Attribute {
    /// Create an attribute in the null namespace
    pub fn new(local: impl Into<LocalName>, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), local.into()),
            value: value.into(),
        }
    }
}

/// An element's attribute list, kept in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    inner: Vec<Attribute>,
}

impl Attributes {
    pub fn new(inner: Vec<Attribute>) -> Self {
        Self { inner }
    }

    /// Set `name` to `value`, replacing any existing value
    pub fn set(&mut self, name: QualName, value: &str) {
        match self.inner.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => {
                existing.value.clear();
                existing.value.push_str(value);
            }
            None => self.inner.push(Attribute {
                name,
                value: value.to_string(),
            }),
        }
    }
}

impl Deref for Attributes {
    type Target = Vec<Attribute>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
