/// A node of an XML document: name, ordered attributes, ordered children and
/// optional text content.
///
/// Built by value (`Element::new("testcase").attr("name", "x")`) and handed to
/// [`crate::render`] / [`crate::write_document`] once complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Appends an attribute. Attribute order is preserved on output.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Appends an attribute only when `value` is present.
    #[must_use]
    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children with the given element name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Number of elements with the given name in this subtree, excluding `self`.
    pub fn count_descendants(&self, name: &str) -> usize {
        self.children
            .iter()
            .map(|c| usize::from(c.name == name) + c.count_descendants(name))
            .sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }
}
