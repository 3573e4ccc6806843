//! Borrowed view of one element in a parsed document

use scraper::ElementRef;

/// A read-only handle to an element of a [`super::Document`]
#[derive(Debug, Clone, Copy)]
pub struct ElementHandle<'a> {
    element: ElementRef<'a>,
}

impl<'a> ElementHandle<'a> {
    pub(crate) fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Lowercase local tag name
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// Attribute value by name. HTML attribute names are lowercased by the
    /// parser, so the lookup lowercases too.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(&name.to_ascii_lowercase())
    }

    /// Concatenated text of this element and all descendants
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text of direct child text nodes only
    pub fn direct_text(&self) -> String {
        self.element
            .children()
            .filter_map(|node| node.value().as_text().map(|t| String::from(&**t)))
            .collect()
    }

    /// Child elements in order
    pub fn children(&self) -> Vec<ElementHandle<'a>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(ElementHandle::new)
            .collect()
    }

    /// Descendant elements with the given tag name
    pub fn find_all(&self, tag: &str) -> Vec<ElementHandle<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(ElementHandle::new)
            .collect()
    }

    /// Nearest preceding sibling that is an element (text and comments skipped)
    pub fn previous_element_sibling(&self) -> Option<ElementHandle<'a>> {
        self.element
            .prev_siblings()
            .find_map(ElementRef::wrap)
            .map(ElementHandle::new)
    }

    pub fn parent_element(&self) -> Option<ElementHandle<'a>> {
        self.element
            .parent()
            .and_then(ElementRef::wrap)
            .map(ElementHandle::new)
    }

    /// Whether any ancestor element has the given tag name
    pub fn has_ancestor(&self, tag: &str) -> bool {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().name().eq_ignore_ascii_case(tag))
    }
}
