// In-memory DOM for hosts without a browser, and for tests
//
// Supports compound selectors made of a tag, `#id`, `.class`, `[attr]` and
// `[attr="value"]` parts, plus comma-separated lists. Combinators are not
// supported; such selectors match nothing.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::markup::PLACEHOLDER_CLASS;
use super::traits::{VideoElement, VideoPage};

struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    content: String,
    accept: Option<Rc<dyn Fn()>>,
    renders: usize,
}

/// Shared handle to an in-memory element
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

/// Non-owning reference to a `MemoryElement`
#[derive(Clone)]
pub struct WeakElement(Weak<RefCell<ElementData>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            content: String::new(),
            accept: None,
            renders: 0,
        })))
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn content(&self) -> String {
        self.0.borrow().content.clone()
    }

    /// How many times the content has been replaced
    pub fn render_count(&self) -> usize {
        self.0.borrow().renders
    }

    pub fn has_accept_handler(&self) -> bool {
        self.0.borrow().accept.is_some()
    }

    /// Simulate a click on the placeholder's accept button.
    /// Returns false when no handler is bound.
    pub fn click_accept(&self) -> bool {
        let handler = self.0.borrow().accept.clone();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Whether both handles point at the same node
    pub fn same_node(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0
            .borrow()
            .attributes
            .get("class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }

    fn matches(&self, selector: &CompoundSelector) -> bool {
        if let Some(tag) = &selector.tag {
            if *tag != self.0.borrow().tag {
                return false;
            }
        }
        if let Some(id) = &selector.id {
            if self.attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !selector.classes.iter().all(|c| self.has_class(c)) {
            return false;
        }
        selector.attributes.iter().all(|(name, expected)| {
            match (self.attribute(name), expected) {
                (Some(actual), Some(expected)) => actual == *expected,
                (Some(_), None) => true,
                (None, _) => false,
            }
        })
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("content", &data.content)
            .finish()
    }
}

impl VideoElement for MemoryElement {
    type Weak = WeakElement;

    fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    fn upgrade(weak: &WeakElement) -> Option<Self> {
        weak.0.upgrade().map(Self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn replace_content(&self, html: &str) {
        let mut data = self.0.borrow_mut();
        data.content = html.to_string();
        data.accept = None;
        data.renders += 1;
    }

    fn has_placeholder(&self) -> bool {
        let needle = format!(r#"class="{}""#, PLACEHOLDER_CLASS);
        self.0.borrow().content.contains(&needle)
    }

    fn on_accept(&self, handler: Box<dyn Fn()>) {
        self.0.borrow_mut().accept = Some(Rc::from(handler));
    }
}

/// In-memory page holding elements in document order
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: RefCell<Vec<MemoryElement>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, as dynamically inserted content would be
    pub fn insert(&self, element: MemoryElement) -> MemoryElement {
        self.elements.borrow_mut().push(element.clone());
        element
    }
}

impl VideoPage for MemoryPage {
    type Element = MemoryElement;

    fn select_all(&self, selector: &str) -> Vec<MemoryElement> {
        let Some(selectors) = parse_selector_list(selector) else {
            log::warn!("[Dom] Unsupported selector: {}", selector);
            return Vec::new();
        };

        self.elements
            .borrow()
            .iter()
            .filter(|el| selectors.iter().any(|s| el.matches(s)))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default, PartialEq)]
struct CompoundSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

fn parse_selector_list(input: &str) -> Option<Vec<CompoundSelector>> {
    input.split(',').map(|part| parse_compound(part.trim())).collect()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(rest: &str) -> Option<(&str, &str)> {
    let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(rest.split_at(end))
}

fn parse_compound(input: &str) -> Option<CompoundSelector> {
    if input.is_empty() {
        return None;
    }

    let mut selector = CompoundSelector::default();
    let mut rest = input;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else if let Some((tag, after)) = take_ident(rest) {
        selector.tag = Some(tag.to_ascii_lowercase());
        rest = after;
    }

    while let Some(c) = rest.chars().next() {
        match c {
            '.' => {
                let (class, after) = take_ident(&rest[1..])?;
                selector.classes.push(class.to_string());
                rest = after;
            }
            '#' => {
                let (id, after) = take_ident(&rest[1..])?;
                selector.id = Some(id.to_string());
                rest = after;
            }
            '[' => {
                let close = rest.find(']')?;
                let body = &rest[1..close];
                let attribute = match body.split_once('=') {
                    Some((name, value)) => {
                        let value = value.trim();
                        let unquoted = value
                            .strip_prefix('"')
                            .and_then(|v| v.strip_suffix('"'))
                            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                            .unwrap_or(value);
                        (name.trim().to_string(), Some(unquoted.to_string()))
                    }
                    None => (body.trim().to_string(), None),
                };
                if attribute.0.is_empty() || !attribute.0.chars().all(is_ident_char) {
                    return None;
                }
                selector.attributes.push(attribute);
                rest = &rest[close + 1..];
            }
            _ => return None,
        }
    }

    Some(selector)
}
