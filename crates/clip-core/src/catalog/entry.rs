use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::Serialize;

use super::Category;
use crate::ids::EntryId;

/// Output of a [`Renderer`]. The core never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub component: String,
}

/// Zero-argument factory producing an entry's visual.
#[derive(Clone)]
pub struct Renderer(Arc<dyn Fn() -> Preview + Send + Sync>);

impl Renderer {
    pub fn new(render: impl Fn() -> Preview + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    /// Renderer that always yields a preview of the named component.
    pub fn component(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::new(move || Preview {
            component: name.clone(),
        })
    }

    pub fn render(&self) -> Preview {
        (self.0)()
    }
}

impl Debug for Renderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Renderer(..)")
    }
}

/// One catalog item.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Copyable text, opaque to the gallery.
    pub payload: String,
    #[serde(skip)]
    pub render: Renderer,
}

impl Entry {
    pub fn new(
        id: impl Into<EntryId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        payload: impl Into<String>,
        render: Renderer,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            payload: payload.into(),
            render,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_is_invoked_lazily() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let renderer = Renderer::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Preview {
                component: "DotsLoader".into(),
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(renderer.render().component, "DotsLoader");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_entry_serialization_skips_renderer() {
        let entry = Entry::new(
            "dots-loader",
            "Dots Loader",
            "Animated loading dots",
            Category::Loaders,
            "<Dots />",
            Renderer::component("DotsLoader"),
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "dots-loader");
        assert_eq!(value["category"], "loaders");
        assert!(value.get("render").is_none());
    }
}
