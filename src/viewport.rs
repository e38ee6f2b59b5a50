use std::collections::BTreeMap;

/// Opaque handle to a node in the hosting document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

/// The platform surface a scroller animates against: an absolute vertical
/// scroll offset plus just enough layout querying to locate a target.
///
/// Implementations back this with a real display surface or, for tests and
/// headless runs, with [`SimViewport`].
pub trait Viewport {
    /// Current absolute vertical scroll offset, in pixels.
    fn scroll_y(&self) -> f64;

    /// Set the absolute vertical scroll offset.
    fn set_scroll_y(&mut self, y: f64);

    /// Resolve a selector against the document. Single lookup; `None` when
    /// nothing matches.
    fn resolve(&self, selector: &str) -> Option<NodeId>;

    /// Top edge of `node` relative to the viewport, in pixels. Negative when
    /// the node sits above the current scroll position.
    fn node_top(&self, node: NodeId) -> f64;
}

/// In-memory viewport: a scroll offset and a flat set of nodes keyed by
/// selector, each at a fixed document-absolute top.
#[derive(Clone, Debug, Default)]
pub struct SimViewport {
    scroll_y: f64,
    ids: BTreeMap<String, NodeId>,
    tops: Vec<f64>, // document-absolute, indexed by NodeId
}

impl SimViewport {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            ids: BTreeMap::new(),
            tops: Vec::new(),
        }
    }

    pub fn insert(&mut self, selector: impl Into<String>, document_top: f64) -> NodeId {
        let id = NodeId(self.tops.len() as u64);
        self.tops.push(document_top);
        self.ids.insert(selector.into(), id);
        id
    }

    /// Relocate a node, simulating a layout shift after measurement.
    pub fn move_node(&mut self, node: NodeId, document_top: f64) {
        self.tops[node.0 as usize] = document_top;
    }
}

impl Viewport for SimViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    fn resolve(&self, selector: &str) -> Option<NodeId> {
        self.ids.get(selector).copied()
    }

    fn node_top(&self, node: NodeId) -> f64 {
        self.tops[node.0 as usize] - self.scroll_y
    }
}
