use crate::{
    ease::Ease,
    viewport::{NodeId, Viewport},
};

pub const DEFAULT_ELEMENT_OFFSET: f64 = 80.0;
pub const DEFAULT_ELEMENT_DURATION_MS: f64 = 800.0;
pub const DEFAULT_TOP_DURATION_MS: f64 = 600.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Selector(String),
    Node(NodeId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToElementOpts {
    /// Pixels kept between the viewport top and the element (headroom for
    /// fixed headers). Subtracted from the measured target position.
    pub offset: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Default for ScrollToElementOpts {
    fn default() -> Self {
        Self {
            offset: DEFAULT_ELEMENT_OFFSET,
            duration_ms: DEFAULT_ELEMENT_DURATION_MS,
            ease: Ease::CubicInOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToTopOpts {
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Default for ScrollToTopOpts {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOP_DURATION_MS,
            ease: Ease::QuartOut,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    /// Additive translation: offset follows `start + distance * e(p)`.
    Translate { distance: f64 },
    /// Multiplicative collapse toward zero: offset follows `start * (1 - e(p))`.
    Collapse,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    start: f64,
    motion: Motion,
    duration_ms: f64,
    ease: Ease,
    started_at: Option<f64>, // stamped on the first frame, not at invocation
}

/// Animates the viewport's vertical scroll offset toward a committed target
/// over a fixed duration, one eased sample per repaint callback.
///
/// At most one run is in flight; a new request replaces the active run, so a
/// superseded run never writes the offset again. Positions are measured once
/// at invocation and never re-read, even if layout shifts mid-run.
pub struct Scroller<V> {
    viewport: V,
    run: Option<Run>,
}

impl<V: Viewport> Scroller<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            run: None,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// Whether a run is in flight, i.e. whether the host should schedule
    /// another repaint callback.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Start animating so that `target`'s top lands `opts.offset` pixels below
    /// the viewport top.
    ///
    /// A selector that matches nothing logs one warning and leaves the
    /// scroller untouched; this is not an error surface.
    pub fn scroll_to_element(&mut self, target: &Target, opts: ScrollToElementOpts) {
        let node = match target {
            Target::Node(node) => *node,
            Target::Selector(selector) => match self.viewport.resolve(selector) {
                Some(node) => node,
                None => {
                    tracing::warn!(%selector, "scroll target not found; ignoring request");
                    return;
                }
            },
        };

        let start = self.viewport.scroll_y();
        let target_pos = start + self.viewport.node_top(node) - opts.offset;
        self.run = Some(Run {
            start,
            motion: Motion::Translate {
                distance: target_pos - start,
            },
            duration_ms: opts.duration_ms,
            ease: opts.ease,
            started_at: None,
        });
    }

    /// Start animating the scroll offset back to absolute zero.
    pub fn scroll_to_top(&mut self, opts: ScrollToTopOpts) {
        self.run = Some(Run {
            start: self.viewport.scroll_y(),
            motion: Motion::Collapse,
            duration_ms: opts.duration_ms,
            ease: opts.ease,
            started_at: None,
        });
    }

    /// Repaint callback. `now_ms` must be monotonically non-decreasing across
    /// calls; within one run that makes `progress` monotonic by construction.
    pub fn on_frame(&mut self, now_ms: f64) {
        let Some(mut run) = self.run else {
            return;
        };

        let started_at = *run.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        // Non-positive durations degenerate to completing on the first frame.
        let progress = if run.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / run.duration_ms).min(1.0)
        };
        let eased = run.ease.apply(progress);

        let y = match run.motion {
            Motion::Translate { distance } => run.start + distance * eased,
            Motion::Collapse => run.start * (1.0 - eased),
        };
        self.viewport.set_scroll_y(y);

        self.run = if progress < 1.0 { Some(run) } else { None };
    }
}
