use std::collections::BTreeMap;

use crate::{
    ease::Ease,
    error::{GlideError, GlideResult},
    scroll::{ScrollToElementOpts, ScrollToTopOpts, Target},
    viewport::SimViewport,
};

/// One scroll request as hosts configure it: a kind plus optional overrides.
/// Omitted fields take the operation's defaults.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollRequest {
    pub kind: String, // "element" | "top"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParsedRequest {
    Element {
        target: Target,
        opts: ScrollToElementOpts,
    },
    Top {
        opts: ScrollToTopOpts,
    },
}

pub fn parse_request(req: &ScrollRequest) -> GlideResult<ParsedRequest> {
    let kind = req.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(GlideError::validation("request kind must be non-empty"));
    }

    match kind.as_str() {
        "element" => {
            let selector = req
                .selector
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    GlideError::validation("element request requires a non-empty selector")
                })?;

            let mut opts = ScrollToElementOpts::default();
            if let Some(v) = req.offset {
                opts.offset = finite(v, "offset")?;
            }
            if let Some(v) = req.duration_ms {
                opts.duration_ms = duration(v)?;
            }
            if let Some(name) = &req.ease {
                opts.ease = parse_ease(name)?;
            }

            Ok(ParsedRequest::Element {
                target: Target::Selector(selector.to_string()),
                opts,
            })
        }
        "top" => {
            if req.selector.is_some() {
                return Err(GlideError::validation("top request does not take a selector"));
            }
            if req.offset.is_some() {
                return Err(GlideError::validation("top request does not take an offset"));
            }

            let mut opts = ScrollToTopOpts::default();
            if let Some(v) = req.duration_ms {
                opts.duration_ms = duration(v)?;
            }
            if let Some(name) = &req.ease {
                opts.ease = parse_ease(name)?;
            }

            Ok(ParsedRequest::Top { opts })
        }
        _ => Err(GlideError::validation(format!(
            "unknown request kind '{kind}'"
        ))),
    }
}

pub fn parse_ease(name: &str) -> GlideResult<Ease> {
    match name.trim().to_ascii_lowercase().as_str() {
        "cubic-in-out" | "cubic" | "ease-in-out-cubic" => Ok(Ease::CubicInOut),
        "quart-out" | "quartic-out" | "ease-out-quart" => Ok(Ease::QuartOut),
        "quad-in-out" | "quad" | "ease-in-out-quad" => Ok(Ease::QuadInOut),
        other => Err(GlideError::validation(format!("unknown ease '{other}'"))),
    }
}

fn duration(v: f64) -> GlideResult<f64> {
    if !v.is_finite() || v < 0.0 {
        return Err(GlideError::validation(
            "duration_ms must be finite and >= 0 when set",
        ));
    }
    Ok(v)
}

fn finite(v: f64, field: &str) -> GlideResult<f64> {
    if !v.is_finite() {
        return Err(GlideError::validation(format!(
            "{field} must be finite when set"
        )));
    }
    Ok(v)
}

/// A complete headless simulation input: initial viewport state plus one
/// request. Consumed by the CLI.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub scroll_y: f64,
    pub elements: BTreeMap<String, f64>, // selector -> document-absolute top
    #[serde(default = "default_fps")]
    pub fps: u32,
    pub request: ScrollRequest,
}

fn default_fps() -> u32 {
    60
}

impl Scene {
    pub fn validate(&self) -> GlideResult<()> {
        finite(self.scroll_y, "scroll_y")?;
        for (selector, top) in &self.elements {
            if !top.is_finite() {
                return Err(GlideError::validation(format!(
                    "element '{selector}' top must be finite"
                )));
            }
        }
        if self.fps == 0 {
            return Err(GlideError::validation("fps must be > 0"));
        }
        Ok(())
    }

    pub fn viewport(&self) -> SimViewport {
        let mut vp = SimViewport::new(self.scroll_y);
        for (selector, top) in &self.elements {
            vp.insert(selector.clone(), *top);
        }
        vp
    }
}
