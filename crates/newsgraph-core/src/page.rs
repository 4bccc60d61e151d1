//! Offset pagination for list endpoints.
//!
//! Windows are `start`/`limit` pairs. Invalid client input never errors; it
//! silently falls back to the configured defaults, and a defaulted window
//! advertises no `previous` link.

use serde::{Deserialize, Serialize};

// ─── Parameters ──────────────────────────────────────────────────────────────

/// Raw query-string pagination input.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
  pub start: Option<i64>,
  pub limit: Option<i64>,
}

/// Server-configured fallbacks for absent or invalid windows.
#[derive(Debug, Clone, Copy)]
pub struct PageDefaults {
  pub start: i64,
  pub limit: i64,
}

impl Default for PageDefaults {
  fn default() -> Self {
    PageDefaults {
      start: 0,
      limit: 1000,
    }
  }
}

// ─── Window ──────────────────────────────────────────────────────────────────

/// A resolved pagination window. `explicit` records whether the client
/// supplied a usable window or we fell back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  pub start:    i64,
  pub limit:    i64,
  pub explicit: bool,
}

impl PageWindow {
  /// A window is usable iff `start >= 0` and `limit > 0`; anything else,
  /// including a partially supplied pair, falls back whole.
  pub fn resolve(params: PageParams, defaults: PageDefaults) -> Self {
    match (params.start, params.limit) {
      (Some(start), Some(limit)) if start >= 0 && limit > 0 => PageWindow {
        start,
        limit,
        explicit: true,
      },
      _ => PageWindow {
        start:    defaults.start,
        limit:    defaults.limit,
        explicit: false,
      },
    }
  }

  /// The window one page back. Deliberately asymmetric: the backward limit is
  /// the current `start`, i.e. the distance back to the origin boundary, not
  /// the current page size. Existing clients depend on this shape.
  pub fn previous(self) -> Option<PageWindow> {
    if !self.explicit {
      return None;
    }
    Some(PageWindow {
      start:    (self.start - self.limit).max(0),
      limit:    self.start,
      explicit: true,
    })
  }

  /// The window one page forward. Only meaningful when the current page came
  /// back full, which the caller knows and we do not.
  pub fn next(self) -> PageWindow {
    PageWindow {
      start:    self.start + self.limit,
      limit:    self.limit,
      explicit: true,
    }
  }

  /// Render as a query string fragment for navigation links.
  pub fn query(self) -> String {
    format!("start={}&limit={}", self.start, self.limit)
  }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of results plus navigation links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
  pub previous: Option<String>,
  pub next:     Option<String>,
  pub data:     Vec<T>,
}

impl<T> Page<T> {
  /// Assemble a page from a fetched window. `previous` is advertised iff the
  /// client paged explicitly; `next` iff the page came back full.
  pub fn assemble(data: Vec<T>, window: PageWindow, path: &str) -> Self {
    let previous = window
      .previous()
      .map(|w| format!("{path}?{}", w.query()));
    let next = (data.len() as i64 == window.limit)
      .then(|| format!("{path}?{}", window.next().query()));
    Page {
      previous,
      next,
      data,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const DEFAULTS: PageDefaults = PageDefaults {
    start: 0,
    limit: 1000,
  };

  fn params(start: i64, limit: i64) -> PageParams {
    PageParams {
      start: Some(start),
      limit: Some(limit),
    }
  }

  #[test]
  fn absent_params_fall_back_to_defaults() {
    let w = PageWindow::resolve(PageParams::default(), DEFAULTS);
    assert_eq!((w.start, w.limit), (0, 1000));
    assert!(!w.explicit);
  }

  #[test]
  fn invalid_params_fall_back_whole() {
    for p in [
      params(-1, 10),
      params(0, 0),
      params(0, -5),
      PageParams {
        start: Some(10),
        limit: None,
      },
      PageParams {
        start: None,
        limit: Some(10),
      },
    ] {
      let w = PageWindow::resolve(p, DEFAULTS);
      assert_eq!((w.start, w.limit, w.explicit), (0, 1000, false));
    }
  }

  #[test]
  fn previous_limit_is_the_distance_back_to_origin() {
    // start=20, limit=10: previous is [10, ..) with limit = current start
    let prev = PageWindow::resolve(params(20, 10), DEFAULTS)
      .previous()
      .unwrap();
    assert_eq!((prev.start, prev.limit), (10, 20));

    // start=5, limit=10: backward start clamps at zero
    let prev = PageWindow::resolve(params(5, 10), DEFAULTS)
      .previous()
      .unwrap();
    assert_eq!((prev.start, prev.limit), (0, 5));
  }

  #[test]
  fn defaulted_window_has_no_previous() {
    assert!(
      PageWindow::resolve(PageParams::default(), DEFAULTS)
        .previous()
        .is_none()
    );
    assert!(PageWindow::resolve(params(-1, 10), DEFAULTS).previous().is_none());
  }

  #[test]
  fn next_link_only_on_full_pages() {
    let w = PageWindow::resolve(params(0, 3), DEFAULTS);

    let full = Page::assemble(vec![1, 2, 3], w, "/persons");
    assert_eq!(full.next.as_deref(), Some("/persons?start=3&limit=3"));

    let short = Page::assemble(vec![1, 2], w, "/persons");
    assert!(short.next.is_none());
  }

  #[test]
  fn explicit_window_always_links_previous() {
    let w = PageWindow::resolve(params(8, 4), DEFAULTS);
    let page = Page::assemble(vec![1, 2, 3, 4], w, "/events");
    assert_eq!(page.previous.as_deref(), Some("/events?start=4&limit=8"));
    assert_eq!(page.next.as_deref(), Some("/events?start=12&limit=4"));
  }

  #[test]
  fn empty_page_serializes_null_links() {
    let w = PageWindow::resolve(PageParams::default(), DEFAULTS);
    let page = Page::assemble(Vec::<i64>::new(), w, "/persons");
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["previous"], serde_json::Value::Null);
    assert_eq!(json["next"], serde_json::Value::Null);
    assert_eq!(json["data"], serde_json::json!([]));
  }
}
