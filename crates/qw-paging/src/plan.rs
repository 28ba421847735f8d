#![forbid(unsafe_code)]

//! Page index planning.
//!
//! Computes which page numbers a pagination control should show for a
//! given current page and total page count: the first and last page, a
//! window of pages around the current one, and a single ellipsis marker
//! wherever two or more pages are elided between them.

/// One element of a pagination control's marker sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A concrete, clickable page number (1-based).
    Page(u64),
    /// One or more elided pages between two shown numbers.
    Ellipsis,
}

impl PageMarker {
    /// The page number, if this marker is a concrete page.
    pub fn page(self) -> Option<u64> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    /// Whether this marker is an ellipsis.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl std::fmt::Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Errors that can occur while planning page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// `total_pages` was negative.
    InvalidArgument { total_pages: i64 },
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { total_pages } => {
                write!(
                    f,
                    "invalid argument: total pages must be non-negative, got {total_pages}"
                )
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// Plan the marker sequence for a pagination control.
///
/// Returns the pages to render in ascending order: page 1, a window of
/// `surrounding` pages on each side of `current_page`, and the last page,
/// deduplicated, with exactly one [`PageMarker::Ellipsis`] standing in for
/// any gap of two or more pages.
///
/// `current_page` is treated as if clamped into `[1, total_pages]`;
/// out-of-range values never cause an error. `total_pages == 0` yields an
/// empty plan. Only a negative `total_pages` is rejected.
pub fn plan(
    current_page: i64,
    total_pages: i64,
    surrounding: u32,
) -> Result<Vec<PageMarker>, PlanError> {
    if total_pages < 0 {
        return Err(PlanError::InvalidArgument { total_pages });
    }
    let current = current_page.clamp(0, total_pages) as u64;
    Ok(plan_clamped(current, total_pages as u64, surrounding))
}

/// Infallible variant of [`plan`] for callers that already hold unsigned
/// page counts. `current_page` clamps into `[1, total_pages]`.
pub fn plan_clamped(current_page: u64, total_pages: u64, surrounding: u32) -> Vec<PageMarker> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "page_plan",
        current_page,
        total_pages,
        surrounding
    )
    .entered();

    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let surrounding = u64::from(surrounding);
    let window_start = current.saturating_sub(surrounding).max(1);
    let window_end = current.saturating_add(surrounding).min(total_pages);

    let mut markers = Vec::with_capacity((window_end - window_start) as usize + 5);
    let mut last = 0u64;
    for page in std::iter::once(1)
        .chain(window_start..=window_end)
        .chain(std::iter::once(total_pages))
    {
        if page <= last {
            continue;
        }
        if last > 0 && page - last > 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(page));
        last = page;
    }
    markers
}
