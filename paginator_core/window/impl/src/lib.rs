use paginator_core_window_contracts::PageWindowService;
use paginator_models::window::{MaxVisible, PageToken};
use tracing::trace;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, Default)]
pub struct PageWindowServiceImpl;

impl PageWindowService for PageWindowServiceImpl {
    fn generate(&self, current_page: i64, total_pages: i64, max_visible: i64) -> Vec<PageToken> {
        let tokens = generate_page_window(current_page, total_pages, max_visible);
        trace!(current_page, total_pages, max_visible, ?tokens, "generated page window");
        tokens
    }
}

/// Computes the page tokens for a pagination control.
///
/// The first and the last page are always visible. If not all pages fit into
/// `max_visible` tokens, the remaining slots are filled with a contiguous window
/// around the current page and the gaps are collapsed into ellipses. Both
/// anchors and ellipses count towards `max_visible`.
///
/// Any combination of inputs is accepted and at most [`MaxVisible::MAX`] tokens
/// are returned. `current_page` is clamped into `[1, total_pages]` and a
/// non-positive `total_pages` yields no tokens. A `max_visible` below
/// [`MaxVisible::MIN`] shows all pages as long as there are no more than
/// [`MaxVisible::MAX`] of them, otherwise it is raised to [`MaxVisible::MIN`].
/// A `max_visible` above [`MaxVisible::MAX`] is lowered to it.
pub fn generate_page_window(current_page: i64, total_pages: i64, max_visible: i64) -> Vec<PageToken> {
    if total_pages <= 0 {
        return Vec::new();
    }

    let min_visible = MaxVisible::MIN as i64;
    let max_tokens = MaxVisible::MAX as i64;
    if max_visible < min_visible && total_pages <= max_tokens {
        return pages(1, total_pages).collect();
    }

    let max_visible = max_visible.clamp(min_visible, max_tokens);
    if total_pages <= max_visible {
        return pages(1, total_pages).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let (start, end) = window(current_page, total_pages, max_visible);

    let mut tokens = vec![PageToken::Page(1)];
    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend(pages(start, end));
    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total_pages as u64));
    tokens
}

/// Returns the inclusive range of pages shown between the two anchors.
///
/// Requires `5 <= max_visible < total_pages` and `1 <= current_page <= total_pages`.
fn window(current_page: i64, total_pages: i64, max_visible: i64) -> (i64, i64) {
    // first, last, current and one ellipsis on each side
    let side_pages = (max_visible - 5) / 2;

    let mut start = (current_page - side_pages).max(2);
    let mut end = current_page
        .saturating_add(side_pages)
        .min(total_pages - 1);

    if current_page <= side_pages + 3 {
        end = (total_pages - 1).min(max_visible - 2);
    }
    if current_page >= total_pages - side_pages - 1 {
        start = (total_pages - max_visible + 3).max(2);
    }

    (start, end)
}

fn pages(start: i64, end: i64) -> impl Iterator<Item = PageToken> {
    (start..=end).map(|page| PageToken::Page(page as u64))
}
