use paginator_models::window::PageToken::{self, Ellipsis, Page};

mod examples;

fn render(tokens: &[PageToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn numbers(tokens: &[PageToken]) -> Vec<u64> {
    tokens.iter().filter_map(|token| token.page()).collect()
}

fn ellipses(tokens: &[PageToken]) -> usize {
    tokens.iter().filter(|token| token.is_ellipsis()).count()
}

fn all_pages(total_pages: u64) -> Vec<PageToken> {
    (1..=total_pages).map(Page).collect()
}

const E: PageToken = Ellipsis;
