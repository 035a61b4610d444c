use paginator_models::{
    pagination::PageState,
    window::{PageToken, WindowConfig},
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PageWindowService: Send + Sync + 'static {
    /// Returns the page tokens to render for the given position.
    ///
    /// This never fails: out of range values for `current_page` are clamped and
    /// degenerate inputs produce a short (or empty) sequence.
    fn generate(&self, current_page: i64, total_pages: i64, max_visible: i64) -> Vec<PageToken>;

    /// Same as [`generate`](Self::generate), for an already validated state.
    fn generate_for(&self, state: PageState, config: WindowConfig) -> Vec<PageToken> {
        self.generate(
            i64::try_from(state.current_page).unwrap_or(i64::MAX),
            i64::try_from(state.total_pages).unwrap_or(i64::MAX),
            i64::try_from(*config.max_visible).unwrap_or(i64::MAX),
        )
    }
}

#[cfg(feature = "mock")]
impl MockPageWindowService {
    pub fn with_generate_for(
        mut self,
        state: PageState,
        config: WindowConfig,
        result: Vec<PageToken>,
    ) -> Self {
        self.expect_generate_for()
            .once()
            .with(
                mockall::predicate::eq(state),
                mockall::predicate::eq(config),
            )
            .return_once(|_, _| result);
        self
    }
}
