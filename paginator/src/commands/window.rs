use clap::Args;
use paginator_config::Config;
use paginator_core_window_contracts::PageWindowService;
use paginator_models::window::PageToken;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct WindowCommand {
    /// The current page (clamped into the available pages)
    #[arg(short, long, allow_negative_numbers = true)]
    current: i64,
    /// The total number of pages
    #[arg(short, long, allow_negative_numbers = true)]
    total: i64,
    /// Maximum number of buttons, defaults to `window.max_visible` from the config
    #[arg(short, long, allow_negative_numbers = true)]
    max_visible: Option<i64>,
}

impl WindowCommand {
    pub fn invoke(self, config: &Config) {
        let provider = Provider::new(config);
        let max_visible = self
            .max_visible
            .unwrap_or_else(|| (*config.window.max_visible).try_into().unwrap_or(i64::MAX));

        let tokens = provider
            .window
            .generate(self.current, self.total, max_visible);

        let current = u64::try_from(self.current.clamp(1, self.total.max(1))).unwrap_or(1);
        println!("{}", render_tokens(&tokens, current));
    }
}

/// Renders the tokens on a single line with the current page in brackets.
pub fn render_tokens(tokens: &[PageToken], current_page: u64) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(number) if *number == current_page => format!("[{number}]"),
            token => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
