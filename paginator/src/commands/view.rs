use anyhow::Context;
use clap::{Args, ValueEnum};
use paginator_config::Config;
use paginator_core_pagination_contracts::{PageControl, PaginationService, PaginationView};
use paginator_models::pagination::{PageNumber, PageSize, PaginationScope};

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct ViewCommand {
    /// The list to paginate
    #[arg(value_enum)]
    scope: Scope,
    /// The current page, defaults to the first page
    #[arg(short, long)]
    page: Option<u64>,
    /// Items per page, defaults to the list's default page size
    #[arg(short = 's', long)]
    page_size: Option<u64>,
    /// Total number of items in the list
    #[arg(short, long)]
    total_items: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scope {
    Events,
    Resources,
}

impl From<Scope> for PaginationScope {
    fn from(value: Scope) -> Self {
        match value {
            Scope::Events => Self::Events,
            Scope::Resources => Self::Resources,
        }
    }
}

impl ViewCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let provider = Provider::new(config);
        let scope = self.scope.into();

        let mut query = provider.pagination.default_query(scope);
        if let Some(page) = self.page {
            query.page = PageNumber::try_new(page).context("Invalid page")?;
        }
        if let Some(page_size) = self.page_size {
            query.page_size = PageSize::try_new(page_size).context("Invalid page size")?;
        }

        let view = provider.pagination.view(scope, query, self.total_items)?;
        println!("{}", render_view(&view));

        Ok(())
    }
}

/// Renders the controls as they would appear below the list.
pub fn render_view(view: &PaginationView) -> String {
    let controls = view
        .controls
        .iter()
        .map(|control| match control {
            PageControl::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "…".into(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let previous = if view.previous.enabled() { "‹" } else { "-" };
    let next = if view.next.enabled() { "›" } else { "-" };

    let page_sizes = view
        .page_size_options
        .iter()
        .map(|size| {
            if *size == view.query.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "Page {} of {} ({} items)\n{previous} {controls} {next}\nPer page: {page_sizes}",
        view.current_page(),
        view.total_pages,
        view.total_items,
    )
}
