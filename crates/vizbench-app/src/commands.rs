//! Subcommand implementations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use vizbench_bundle::{
    read_bundle, BundleLoader, BundleSource, LoadContext, LoadReport, SearchPathResolver,
};
use vizbench_common::VizbenchError;
use vizbench_config::schema::VizbenchConfig;
use vizbench_panes::{ContainerKind, GridOptions, PaneContainer, PaneGrid, StaticResourceFactory};
use vizbench_platform::{bundle_search_roots, UiThread};

/// Options for `vizbench load`.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub bundle: String,
    pub inline: bool,
    pub vars: Vec<(String, String)>,
    pub panes: Option<usize>,
    pub fixed: bool,
}

/// Grid options from the layout config, with command-line overrides.
pub fn grid_options(config: &VizbenchConfig, panes: Option<usize>, fixed: bool) -> GridOptions {
    let max_panes = config.layout.max_panes as usize;
    let initial_panes = panes.unwrap_or(config.layout.initial_panes as usize).max(1);
    GridOptions {
        elastic: !fixed && config.layout.elastic,
        max_panes: max_panes.max(initial_panes),
        initial_panes,
        kind: ContainerKind::Editor,
    }
}

/// Load a bundle into a fresh in-memory grid and return the report.
pub fn load(config: &VizbenchConfig, opts: &LoadOptions) -> Result<LoadReport, VizbenchError> {
    let source = if opts.inline {
        BundleSource::Inline(opts.bundle.clone())
    } else {
        BundleSource::File(opts.bundle.clone())
    };
    let variables: HashMap<String, String> = opts.vars.iter().cloned().collect();

    let mut roots = bundle_search_roots(&config.bundles)?;
    roots.push(PathBuf::from("."));
    let resolver = SearchPathResolver::new(roots);

    let bundle = read_bundle(&source, &variables, &resolver)?;
    info!(
        bundle = bundle.name().unwrap_or("<unnamed>"),
        displays = bundle.len(),
        "bundle read"
    );

    let ui = Arc::new(UiThread::start("vizbench-ui")?);
    let grid: Arc<dyn PaneContainer> = Arc::new(PaneGrid::with_options(
        "editor-1",
        grid_options(config, opts.panes, opts.fixed),
    ));
    let ctx = LoadContext::new(ui, Arc::new(StaticResourceFactory))
        .with_config(config.loader.clone());

    let report = BundleLoader::new(grid, Arc::new(bundle), ctx)
        .schedule()?
        .join()?;
    Ok(report)
}

pub fn report_to_json(report: &LoadReport) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {e}\"}}"))
}
