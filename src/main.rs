//! theme-template's application entry point.
//! Parses arguments, gathers the theme and environment, loads the
//! configuration and dispatches to the selected update mode.

use log::info;

use theme_template::{
    cli::{get_args, Args, Selection},
    config::load_configs,
    context::{env_snapshot, Variables},
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    theme::load_theme,
    updater::Updater,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Returns
/// * `Result<bool>` - Whether every selected unit was updated successfully
///
/// # Flow
/// 1. Loads the theme and snapshots the environment
/// 2. Loads every configuration document
/// 3. Runs the selected units, pipelines or everything
fn run(args: Args) -> Result<bool> {
    let engine = MiniJinjaRenderer::new();
    let theme = load_theme(args.theme_path())?;
    let env = env_snapshot();
    let variables: Variables = args
        .variables
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
        .collect();

    let configs = load_configs(args.config_path());
    let updater = Updater::new(&engine, theme, &env, &variables);

    let report = match args.selection() {
        Selection::All => updater.update_all(&configs),
        Selection::Pipelines(names) => updater.update_pipelines(&configs, &names),
        Selection::Templates(names) => updater.update_selected(&configs, &names),
    };

    info!("{} template(s) updated, {} failed", report.succeeded, report.failed);
    Ok(report.is_success())
}
