//! Template unit orchestration.
//! Selects template units from the loaded configurations and runs each one
//! (pre hooks, file generation, post hooks), containing failures per unit.

use indexmap::IndexSet;
use log::{debug, error, info};

use crate::config::{TemplateConfig, TemplateUnit};
use crate::context::{base_context, merge_scopes, to_context, Variables};
use crate::error::{Error, Result};
use crate::hooks::run_hooks;
use crate::processor::{process_tree, FileOperation};
use crate::renderer::{render_path, TemplateRenderer};
use crate::unaltered::UnalteredMatcher;

/// Outcome counts of an update run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl UpdateReport {
    /// True when no unit or selection failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record_failure(&mut self, name: &str, err: &Error) {
        error!("{name}: {err}");
        self.failed += 1;
    }
}

/// Runs template units against a fixed set of invocation-wide variables.
pub struct Updater<'a> {
    engine: &'a dyn TemplateRenderer,
    globals: Variables,
}

impl<'a> Updater<'a> {
    /// Creates an updater.
    ///
    /// # Arguments
    /// * `engine` - Template engine used for paths, files and hooks
    /// * `theme` - Theme data, exposed as `theme`
    /// * `env` - Environment snapshot, exposed as `env`
    /// * `variables` - Invocation variables, overriding `theme` and `env`
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        theme: serde_json::Value,
        env: &indexmap::IndexMap<String, String>,
        variables: &Variables,
    ) -> Self {
        let globals = merge_scopes(&[&base_context(theme, env), variables]);
        Self { engine, globals }
    }

    /// Builds the substitution context of a unit.
    pub fn unit_context(&self, config: &TemplateConfig, unit: &TemplateUnit) -> serde_json::Value {
        to_context(merge_scopes(&[&self.globals, &config.variables, &unit.variables]))
    }

    /// Runs one unit: pre hooks, file generation, post hooks.
    ///
    /// Hooks run even when the unit has no template or destination.
    pub fn update_unit(
        &self,
        config: &TemplateConfig,
        unit: &TemplateUnit,
    ) -> Result<Vec<FileOperation>> {
        let context = self.unit_context(config, unit);
        run_hooks(self.engine, &unit.pre_hook, &context)?;
        let operations = self.generate(unit, &context)?;
        run_hooks(self.engine, &unit.post_hook, &context)?;
        Ok(operations)
    }

    fn generate(
        &self,
        unit: &TemplateUnit,
        context: &serde_json::Value,
    ) -> Result<Vec<FileOperation>> {
        let Some((template, destination)) = unit.paths() else {
            debug!("No template or destination set, skipping generation");
            return Ok(Vec::new());
        };

        let source = render_path(self.engine, template, context)?;
        let destination = render_path(self.engine, destination, context)?;
        let matcher = UnalteredMatcher::new(&unit.unaltered)?;

        process_tree(self.engine, &source, &destination, &matcher, context)
    }

    fn run_unit(
        &self,
        name: &str,
        config: &TemplateConfig,
        unit: &TemplateUnit,
        report: &mut UpdateReport,
    ) {
        info!("Updating '{name}'");
        match self.update_unit(config, unit) {
            Ok(operations) => {
                for operation in &operations {
                    debug!("{operation}");
                }
                report.succeeded += 1;
            }
            Err(e) => report.record_failure(name, &e),
        }
    }

    /// Runs every unit of every configuration in declaration order.
    pub fn update_all(&self, configs: &[TemplateConfig]) -> UpdateReport {
        let mut report = UpdateReport::default();
        for config in configs {
            for (name, unit) in &config.templates {
                self.run_unit(name, config, unit, &mut report);
            }
        }
        report
    }

    /// Runs the named units, in the order given, in every configuration
    /// that defines them. Names no configuration defines are reported.
    pub fn update_selected<S: AsRef<str>>(
        &self,
        configs: &[TemplateConfig],
        names: &[S],
    ) -> UpdateReport {
        let names: IndexSet<&str> = names.iter().map(AsRef::as_ref).collect();
        let mut found = IndexSet::new();
        let mut report = UpdateReport::default();

        for config in configs {
            for name in &names {
                match config.templates.get(*name) {
                    Some(unit) => {
                        found.insert(*name);
                        self.run_unit(name, config, unit, &mut report);
                    }
                    None => debug!("Template '{name}' is not defined in this configuration"),
                }
            }
        }

        for name in names.difference(&found) {
            let err = Error::SelectionError { kind: "template", name: name.to_string() };
            report.record_failure(name, &err);
        }
        report
    }

    /// Runs the named pipelines in every configuration that defines them.
    /// Units run in the pipeline's declared order; a unit listed twice runs
    /// once. Unknown pipelines and undefined units are reported.
    pub fn update_pipelines<S: AsRef<str>>(
        &self,
        configs: &[TemplateConfig],
        names: &[S],
    ) -> UpdateReport {
        let names: IndexSet<&str> = names.iter().map(AsRef::as_ref).collect();
        let mut found = IndexSet::new();
        let mut report = UpdateReport::default();

        for config in configs {
            for name in &names {
                let Some(pipeline) = config.pipelines.get(*name) else {
                    debug!("Pipeline '{name}' is not defined in this configuration");
                    continue;
                };
                found.insert(*name);
                info!("Running pipeline '{name}'");

                let units: IndexSet<&str> = pipeline.iter().map(String::as_str).collect();
                for unit_name in units {
                    match config.templates.get(unit_name) {
                        Some(unit) => self.run_unit(unit_name, config, unit, &mut report),
                        None => {
                            let err = Error::SelectionError {
                                kind: "template",
                                name: unit_name.to_string(),
                            };
                            report.record_failure(name, &err);
                        }
                    }
                }
            }
        }

        for name in names.difference(&found) {
            let err = Error::SelectionError { kind: "pipeline", name: name.to_string() };
            report.record_failure(name, &err);
        }
        report
    }
}
