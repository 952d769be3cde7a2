//! Scaffolding orchestration.
//! Drives the create run end to end: load the content definition, validate
//! it, then dispatch each plugin entry to its generator. Plugin kinds map
//! to generators at compile time; there is no runtime registry.

use crate::argspec;
use crate::container::Materializer;
use crate::definition::{
    expand_path, load_definition, parse_definition, Collection, PluginSpec, PluginType,
};
use crate::display::{report, Status};
use crate::docstring;
use crate::error::{Error, Result};
use crate::renderer::MiniJinjaRenderer;
use crate::schema;
use log::debug;
use std::path::{Path, PathBuf};

/// Container-relative source paths the network generator may regenerate
/// over existing destination files. Everything else is written only when
/// absent, so developer edits survive re-scaffolding.
const NETWORK_BASE_ALLOW_OVERWRITE: [&str; 2] = [
    "plugins/module_utils/network/{{ network_os }}/argspec/{{ resource }}/{{ resource }}.py.j2",
    "plugins/modules/{{ network_os }}_{{ resource }}.py.j2",
];

/// Shared capability contract for all plugin generators.
pub trait Scaffolder {
    /// Scaffolds one plugin into the collection tree.
    fn run(&self) -> Result<()>;
}

/// Generator for network plugin types. The type-specific container rides
/// on top of the shared `module_network_base` container.
pub struct NetworkScaffolder<'a> {
    collection_path: PathBuf,
    template_data: serde_json::Value,
    materializer: &'a Materializer<'a>,
    /// Container holding the type-specific templates
    container: &'static str,
}

impl<'a> NetworkScaffolder<'a> {
    /// Assembles a network generator: resolves the docstring, derives the
    /// argument spec and builds the template context.
    pub fn new(
        plugin: &PluginSpec,
        collection: &Collection,
        materializer: &'a Materializer<'a>,
        container: &'static str,
    ) -> Result<Self> {
        let collection_path = expand_path(&collection.path);
        let module_path = collection_path
            .join("plugins")
            .join("modules")
            .join(format!("{}_{}.py", collection.name, plugin.name));
        let docstring =
            docstring::resolve(plugin.docstring.as_deref(), &module_path, &plugin.name)?;

        let spec = argspec::translate(&docstring)?;
        let import_path = format!(
            "ansible_collections.{}.{}.plugins.module_utils.network",
            collection.namespace, collection.name
        );

        let mut template_data = serde_json::json!({
            "argspec": argspec::render(&spec),
            "import_path": import_path,
            "namespace": collection.namespace,
            "collection_name": collection.name,
            "resource": plugin.name,
            "network_os": collection.name,
            "documentation": docstring,
        });
        // type-specific definition fields ride along, engine keys win
        if let Some(data) = template_data.as_object_mut() {
            for (key, value) in &plugin.extra {
                data.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }

        Ok(Self { collection_path, template_data, materializer, container })
    }
}

impl Scaffolder for NetworkScaffolder<'_> {
    fn run(&self) -> Result<()> {
        self.materializer.materialize(
            "module_network_base",
            &self.collection_path,
            &self.template_data,
            &NETWORK_BASE_ALLOW_OVERWRITE,
        )?;
        self.materializer.materialize(
            self.container,
            &self.collection_path,
            &self.template_data,
            &[],
        )
    }
}

/// Dispatches one plugin entry to its generator.
///
/// Unimplemented kinds are never passed here; the caller skips them.
fn scaffold_plugin(
    plugin: &PluginSpec,
    collection: &Collection,
    materializer: &Materializer<'_>,
) -> Result<()> {
    let generator = match plugin.plugin_type {
        PluginType::ModuleNetworkCli => {
            NetworkScaffolder::new(plugin, collection, materializer, "module_network_cli")?
        }
        PluginType::ModuleNetworkNetconf => {
            NetworkScaffolder::new(plugin, collection, materializer, "module_network_netconf")?
        }
        other => {
            debug!("no generator for plugin type {other}");
            return Ok(());
        }
    };
    generator.run()
}

/// Runs the create action: load, validate, then scaffold every plugin in
/// definition order. The first generator failure aborts the remaining
/// loop; files written by earlier plugins are not rolled back.
pub fn create(definition_file: &Path, template_root: PathBuf) -> Result<()> {
    report(Status::Header, "- launching create action");

    let definition_path = expand_path(&definition_file.display().to_string());
    report(
        Status::Header,
        &format!("- loading the content definition file at {}", definition_path.display()),
    );
    let raw = load_definition(&definition_path)?;

    // only a genuinely empty plugin list is a no-op; a malformed `plugins`
    // value falls through so schema validation can reject it
    let no_plugins = match raw.get("plugins") {
        None | Some(serde_json::Value::Null) => true,
        Some(serde_json::Value::Array(plugins)) => plugins.is_empty(),
        Some(_) => false,
    };
    if no_plugins {
        report(Status::Warning, "WARNING: No content to scaffold. Exiting plugforge.");
        return Ok(());
    }

    report(Status::Header, "- validating the loaded content definition");
    let errors = schema::validate(&raw)?;
    if !errors.is_empty() {
        return Err(Error::SchemaValidation {
            path: definition_path.display().to_string(),
            errors,
        });
    }

    let definition = parse_definition(&raw)?;
    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(template_root, &renderer);

    for plugin in &definition.plugins {
        if !plugin.plugin_type.is_implemented() {
            debug!("skipping unimplemented plugin type {}", plugin.plugin_type);
            continue;
        }
        report(
            Status::Normal,
            &format!(
                "- start scaffolding plugin {}_{} of type {}",
                definition.collection.name, plugin.name, plugin.plugin_type
            ),
        );
        scaffold_plugin(plugin, &definition.collection, &materializer)?;
    }

    report(Status::Header, "- all scaffolding tasks completed, exiting plugforge");
    Ok(())
}
