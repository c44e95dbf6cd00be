use anyhow::Context;
use nullscope::{
    inspector::visible_properties,
    metadata::{
        fixtures::builtin_registry, nullability::describe_attribute, typesystem::TypeDescriptor,
    },
};
use serde::Serialize;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
struct PropertyEntry {
    owner: String,
    name: String,
    type_name: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct DumpOutput {
    properties: Vec<PropertyEntry>,
}

/// Dump every registered type, in registration order.
pub fn run_all(opts: &GlobalOptions) -> anyhow::Result<()> {
    let registry = builtin_registry()?;

    let mut entries = Vec::new();
    for descriptor in registry.iter() {
        entries.extend(collect(descriptor));
    }

    render(entries, opts)
}

/// Dump a single registered type by name.
pub fn run(type_name: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let registry = builtin_registry()?;
    let descriptor = registry
        .find(type_name)
        .with_context(|| format!("unknown type: {type_name}"))?;

    render(collect(descriptor), opts)
}

fn collect(descriptor: &TypeDescriptor) -> Vec<PropertyEntry> {
    log::debug!("dumping public properties of {}", descriptor.name());

    visible_properties(descriptor)
        .map(|p| PropertyEntry {
            owner: descriptor.name().to_string(),
            name: p.name.clone(),
            type_name: p.type_name.clone(),
            description: describe_attribute(descriptor.attribute(&p.name)),
        })
        .collect()
}

fn render(entries: Vec<PropertyEntry>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let output = DumpOutput {
        properties: entries,
    };

    print_output(&output, opts, |out| {
        for entry in &out.properties {
            println!(
                "{}.{}: {}, {}",
                entry.owner, entry.name, entry.type_name, entry.description
            );
        }
    })
}
