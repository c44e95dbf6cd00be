use nullscope::metadata::fixtures::builtin_registry;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_output, print_table, Align},
};

#[derive(Debug, Serialize)]
struct TypeEntry {
    name: String,
    properties: usize,
    annotations: usize,
}

#[derive(Debug, Serialize)]
struct TypesOutput {
    types: Vec<TypeEntry>,
    count: usize,
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let registry = builtin_registry()?;

    let entries: Vec<TypeEntry> = registry
        .iter()
        .map(|descriptor| TypeEntry {
            name: descriptor.name().to_string(),
            properties: descriptor.properties().len(),
            annotations: descriptor.attachment_count(),
        })
        .collect();

    let count = entries.len();
    let output = TypesOutput {
        types: entries,
        count,
    };

    print_output(&output, opts, |out| {
        print_table(
            &[
                ("Name", Align::Left),
                ("Props", Align::Right),
                ("Annotations", Align::Right),
            ],
            out.types
                .iter()
                .map(|t| {
                    vec![
                        t.name.clone(),
                        t.properties.to_string(),
                        t.annotations.to_string(),
                    ]
                })
                .collect(),
        );
        println!();
        println!("{} types registered", out.count);
    })
}
