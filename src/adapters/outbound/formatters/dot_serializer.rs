use crate::graph_building::domain::DependencyGraph;
use crate::ports::outbound::{GraphSerializer, RenderOptions};
use crate::shared::Result;
use std::io::Write;

/// DotSerializer adapter writing graphs in Graphviz DOT syntax
///
/// Unresolved artifacts are drawn with a dashed outline.
pub struct DotSerializer;

impl DotSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSerializer for DotSerializer {
    fn serialize(
        &self,
        graph: &DependencyGraph,
        out: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()> {
        writeln!(out, "digraph \"dependencies\" {{")?;
        writeln!(out, "  node [shape=box];")?;

        for (index, vertex) in graph.vertices().enumerate() {
            let mut attributes = vec![format!(
                "label=\"{}\"",
                escape_dot(&options.renderer.label(vertex))
            )];
            for (name, value) in options.attributes(vertex) {
                attributes.push(format!("{}=\"{}\"", name, escape_dot(&value.to_string())));
            }
            if !vertex.artifact().is_resolved() {
                attributes.push("style=dashed".to_string());
            }
            writeln!(out, "  n{} [{}];", index, attributes.join(", "))?;
        }

        for view in graph.edges() {
            if options.show_edge_labels {
                writeln!(
                    out,
                    "  n{} -> n{} [label=\"{}\"];",
                    view.source_index,
                    view.target_index,
                    escape_dot(&view.edge.label())
                )?;
            } else {
                writeln!(out, "  n{} -> n{};", view.source_index, view.target_index)?;
            }
        }

        writeln!(out, "}}")?;
        out.flush()?;
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "dot"
    }
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
