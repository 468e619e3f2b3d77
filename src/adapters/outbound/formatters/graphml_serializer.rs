use crate::graph_building::domain::DependencyGraph;
use crate::ports::outbound::{GraphSerializer, RenderOptions};
use crate::shared::Result;
use std::io::Write;

const GRAPHML_NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";

const NODE_LABEL_KEY: &str = "v_label";
const EDGE_LABEL_KEY: &str = "e_label";

/// GraphMlSerializer adapter writing graphs as GraphML documents
///
/// Node ids are `n0..` in vertex order and edge ids `e0..` in edge order.
/// Node data keys are declared from the renderer's attributes; the edge
/// label key is always declared and only filled when edge labels are shown.
pub struct GraphMlSerializer;

impl GraphMlSerializer {
    pub fn new() -> Self {
        Self
    }

    fn write_keys(
        &self,
        graph: &DependencyGraph,
        out: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()> {
        writeln!(
            out,
            r#"  <key id="{}" for="node" attr.name="label" attr.type="string"/>"#,
            NODE_LABEL_KEY
        )?;

        if let Some(root) = graph.root() {
            for (name, value) in options.attributes(root) {
                writeln!(
                    out,
                    r#"  <key id="v_{}" for="node" attr.name="{}" attr.type="{}"/>"#,
                    escape_xml(name),
                    escape_xml(name),
                    value.type_name()
                )?;
            }
        }

        writeln!(
            out,
            r#"  <key id="{}" for="edge" attr.name="label" attr.type="string"/>"#,
            EDGE_LABEL_KEY
        )?;
        Ok(())
    }
}

impl Default for GraphMlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSerializer for GraphMlSerializer {
    fn serialize(
        &self,
        graph: &DependencyGraph,
        out: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()> {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(out, r#"<graphml xmlns="{}">"#, GRAPHML_NAMESPACE)?;
        self.write_keys(graph, out, options)?;
        writeln!(out, r#"  <graph id="dependencies" edgedefault="directed">"#)?;

        for (index, vertex) in graph.vertices().enumerate() {
            writeln!(out, r#"    <node id="n{}">"#, index)?;
            writeln!(
                out,
                r#"      <data key="{}">{}</data>"#,
                NODE_LABEL_KEY,
                escape_xml(&options.renderer.label(vertex))
            )?;
            for (name, value) in options.attributes(vertex) {
                writeln!(
                    out,
                    r#"      <data key="v_{}">{}</data>"#,
                    escape_xml(name),
                    escape_xml(&value.to_string())
                )?;
            }
            writeln!(out, "    </node>")?;
        }

        for (index, view) in graph.edges().enumerate() {
            if options.show_edge_labels {
                writeln!(
                    out,
                    r#"    <edge id="e{}" source="n{}" target="n{}">"#,
                    index, view.source_index, view.target_index
                )?;
                writeln!(
                    out,
                    r#"      <data key="{}">{}</data>"#,
                    EDGE_LABEL_KEY,
                    escape_xml(&view.edge.label())
                )?;
                writeln!(out, "    </edge>")?;
            } else {
                writeln!(
                    out,
                    r#"    <edge id="e{}" source="n{}" target="n{}"/>"#,
                    index, view.source_index, view.target_index
                )?;
            }
        }

        writeln!(out, "  </graph>")?;
        writeln!(out, "</graphml>")?;
        out.flush()?;
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "graphml"
    }
}

/// Escapes the five XML special characters
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
