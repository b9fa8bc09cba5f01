use super::Visitor;
use crate::core::{Activity, Destination};

/// Exports the walked subgraph as a Graphviz `digraph`.
///
/// Terminal transitions point at a single `None` point-shaped node.
#[derive(Clone, Debug)]
pub struct DotExport {
    name: String,
    edges: Vec<String>,
    has_terminal: bool,
}

impl DotExport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: Vec::new(),
            has_terminal: false,
        }
    }
}

impl Visitor for DotExport {
    type Output = String;

    fn visit(&mut self, from: &str, activity: &Activity, to: &Destination) {
        if to.is_terminal() {
            self.has_terminal = true;
        }
        self.edges.push(format!(
            "  {} -> {} [label={}];",
            quote(from),
            quote(&to.to_string()),
            quote(activity.label())
        ));
    }

    fn finish(self) -> Self::Output {
        let mut out = format!("digraph {} {{\n", quote(&self.name));
        if self.has_terminal {
            out.push_str("  \"None\" [shape=point];\n");
        }
        for edge in &self.edges {
            out.push_str(edge);
            out.push('\n');
        }
        out.push('}');
        out
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ActivityBuilder;

    #[test]
    fn exports_edges_with_labels() {
        let ask = ActivityBuilder::new("PedirAprovarPDM")
            .describe("Solicitar Aprovação")
            .from("EMRASCUNHO")
            .to("AGUARDANDOAPROVAÇÃO")
            .build()
            .unwrap();
        let erase = ActivityBuilder::new("ApagarRascunho")
            .from("EMRASCUNHO")
            .build()
            .unwrap();

        let mut dot = DotExport::new("BarraBotoesPDM");
        dot.visit("EMRASCUNHO", &ask, ask.destination());
        dot.visit("EMRASCUNHO", &erase, erase.destination());

        assert_eq!(
            dot.finish(),
            "digraph \"BarraBotoesPDM\" {\n\
             \x20 \"None\" [shape=point];\n\
             \x20 \"EMRASCUNHO\" -> \"AGUARDANDOAPROVAÇÃO\" [label=\"Solicitar Aprovação\"];\n\
             \x20 \"EMRASCUNHO\" -> \"None\" [label=\"ApagarRascunho\"];\n\
             }"
        );
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
