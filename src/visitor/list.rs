use super::Visitor;
use crate::core::{Activity, Destination};

/// Default visitor: renders each transition as
/// `"<from>--[<label>]--><to>"`, with `None` for terminal transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionList {
    transitions: Vec<String>,
}

impl TransitionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions rendered so far.
    pub fn transitions(&self) -> &[String] {
        &self.transitions
    }
}

impl Visitor for TransitionList {
    type Output = Vec<String>;

    fn visit(&mut self, from: &str, activity: &Activity, to: &Destination) {
        self.transitions
            .push(format!("{from}--[{}]-->{to}", activity.label()));
    }

    fn finish(self) -> Self::Output {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ActivityBuilder;

    #[test]
    fn renders_label_and_terminal_marker() {
        let erase = ActivityBuilder::new("ApagarRascunho")
            .describe("Apagar Rascunho")
            .from("EMRASCUNHO")
            .build()
            .unwrap();
        let ask = ActivityBuilder::new("PedirAprovarPDM")
            .from("EMRASCUNHO")
            .to("AGUARDANDOAPROVAÇÃO")
            .build()
            .unwrap();

        let mut list = TransitionList::new();
        list.visit("EMRASCUNHO", &erase, erase.destination());
        list.visit("EMRASCUNHO", &ask, ask.destination());
        assert_eq!(list.transitions().len(), 2);

        assert_eq!(
            list.finish(),
            vec![
                "EMRASCUNHO--[Apagar Rascunho]-->None",
                "EMRASCUNHO--[PedirAprovarPDM]-->AGUARDANDOAPROVAÇÃO",
            ]
        );
    }
}
