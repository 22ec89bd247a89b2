use ofc_table::{render::Element, Card, Row, SvgTableView, TableController};

// ============================================================================
// Board Assertions
// ============================================================================

/// Checks what an SVG board shows, by element id, like a browser test would
pub struct BoardAssertion {
    document: Element,
}

impl BoardAssertion {
    pub fn of(controller: &TableController<SvgTableView>) -> Self {
        Self {
            document: controller.view().document(),
        }
    }

    fn cards_in(&self, id: &str) -> Vec<String> {
        let container = self
            .document
            .find_by_id(id)
            .unwrap_or_else(|| panic!("missing #{id}"));
        container
            .children()
            .iter()
            .map(|svg| {
                svg.children()
                    .iter()
                    .find(|c| c.name() == "text")
                    .and_then(|t| t.text_content())
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    pub fn hand_shows(self, cards: &[&str]) -> Self {
        let expected: Vec<String> = cards.iter().map(|c| label(c)).collect();
        assert_eq!(self.cards_in("hand"), expected, "hand contents");
        self
    }

    pub fn row_shows(self, row: Row, cards: &[&str]) -> Self {
        let expected: Vec<String> = cards.iter().map(|c| label(c)).collect();
        assert_eq!(
            self.cards_in(&row.element_id()),
            expected,
            "{} contents",
            row.element_id()
        );
        self
    }

    pub fn table_is_empty(self) -> Self {
        self.row_shows(Row::Top, &[])
            .row_shows(Row::Middle, &[])
            .row_shows(Row::Bottom, &[])
    }
}

fn label(code: &str) -> String {
    Card::from_string(code)
        .unwrap_or_else(|e| panic!("bad card in test: {e}"))
        .to_string()
}
