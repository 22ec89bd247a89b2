use strum::IntoEnumIterator;
use tracing::debug;

use super::markup::Element;
use super::view::{AlertLog, TableView, HAND_ELEMENT_ID};
use crate::cards::Card;
use crate::table::{Row, Table};

pub const CARD_WIDTH: u32 = 100;
pub const CARD_HEIGHT: u32 = 150;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_SIZE: u32 = 20;

/// Draws one card face: a rounded white card with the rank and suit in the
/// top-left corner and again, upside down, in the bottom-right corner.
pub fn card_svg(card: &Card) -> Element {
    let label = card.to_string();
    let color = card.color();

    let background = Element::new("rect")
        .attr("width", CARD_WIDTH)
        .attr("height", CARD_HEIGHT)
        .attr("fill", "white")
        .attr("stroke", "black")
        .attr("stroke-width", 2)
        .attr("rx", 10)
        .attr("ry", 10);

    let upright = Element::new("text")
        .attr("x", 10)
        .attr("y", 30)
        .attr("font-size", FONT_SIZE)
        .attr("fill", color)
        .text(&label);

    let inverted = Element::new("text")
        .attr("x", 70)
        .attr("y", 140)
        .attr("font-size", FONT_SIZE)
        .attr("fill", color)
        .attr("transform", "rotate(180, 70, 140)")
        .text(&label);

    Element::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("width", CARD_WIDTH)
        .attr("height", CARD_HEIGHT)
        .child(background)
        .child(upright)
        .child(inverted)
}

/// HTML view with SVG cards and the element ids the game page expects
/// (`hand`, `player-top`, `player-middle`, `player-bottom` and the three
/// action buttons).
#[derive(Debug, Clone)]
pub struct SvgTableView {
    hand: Element,
    rows: Vec<(Row, Element)>,
    alerts: AlertLog,
}

impl Default for SvgTableView {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgTableView {
    pub fn new() -> Self {
        let rows = Row::iter()
            .map(|row| {
                let container = Element::new("div")
                    .attr("id", row.element_id())
                    .attr("class", "row");
                (row, container)
            })
            .collect();

        Self {
            hand: Element::new("div").attr("id", HAND_ELEMENT_ID),
            rows,
            alerts: AlertLog::default(),
        }
    }

    pub fn hand_container(&self) -> &Element {
        &self.hand
    }

    pub fn row_container(&self, row: Row) -> Option<&Element> {
        self.rows.iter().find(|(r, _)| *r == row).map(|(_, e)| e)
    }

    /// The whole board as one element tree
    pub fn document(&self) -> Element {
        let controls = Element::new("div")
            .attr("id", "controls")
            .child(Element::new("button").attr("id", "start").text("Start game"))
            .child(Element::new("button").attr("id", "next").text("Next round"))
            .child(
                Element::new("button")
                    .attr("id", "save-github")
                    .text("Save to GitHub"),
            );

        let table = self
            .rows
            .iter()
            .fold(Element::new("div").attr("id", "player-table"), |t, (_, e)| {
                t.child(e.clone())
            });

        Element::new("main")
            .attr("id", "ofc-table")
            .child(controls)
            .child(self.hand.clone())
            .child(table)
    }
}

impl TableView for SvgTableView {
    fn render_hand(&mut self, hand: &[Card]) {
        debug!(cards = hand.len(), "Rendering hand as SVG");
        self.hand.clear_children();

        for card in hand {
            let mut node = card_svg(card);
            node.add_class("card");
            node.set_attr("draggable", "true");
            node.set_attr("data-card", card.code());
            self.hand.append_child(node);
        }
    }

    fn render_table(&mut self, table: &Table) {
        debug!(cards = table.len(), "Rendering table as SVG");
        for (row, container) in self.rows.iter_mut() {
            container.clear_children();
            for card in table.row(*row) {
                container.append_child(card_svg(card));
            }
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message);
    }

    fn drain_alerts(&mut self) -> Vec<String> {
        self.alerts.drain()
    }

    fn snapshot(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>OFC table</title></head><body>{}</body></html>\n",
            self.document().to_markup()
        )
    }
}
