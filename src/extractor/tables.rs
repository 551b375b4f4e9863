//! Table translation.
//!
//! Tables are cloned and translated one cell at a time so a phrase can never
//! span two cells.

use crate::dictionary::Direction;
use crate::dom::{self, Selection};
use crate::patterns::{CELL_SELECTOR, NEGATIVE_CHANGE, NEGATIVE_CHANGE_CLASS, TABLE_SELECTOR};
use crate::translator::Translator;

/// Serialize a translated copy of `table`.
///
/// Cell contents are replaced by their translated text, so inline markup
/// inside cells is flattened.
pub(crate) fn translate_table(
    table: &Selection,
    translator: &Translator,
    direction: Direction,
    mark_negative: bool,
) -> String {
    let copy = dom::clone_element(table);
    let cloned = copy.select(TABLE_SELECTOR).first();

    for cell in cloned.select(CELL_SELECTOR).iter() {
        let translated = translator.translate(&dom::text_content(&cell), direction);
        dom::set_text(&cell, &translated);

        if mark_negative && NEGATIVE_CHANGE.is_match(translated.trim()) {
            dom::add_class(&cell, NEGATIVE_CHANGE_CLASS);
        }
    }

    dom::outer_html(&cloned).to_string()
}
