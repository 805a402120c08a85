use crate::ui::ScrollContainer;

/// Scrolls the uploads table so the first highlighted row sits mid-view.
/// Returns the applied scroll offset, or `None` when nothing is highlighted.
pub fn centre_first_highlighted(table: &dyn ScrollContainer) -> Option<f64> {
    let first = table.highlighted_row_offsets().into_iter().next()?;
    let top = (first - table.client_height() / 2.0).max(0.0);
    table.set_scroll_top(top);
    Some(top)
}
