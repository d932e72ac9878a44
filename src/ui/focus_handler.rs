use iced_native::widget::text_input;

/// Moves the focus to the input after the focused one, wrapping around at the end.
/// Focuses the first input when nothing has focus.
pub(in crate::ui) fn focus_next(items: &mut [&mut text_input::State]) {
    let target = match items.iter().position(|i| i.is_focused()) {
        Some(current) => (current + 1) % items.len(),
        None => 0,
    };
    move_focus(items, target);
}

/// Moves the focus to the input before the focused one, wrapping around at the start.
/// Focuses the last input when nothing has focus.
pub(in crate::ui) fn focus_previous(items: &mut [&mut text_input::State]) {
    let target = match items.iter().position(|i| i.is_focused()) {
        Some(0) | None => items.len().saturating_sub(1),
        Some(current) => current - 1,
    };
    move_focus(items, target);
}

fn move_focus(items: &mut [&mut text_input::State], target: usize) {
    if items.is_empty() {
        return;
    }

    for item in items.iter_mut() {
        item.unfocus();
    }
    items[target].focus();
    items[target].select_all();
}
