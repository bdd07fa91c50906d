use crate::ui::app::App;
use crate::ui::form::{FieldKind, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Enter => app.submit_focused(),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(' ') => match app.form().focused.kind() {
            FieldKind::Checkbox => app.dispatch_form(FormIntent::Toggle),
            FieldKind::Button => app.submit_focused(),
            FieldKind::Text => {}
        },
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SlotRegistry;
    use crate::ui::form::Field;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(SlotRegistry::new());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_is_typed_not_quit() {
        let mut app = App::new(SlotRegistry::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert!(app.form().add_slot_no.is_empty());
    }

    #[test]
    fn space_toggles_focused_checkbox() {
        let mut app = App::new(SlotRegistry::new());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form().focused, Field::AddCovered);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.form().add_covered);
    }

    #[test]
    fn enter_in_text_field_submits_its_card() {
        let mut app = App::new(SlotRegistry::new());
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Enter);
        assert!(app.registry().get(7).is_some());
    }
}
