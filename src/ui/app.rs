use crate::command::{Outcome, StatusMessage};
use crate::registry::SlotRegistry;
use crate::ui::form::{Card, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    registry: SlotRegistry,
    /// State of the three form cards (MVI pattern).
    form: FormState,
    /// Latest command result; replaced on every submit.
    message: Option<StatusMessage>,
}

impl App {
    pub fn new(registry: SlotRegistry) -> Self {
        Self {
            should_quit: false,
            registry,
            form: FormState::default(),
            message: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Submits the card that owns the focused field.
    pub fn submit_focused(&mut self) {
        self.submit(self.form.focused.card());
    }

    /// Applies the card's command to the registry and shows the result.
    ///
    /// On success the add and remove cards are cleared; the park card keeps
    /// its requirements for the next vehicle.
    pub fn submit(&mut self, card: Card) {
        let command = self.form.command_for(card);
        let result = command.apply(&mut self.registry);
        self.message = Some(StatusMessage::from(&result));

        match result {
            Ok(Outcome::Added(_)) => self.dispatch_form(FormIntent::ResetAdd),
            Ok(Outcome::Released(_)) => self.dispatch_form(FormIntent::ResetRemove),
            Ok(Outcome::Allocated(_)) | Err(_) => {}
        }
    }
}
