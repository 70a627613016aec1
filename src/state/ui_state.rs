//! UI presentation state - focus, popups, toasts, input forms.

// ============================================================================
// Focus
// ============================================================================

/// Which main panel currently owns list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Wallets,
    Blocks,
    Pending,
}

impl Focus {
    /// The next panel in Tab order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Wallets => Self::Blocks,
            Self::Blocks => Self::Pending,
            Self::Pending => Self::Wallets,
        }
    }
}

// ============================================================================
// Add-Wallet Form
// ============================================================================

/// Which field of the add-wallet form is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletFormField {
    #[default]
    Address,
    Label,
}

/// Input buffer for the add-wallet popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletForm {
    pub address: String,
    pub label: String,
    pub field: WalletFormField,
}

impl WalletForm {
    /// Append a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        match self.field {
            WalletFormField::Address => self.address.push(c),
            WalletFormField::Label => self.label.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.field {
            WalletFormField::Address => {
                self.address.pop();
            }
            WalletFormField::Label => {
                self.label.pop();
            }
        }
    }

    /// Move focus to the other field.
    pub fn next_field(&mut self) {
        self.field = match self.field {
            WalletFormField::Address => WalletFormField::Label,
            WalletFormField::Label => WalletFormField::Address,
        };
    }
}

// ============================================================================
// Popups
// ============================================================================

/// Modal popup state. At most one popup is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Keyboard shortcut overview.
    Help,
    /// Quit confirmation.
    ConfirmQuit,
    /// Chain reset confirmation.
    ConfirmReset,
    /// Wallet removal confirmation (index into the watch list).
    ConfirmRemoveWallet(usize),
    /// Add-wallet input form.
    AddWallet(WalletForm),
    /// Informational message.
    Message(String),
}

// ============================================================================
// UI State
// ============================================================================

/// UI state - focus, popups, toasts.
#[derive(Debug, Default)]
pub struct UiState {
    /// Focused main panel.
    pub focus: Focus,
    /// Active popup, if any.
    pub popup_state: PopupState,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the next panel.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Whether any popup is currently shown.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state != PopupState::None
    }

    /// Close the active popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Show an informational message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Shows a toast notification (non-blocking overlay that auto-dismisses
    /// after `ticks` main-loop ticks).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks <= 1 {
                self.toast = None;
                return true;
            }
            *ticks -= 1;
        }
        false
    }

    /// The current toast message, if one is displayed.
    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|(msg, _)| msg.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_panels() {
        let mut focus = Focus::Wallets;
        focus = focus.next();
        assert_eq!(focus, Focus::Blocks);
        focus = focus.next();
        assert_eq!(focus, Focus::Pending);
        focus = focus.next();
        assert_eq!(focus, Focus::Wallets);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast_message().is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(ui.toast_message(), Some("Hello"));

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast_message().is_none());
    }

    #[test]
    fn test_popup_state_transitions() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.popup_state = PopupState::ConfirmQuit;
        assert!(ui.has_active_popup());

        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }

    #[test]
    fn test_wallet_form_editing() {
        let mut form = WalletForm::default();

        form.push_char('a');
        form.push_char('b');
        assert_eq!(form.address, "ab");

        form.next_field();
        form.push_char('M');
        assert_eq!(form.label, "M");

        form.backspace();
        assert_eq!(form.label, "");

        form.next_field();
        form.backspace();
        assert_eq!(form.address, "a");
    }
}
