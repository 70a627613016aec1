//! Command execution - translates key events into state changes.

use crossterm::event::KeyEvent;

use crate::commands::{map_key, AppCommand, InputContext};

use super::{App, Focus, PopupState, WalletForm};

impl App {
    /// Handle a key event from the terminal.
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        let command = map_key(key, self.input_context());
        self.execute_command(command);
    }

    /// The input context derived from the active popup.
    #[must_use]
    pub(super) fn input_context(&self) -> InputContext {
        match self.ui.popup_state {
            PopupState::None => InputContext::Main,
            PopupState::Help => InputContext::HelpPopup,
            PopupState::ConfirmQuit
            | PopupState::ConfirmReset
            | PopupState::ConfirmRemoveWallet(_) => InputContext::Confirm,
            PopupState::AddWallet(_) => InputContext::WalletForm,
            PopupState::Message(_) => InputContext::MessagePopup,
        }
    }

    pub(super) fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::None => {}

            // === Application control ===
            AppCommand::RequestQuit => {
                self.ui.popup_state = PopupState::ConfirmQuit;
            }
            AppCommand::ToggleHelp => {
                self.ui.popup_state = PopupState::Help;
            }
            AppCommand::ToggleLive => self.toggle_live_updates(),
            AppCommand::Refresh => {
                self.request_data_refresh();
                self.refresh_all_balances();
            }

            // === Popup control ===
            AppCommand::Accept => self.accept_popup(),
            AppCommand::Dismiss => self.ui.dismiss_popup(),

            // === Navigation ===
            AppCommand::CycleFocus => self.ui.cycle_focus(),
            AppCommand::MoveUp => self.move_cursor(-1),
            AppCommand::MoveDown => self.move_cursor(1),

            // === Wallet / mining actions ===
            AppCommand::RefreshSelectedBalance => self.refresh_selected_balance(),
            AppCommand::StartMining => self.start_mining(),
            AppCommand::OpenAddWallet => {
                self.ui.popup_state = PopupState::AddWallet(WalletForm::default());
            }
            AppCommand::RequestRemoveWallet => {
                if self.selected_wallet().is_some() {
                    self.ui.popup_state = PopupState::ConfirmRemoveWallet(self.nav.wallet_index);
                }
            }
            AppCommand::RequestReset => {
                self.ui.popup_state = PopupState::ConfirmReset;
            }
            AppCommand::CopyAddress => self.copy_selected_address(),

            // === Form editing ===
            AppCommand::InputChar(c) => {
                if let PopupState::AddWallet(ref mut form) = self.ui.popup_state {
                    form.push_char(c);
                }
            }
            AppCommand::InputBackspace => {
                if let PopupState::AddWallet(ref mut form) = self.ui.popup_state {
                    form.backspace();
                }
            }
            AppCommand::InputNextField => {
                if let PopupState::AddWallet(ref mut form) = self.ui.popup_state {
                    form.next_field();
                }
            }
        }
    }

    /// Confirm the active popup's pending action.
    fn accept_popup(&mut self) {
        match std::mem::take(&mut self.ui.popup_state) {
            PopupState::ConfirmQuit => {
                self.exit = true;
            }
            PopupState::ConfirmReset => {
                self.execute_reset();
            }
            PopupState::ConfirmRemoveWallet(index) => {
                self.remove_wallet_at(index);
            }
            PopupState::AddWallet(form) => {
                self.submit_wallet_form(&form);
            }
            // Help and message popups have no pending action
            PopupState::None | PopupState::Help | PopupState::Message(_) => {}
        }
    }

    /// Move the focused panel's cursor by `delta`, clamped to its list.
    fn move_cursor(&mut self, delta: i64) {
        let (index, len) = match self.ui.focus {
            Focus::Wallets => (&mut self.nav.wallet_index, self.config.wallets.len()),
            Focus::Blocks => (&mut self.nav.block_index, self.data.block_count()),
            Focus::Pending => (&mut self.nav.pending_offset, self.data.pending.len()),
        };

        if len == 0 {
            *index = 0;
            return;
        }

        let max = len - 1;
        let next = index.saturating_add_signed(delta as isize).min(max);
        *index = next;
    }
}
