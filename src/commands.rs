//! Keyboard command mapping.
//!
//! Raw key events are translated into [`AppCommand`] values based on the
//! current [`InputContext`]; the state layer then executes the command.
//! Keeping the mapping pure makes the keybindings testable without a
//! terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which set of keybindings is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Main screen, no popup.
    Main,
    /// Help popup is open.
    HelpPopup,
    /// A yes/no confirmation popup is open (quit, reset, remove wallet).
    Confirm,
    /// The add-wallet form is open.
    WalletForm,
    /// An informational message popup is open.
    MessagePopup,
}

// ============================================================================
// Commands
// ============================================================================

/// High-level application commands produced from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Key not bound in the current context.
    None,

    // === Application control ===
    RequestQuit,
    ToggleHelp,
    ToggleLive,
    Refresh,

    // === Popup control ===
    Accept,
    Dismiss,

    // === Navigation ===
    CycleFocus,
    MoveUp,
    MoveDown,

    // === Wallet / mining actions ===
    RefreshSelectedBalance,
    StartMining,
    OpenAddWallet,
    RequestRemoveWallet,
    RequestReset,
    CopyAddress,

    // === Form editing ===
    InputChar(char),
    InputBackspace,
    InputNextField,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Map a key event to a command for the given input context.
#[must_use]
pub fn map_key(key: KeyEvent, context: InputContext) -> AppCommand {
    match context {
        InputContext::Main => map_main_key(key),
        InputContext::HelpPopup | InputContext::MessagePopup => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                AppCommand::Dismiss
            }
            _ => AppCommand::None,
        },
        InputContext::Confirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => AppCommand::Accept,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::None,
        },
        InputContext::WalletForm => map_form_key(key),
    }
}

fn map_main_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::RequestQuit,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        KeyCode::Char('r') => AppCommand::Refresh,
        KeyCode::Char(' ') => AppCommand::ToggleLive,
        KeyCode::Tab => AppCommand::CycleFocus,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Enter | KeyCode::Char('b') => AppCommand::RefreshSelectedBalance,
        KeyCode::Char('m') => AppCommand::StartMining,
        KeyCode::Char('a') => AppCommand::OpenAddWallet,
        KeyCode::Char('d') => AppCommand::RequestRemoveWallet,
        KeyCode::Char('x') => AppCommand::RequestReset,
        KeyCode::Char('c') => AppCommand::CopyAddress,
        KeyCode::Esc => AppCommand::Dismiss,
        _ => AppCommand::None,
    }
}

fn map_form_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Enter => AppCommand::Accept,
        KeyCode::Tab => AppCommand::InputNextField,
        KeyCode::Backspace => AppCommand::InputBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            AppCommand::InputChar(c)
        }
        _ => AppCommand::None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_main_context_bindings() {
        struct TestCase {
            code: KeyCode,
            expected: AppCommand,
        }

        let cases = [
            TestCase {
                code: KeyCode::Char('q'),
                expected: AppCommand::RequestQuit,
            },
            TestCase {
                code: KeyCode::Char('m'),
                expected: AppCommand::StartMining,
            },
            TestCase {
                code: KeyCode::Char('b'),
                expected: AppCommand::RefreshSelectedBalance,
            },
            TestCase {
                code: KeyCode::Tab,
                expected: AppCommand::CycleFocus,
            },
            TestCase {
                code: KeyCode::Char('j'),
                expected: AppCommand::MoveDown,
            },
            TestCase {
                code: KeyCode::Char('z'),
                expected: AppCommand::None,
            },
        ];

        for case in &cases {
            assert_eq!(
                map_key(key(case.code), InputContext::Main),
                case.expected,
                "key {:?}",
                case.code
            );
        }
    }

    #[test]
    fn test_confirm_context_accepts_and_dismisses() {
        assert_eq!(
            map_key(key(KeyCode::Char('y')), InputContext::Confirm),
            AppCommand::Accept
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), InputContext::Confirm),
            AppCommand::Accept
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), InputContext::Confirm),
            AppCommand::Dismiss
        );
        // Main-screen keys are inert while a confirmation is up
        assert_eq!(
            map_key(key(KeyCode::Char('m')), InputContext::Confirm),
            AppCommand::None
        );
    }

    #[test]
    fn test_form_context_captures_text() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), InputContext::WalletForm),
            AppCommand::InputChar('q')
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), InputContext::WalletForm),
            AppCommand::InputBackspace
        );
        assert_eq!(
            map_key(key(KeyCode::Tab), InputContext::WalletForm),
            AppCommand::InputNextField
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                InputContext::WalletForm
            ),
            AppCommand::None
        );
    }

    #[test]
    fn test_help_popup_dismissal() {
        assert_eq!(
            map_key(key(KeyCode::Char('?')), InputContext::HelpPopup),
            AppCommand::Dismiss
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), InputContext::MessagePopup),
            AppCommand::Dismiss
        );
        assert_eq!(
            map_key(key(KeyCode::Char('j')), InputContext::HelpPopup),
            AppCommand::None
        );
    }
}
