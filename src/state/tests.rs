//! App-level behavior tests: command execution, message processing, and the
//! mining guards.

use std::time::Instant;

use crate::commands::{AppCommand, InputContext};
use crate::domain::WatchedWallet;

use super::{App, AppConfig, AppMessage, PopupState, StartupOptions};

fn test_app() -> App {
    // Unroutable port so any stray request fails fast instead of touching a
    // real server.
    let config = AppConfig {
        server_url: "http://127.0.0.1:9".to_string(),
        ..AppConfig::default()
    };
    App::new(config, StartupOptions::default()).expect("app should construct")
}

fn test_app_with_wallet(address: &str) -> App {
    let mut app = test_app();
    app.config.add_wallet(WatchedWallet::new(address, None));
    app.data.balances.watch(address);
    app
}

// ============================================================================
// Mining Guards
// ============================================================================

#[tokio::test]
async fn test_start_mining_without_wallet_is_noop() {
    let mut app = test_app();

    app.execute_command(AppCommand::StartMining);

    assert!(!app.data.is_mining());
    // The user gets told why nothing happened
    assert!(app.ui.toast_message().is_some());
}

#[tokio::test]
async fn test_start_mining_sets_progress_to_zero() {
    let mut app = test_app_with_wallet("miner-1");

    app.execute_command(AppCommand::StartMining);

    assert_eq!(app.data.mining, Some(0));
}

#[tokio::test]
async fn test_start_mining_while_active_is_noop() {
    let mut app = test_app_with_wallet("miner-1");
    app.data.mining = Some(42);

    app.execute_command(AppCommand::StartMining);

    // The running animation is untouched; no second one was started
    assert_eq!(app.data.mining, Some(42));
}

// ============================================================================
// Message Processing
// ============================================================================

#[tokio::test]
async fn test_balance_message_updates_board() {
    let mut app = test_app_with_wallet("addr-a");

    app.message_tx
        .send(AppMessage::BalanceRefreshed {
            address: "addr-a".to_string(),
            balance: 12.5,
        })
        .unwrap();
    app.process_messages();

    assert_eq!(app.data.balances.display("addr-a"), Some("12.50"));
    assert!(app.data.balances.is_highlighted("addr-a", Instant::now()));
}

#[tokio::test]
async fn test_balance_failure_keeps_display_and_shows_toast() {
    let mut app = test_app_with_wallet("addr-a");

    app.message_tx
        .send(AppMessage::BalanceRefreshFailed {
            address: "addr-a".to_string(),
            error: "connection refused".to_string(),
        })
        .unwrap();
    app.process_messages();

    assert_eq!(app.data.balances.display("addr-a"), Some("--"));
    assert!(app.ui.toast_message().is_some_and(|m| m.starts_with("[x]")));
}

#[tokio::test]
async fn test_mining_progress_messages_drive_gauge() {
    let mut app = test_app_with_wallet("miner-1");

    app.message_tx.send(AppMessage::MiningProgress(48)).unwrap();
    app.process_messages();
    assert_eq!(app.data.mining, Some(48));

    app.message_tx.send(AppMessage::MiningAnimationDone).unwrap();
    app.process_messages();
    assert!(!app.data.is_mining());
    assert!(app.ui.toast_message().is_some_and(|m| m.starts_with("[+]")));
}

#[tokio::test]
async fn test_server_error_flips_status() {
    let mut app = test_app();
    app.data.server_ok = true;

    app.message_tx
        .send(AppMessage::ServerError("unreachable".to_string()))
        .unwrap();
    app.process_messages();
    assert!(!app.data.server_ok);

    app.message_tx.send(AppMessage::ServerConnected).unwrap();
    app.process_messages();
    assert!(app.data.server_ok);
}

// ============================================================================
// Command Execution
// ============================================================================

#[tokio::test]
async fn test_quit_requires_confirmation() {
    let mut app = test_app();

    app.execute_command(AppCommand::RequestQuit);
    assert_eq!(app.ui.popup_state, PopupState::ConfirmQuit);
    assert!(!app.exit);

    app.execute_command(AppCommand::Accept);
    assert!(app.exit);
}

#[tokio::test]
async fn test_quit_can_be_dismissed() {
    let mut app = test_app();

    app.execute_command(AppCommand::RequestQuit);
    app.execute_command(AppCommand::Dismiss);

    assert_eq!(app.ui.popup_state, PopupState::None);
    assert!(!app.exit);
}

#[tokio::test]
async fn test_add_wallet_flow() {
    let mut app = test_app();

    app.execute_command(AppCommand::OpenAddWallet);
    assert!(matches!(app.ui.popup_state, PopupState::AddWallet(_)));

    for c in "addr-new".chars() {
        app.execute_command(AppCommand::InputChar(c));
    }
    app.execute_command(AppCommand::InputNextField);
    for c in "Savings".chars() {
        app.execute_command(AppCommand::InputChar(c));
    }
    app.execute_command(AppCommand::Accept);

    assert_eq!(app.ui.popup_state, PopupState::None);
    assert_eq!(app.config.wallets.len(), 1);
    assert_eq!(app.config.wallets[0].address, "addr-new");
    assert_eq!(app.config.wallets[0].label, "Savings");
    // The new wallet is immediately watched on the board
    assert!(app.data.balances.display("addr-new").is_some());
}

#[tokio::test]
async fn test_add_wallet_rejects_empty_address() {
    let mut app = test_app();

    app.execute_command(AppCommand::OpenAddWallet);
    app.execute_command(AppCommand::Accept);

    assert!(app.config.wallets.is_empty());
    assert!(app.ui.toast_message().is_some_and(|m| m.starts_with("[x]")));
}

#[tokio::test]
async fn test_remove_wallet_flow() {
    let mut app = test_app_with_wallet("addr-a");

    app.execute_command(AppCommand::RequestRemoveWallet);
    assert_eq!(app.ui.popup_state, PopupState::ConfirmRemoveWallet(0));

    app.execute_command(AppCommand::Accept);
    assert!(app.config.wallets.is_empty());
    assert_eq!(app.data.balances.display("addr-a"), None);
}

#[tokio::test]
async fn test_remove_wallet_with_empty_list_opens_nothing() {
    let mut app = test_app();

    app.execute_command(AppCommand::RequestRemoveWallet);
    assert_eq!(app.ui.popup_state, PopupState::None);
}

#[tokio::test]
async fn test_toggle_live_updates_flips_flag_and_notifies() {
    let mut app = test_app();
    assert!(app.show_live);

    let rx = app.live_updates_tx.subscribe();
    app.execute_command(AppCommand::ToggleLive);

    assert!(!app.show_live);
    assert!(!app.config.show_live);
    assert!(!*rx.borrow());
}

// ============================================================================
// Input Contexts
// ============================================================================

#[tokio::test]
async fn test_input_context_follows_popup_state() {
    let mut app = test_app();
    assert_eq!(app.input_context(), InputContext::Main);

    app.ui.popup_state = PopupState::Help;
    assert_eq!(app.input_context(), InputContext::HelpPopup);

    app.ui.popup_state = PopupState::ConfirmReset;
    assert_eq!(app.input_context(), InputContext::Confirm);

    app.ui.popup_state = PopupState::AddWallet(super::WalletForm::default());
    assert_eq!(app.input_context(), InputContext::WalletForm);

    app.ui.popup_state = PopupState::Message("hi".to_string());
    assert_eq!(app.input_context(), InputContext::MessagePopup);
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_cursor_clamps_to_list_bounds() {
    let mut app = test_app_with_wallet("addr-a");
    app.config.add_wallet(WatchedWallet::new("addr-b", None));

    app.execute_command(AppCommand::MoveDown);
    assert_eq!(app.nav.wallet_index, 1);

    // Already at the end
    app.execute_command(AppCommand::MoveDown);
    assert_eq!(app.nav.wallet_index, 1);

    app.execute_command(AppCommand::MoveUp);
    app.execute_command(AppCommand::MoveUp);
    assert_eq!(app.nav.wallet_index, 0);
}
