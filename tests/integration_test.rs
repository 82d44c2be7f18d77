use agent_shell::{
    AppState, LoadedFlag, NotificationItem, Route, RouteOutcome, Severity, SettingKey,
    ShellConfig, ShellCoordinator, ShellError, ShellEvent, ShellVisibility, ThemeMode,
    UserMenuEntry,
};
use anyhow::Result;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn shell_with_delay(delay_ms: u64) -> Result<(AppState, Arc<LoadedFlag>)> {
    let config = ShellConfig {
        boot_delay_ms: delay_ms,
        ..ShellConfig::default()
    };
    let marker = Arc::new(LoadedFlag::new());
    let state = AppState::from_config(&config, marker.clone(), None)?;
    Ok((state, marker))
}

/// Polls frames until the shell is ready or the deadline passes.
fn run_until_ready(state: &mut AppState, width: f32, deadline: Duration) -> ShellVisibility {
    let step = Duration::from_millis(5);
    let mut waited = Duration::ZERO;
    loop {
        let visibility = ShellCoordinator::begin_frame(state, width);
        if visibility == ShellVisibility::Ready || waited >= deadline {
            return visibility;
        }
        thread::sleep(step);
        waited += step;
    }
}

#[test]
fn test_boot_loading_then_ready() -> Result<()> {
    let (mut state, marker) = shell_with_delay(200)?;

    assert_eq!(
        ShellCoordinator::begin_frame(&mut state, 1280.0),
        ShellVisibility::Loading
    );
    assert!(!marker.is_loaded());

    let visibility = run_until_ready(&mut state, 1280.0, Duration::from_secs(5));
    assert_eq!(visibility, ShellVisibility::Ready);
    assert!(marker.is_loaded());

    // Stays ready
    thread::sleep(Duration::from_millis(20));
    assert_eq!(
        ShellCoordinator::begin_frame(&mut state, 1280.0),
        ShellVisibility::Ready
    );
    Ok(())
}

#[test]
fn test_teardown_during_boot_never_marks_loaded() -> Result<()> {
    let (mut state, marker) = shell_with_delay(300)?;
    ShellCoordinator::begin_frame(&mut state, 1280.0);
    drop(state);

    thread::sleep(Duration::from_millis(450));
    assert!(!marker.is_loaded());
    Ok(())
}

#[test]
fn test_initial_path_applied_on_ready_frame() -> Result<()> {
    let (state, _marker) = shell_with_delay(10)?;
    let mut state = state.with_initial_path(Some("/resume".to_string()));
    assert_eq!(state.router.current_route(), Some(Route::Query));

    run_until_ready(&mut state, 1280.0, Duration::from_secs(5));
    assert_eq!(state.router.current_route(), Some(Route::Resume));
    assert!(state.pending_navigation.is_none());
    Ok(())
}

#[test]
fn test_compact_on_first_frame_closes_sidebar() -> Result<()> {
    let (mut state, _marker) = shell_with_delay(60_000)?;
    ShellCoordinator::begin_frame(&mut state, 600.0);
    assert!(state.is_compact());
    assert!(!state.sidebar.is_open());
    Ok(())
}

#[test]
fn test_sidebar_edge_triggered_close() -> Result<()> {
    let (mut state, _marker) = shell_with_delay(60_000)?;

    ShellCoordinator::begin_frame(&mut state, 1280.0);
    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleSidebar);
    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleSidebar);
    assert!(state.sidebar.is_open());

    // regular -> compact edge
    ShellCoordinator::begin_frame(&mut state, 800.0);
    assert!(!state.sidebar.is_open());

    // user reopens while compact; further compact frames leave it alone
    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleSidebar);
    for width in [780.0, 640.0, 899.0] {
        ShellCoordinator::begin_frame(&mut state, width);
    }
    assert!(state.sidebar.is_open());

    // back to regular keeps the value, a new compact edge closes again
    ShellCoordinator::begin_frame(&mut state, 1024.0);
    assert!(state.sidebar.is_open());
    ShellCoordinator::begin_frame(&mut state, 500.0);
    assert!(!state.sidebar.is_open());
    Ok(())
}

#[test]
fn test_affordances_are_independent() -> Result<()> {
    let (mut state, _marker) = shell_with_delay(60_000)?;

    ShellCoordinator::handle_event(&mut state, ShellEvent::OpenNotifications);
    ShellCoordinator::handle_event(&mut state, ShellEvent::OpenSettings);
    ShellCoordinator::handle_event(
        &mut state,
        ShellEvent::OpenUserMenu(egui::pos2(1200.0, 56.0)),
    );
    assert!(state.status_bar.notifications_dialog.is_open());
    assert!(state.status_bar.settings_dialog.is_open());
    assert!(state.status_bar.user_menu.is_open());

    ShellCoordinator::handle_event(&mut state, ShellEvent::CloseSettings);
    assert!(state.status_bar.notifications_dialog.is_open());
    assert!(!state.status_bar.settings_dialog.is_open());
    assert!(state.status_bar.user_menu.is_open());

    ShellCoordinator::handle_event(&mut state, ShellEvent::DismissUserMenu);
    assert!(state.status_bar.notifications_dialog.is_open());
    assert!(!state.status_bar.user_menu.is_open());

    ShellCoordinator::handle_event(&mut state, ShellEvent::CloseNotifications);
    ShellCoordinator::handle_event(&mut state, ShellEvent::OpenSettings);
    ShellCoordinator::handle_event(
        &mut state,
        ShellEvent::SelectUserMenuEntry(UserMenuEntry::Profile),
    );
    assert!(!state.status_bar.notifications_dialog.is_open());
    assert!(state.status_bar.settings_dialog.is_open());
    Ok(())
}

#[test]
fn test_settings_and_theme_share_state() -> Result<()> {
    let (mut state, _marker) = shell_with_delay(60_000)?;
    assert_eq!(state.theme.mode(), ThemeMode::Light);

    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleSetting(SettingKey::AutoSave));
    assert!(!state.status_bar.settings.get(SettingKey::AutoSave));
    assert!(state.status_bar.settings.get(SettingKey::Notifications));
    assert!(!state.status_bar.settings.get(SettingKey::SoundEffects));
    assert_eq!(state.theme.mode(), ThemeMode::Light);

    // settings switch and status bar icon drive the same mode
    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleTheme);
    let after_switch = state.theme.mode();
    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleTheme);
    ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleTheme);
    assert_eq!(state.theme.mode(), after_switch);
    assert_eq!(after_switch, ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_routing_through_events() -> Result<()> {
    let (mut state, _marker) = shell_with_delay(60_000)?;

    for route in Route::ALL {
        ShellCoordinator::handle_event(&mut state, ShellEvent::Navigate(route.path().to_string()));
        assert_eq!(state.router.outcome(), &RouteOutcome::Page(route));
    }

    ShellCoordinator::handle_event(&mut state, ShellEvent::Navigate("/".to_string()));
    assert_eq!(state.router.location(), "/query");

    ShellCoordinator::handle_event(&mut state, ShellEvent::Navigate("/admin".to_string()));
    assert_eq!(
        state.router.outcome(),
        &RouteOutcome::NotFound("/admin".to_string())
    );
    assert!(matches!(
        state.router.lookup("/admin"),
        Err(ShellError::UnknownRoute(_))
    ));
    Ok(())
}

#[test]
fn test_badge_tracks_notification_list() -> Result<()> {
    let (mut state, _marker) = shell_with_delay(60_000)?;
    assert_eq!(state.status_bar.badge_count(), 3);

    let rebuilt = NotificationItem::new(
        4,
        Severity::Info,
        "Index Rebuilt",
        "Vector index compaction finished",
        "just now",
    );
    assert!(state.status_bar.notifications.push(rebuilt.clone()));
    assert_eq!(state.status_bar.badge_count(), 4);
    assert_eq!(state.status_bar.notifications.items()[0], rebuilt);

    // same id again is rejected
    assert!(!state.status_bar.notifications.push(rebuilt));
    assert_eq!(state.status_bar.badge_count(), 4);
    Ok(())
}
