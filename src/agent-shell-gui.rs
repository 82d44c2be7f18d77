//! AI Research Agent desktop shell
//!
//! Boots the shell behind a short loading splash, then shows the collapsible
//! navigation panel, the status bar and the routed page.
//!
//! Usage: `agent-shell-gui [--config <path>] [initial-path]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use agent_shell::state::Waker;
use agent_shell::ui::pages::PageRegistry;
use agent_shell::ui::panel_manager::PanelManager;
use agent_shell::{
    AppState, LoadedFlag, ShellConfig, ShellCoordinator, ShellVisibility, ThemeCoordinator,
};

/// AI Research Agent desktop shell.
#[derive(Debug, Parser)]
#[command(name = "agent-shell-gui", version, about)]
struct CliArgs {
    /// Configuration file (default: $AGENT_SHELL_CONFIG, then the per-user config file)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to open once the shell is ready
    initial_path: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agent_shell=info,agent_shell_gui=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Main application entry point.
fn main() -> Result<()> {
    init_logging();

    let cli = CliArgs::parse();
    let config_path = ShellConfig::explicit_path(cli.config);
    let config = ShellConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("AI Research Agent"),
        ..Default::default()
    };

    let initial_path = cli.initial_path;
    eframe::run_native(
        "AI Research Agent",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let waker: Waker = Box::new(move || ctx.request_repaint());
            let state = AppState::from_config(&config, Arc::new(LoadedFlag::new()), Some(waker))?
                .with_initial_path(initial_path);
            Ok(Box::new(AgentShellApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the shell: {}", e))
}

/// The shell application.
///
/// Dropping it drops `AppState`, which cancels a boot timer that has not
/// fired yet.
struct AgentShellApp {
    state: AppState,
    pages: PageRegistry,
}

impl AgentShellApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            pages: PageRegistry::with_placeholders(),
        }
    }
}

impl eframe::App for AgentShellApp {
    /// Main update loop.
    ///
    /// 1. Observe viewport width and poll the boot timer
    /// 2. While loading, draw only the splash
    /// 3. Otherwise apply the theme, render the shell and apply its event
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let width = ctx.content_rect().width();

        match ShellCoordinator::begin_frame(&mut self.state, width) {
            ShellVisibility::Loading => {
                ThemeCoordinator::apply_loading_theme(ctx, &self.state);
                PanelManager::render_loading(ctx);
            }
            ShellVisibility::Ready => {
                ThemeCoordinator::apply_current_theme(ctx, &self.state);
                if let Some(event) = PanelManager::render_shell(ctx, &self.state, &mut self.pages) {
                    ShellCoordinator::handle_event(&mut self.state, event);
                    ctx.request_repaint();
                }
            }
        }
    }
}
