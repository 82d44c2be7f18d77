//! Page collaborators mounted by the router.
//!
//! The shell passes nothing to a page beyond the area it draws into. The
//! shipped pages are placeholders for the external features they stand in for.

use eframe::egui;
use egui::RichText;
use std::collections::HashMap;
use crate::app::ShellEvent;
use crate::routing::Route;
use crate::theme::ThemeTokens;

/// An independently implemented page.
pub trait Page {
    /// Heading shown at the top of the page.
    fn title(&self) -> &str;

    /// Draws the page body.
    fn ui(&mut self, ui: &mut egui::Ui, tokens: &ThemeTokens);
}

/// Stand-in page describing the feature it represents.
pub struct PlaceholderPage {
    title: &'static str,
    summary: &'static str,
}

impl PlaceholderPage {
    pub fn new(title: &'static str, summary: &'static str) -> Self {
        Self { title, summary }
    }

    /// Placeholder for the page bound to `route`.
    pub fn for_route(route: Route) -> Self {
        let summary = match route {
            Route::Query => "Ask questions against the indexed research corpus.",
            Route::Resume => "Upload a resume and review the extracted analysis.",
            Route::Metrics => "Retrieval latency, throughput and index health.",
            Route::Upload => "Add documents to the research index.",
        };
        Self::new(route.label(), summary)
    }
}

impl Page for PlaceholderPage {
    fn title(&self) -> &str {
        self.title
    }

    fn ui(&mut self, ui: &mut egui::Ui, tokens: &ThemeTokens) {
        ui.heading(self.title);
        ui.add_space(4.0);
        ui.label(RichText::new(self.summary).color(tokens.text_secondary));
    }
}

/// Route → page table.
pub struct PageRegistry {
    pages: HashMap<Route, Box<dyn Page>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// Registry with a placeholder bound to every route.
    pub fn with_placeholders() -> Self {
        let mut registry = Self::new();
        for route in Route::ALL {
            registry.register(route, Box::new(PlaceholderPage::for_route(route)));
        }
        registry
    }

    /// Binds `page` to `route`, replacing any previous binding.
    pub fn register(&mut self, route: Route, page: Box<dyn Page>) {
        self.pages.insert(route, page);
    }

    pub fn page(&self, route: Route) -> Option<&(dyn Page + 'static)> {
        self.pages.get(&route).map(|page| page.as_ref())
    }

    pub fn page_mut(&mut self, route: Route) -> Option<&mut (dyn Page + 'static)> {
        self.pages.get_mut(&route).map(|page| page.as_mut())
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::with_placeholders()
    }
}

/// Explicit not-found page for paths outside the route table.
pub fn render_not_found(
    ui: &mut egui::Ui,
    path: &str,
    default_route: Route,
    tokens: &ThemeTokens,
) -> Option<ShellEvent> {
    ui.heading(RichText::new("Page not found").color(tokens.error));
    ui.label(
        RichText::new(format!("Nothing is registered at {}", path)).color(tokens.text_secondary),
    );
    ui.add_space(8.0);
    let back = format!("Go to {}", default_route.label());
    if ui.link(back).clicked() {
        return Some(ShellEvent::Navigate(default_route.path().to_string()));
    }
    None
}
