/**
 * Search Bar Demo - Main Entry Point
 *
 * Hosts the animated search bar over a filterable list. The app owns the
 * query text and hands it to the bar every frame.
 */
use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use searchbar::egui_app::{theme::colors, DemoConfig};
use searchbar::search_bar::{Callbacks, SearchBar};

const FRUITS: &[&str] = &[
    "Apple", "Apricot", "Banana", "Blackberry", "Blueberry", "Cherry", "Coconut", "Cranberry",
    "Date", "Fig", "Grape", "Grapefruit", "Guava", "Kiwi", "Lemon", "Lime", "Lychee", "Mango",
    "Melon", "Nectarine", "Orange", "Papaya", "Peach", "Pear", "Pineapple", "Plum",
    "Pomegranate", "Raspberry", "Strawberry", "Watermelon",
];

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("searchbar=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let config = match DemoConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load search bar config, using defaults: {}", e);
            DemoConfig::default()
        }
    };
    if let Some(path) = config.source() {
        tracing::info!("Using search bar config from {}", path.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Search Bar Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(config)))),
    )
}

/// Demo application state
struct DemoApp {
    query: Rc<RefCell<String>>,
    submitted: Rc<RefCell<Option<String>>>,
    search_bar: SearchBar,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Self {
        let query = Rc::new(RefCell::new(String::new()));
        let submitted = Rc::new(RefCell::new(None));

        let change_query = Rc::clone(&query);
        let submit_query = Rc::clone(&query);
        let submit_slot = Rc::clone(&submitted);
        let callbacks = Callbacks::new(move |text| {
            *change_query.borrow_mut() = text.to_string();
        })
        .on_submit_editing(move || {
            let query = submit_query.borrow().clone();
            tracing::info!("Search submitted: '{}'", query);
            *submit_slot.borrow_mut() = Some(query);
        })
        .on_hide(|| tracing::info!("Search bar hiding"));

        Self {
            query,
            submitted,
            search_bar: SearchBar::new(config.search_bar().clone(), callbacks),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("demo_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fruit");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🔍").clicked() {
                        self.search_bar.show();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let query = self.query.borrow().clone();
            let needle = query.to_lowercase();

            if self.search_bar.is_visible() {
                ui.add_space(self.search_bar.config().nav_height() + 8.0);
            }
            if let Some(submitted) = self.submitted.borrow().as_ref() {
                ui.label(egui::RichText::new(format!("Last search: {submitted}")).color(colors::GRAY));
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for fruit in FRUITS.iter().filter(|f| f.to_lowercase().contains(&needle)) {
                    ui.label(*fruit);
                }
            });

            self.search_bar.ui(ui, &query);
        });
    }
}
