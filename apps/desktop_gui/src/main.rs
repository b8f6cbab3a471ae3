use std::{collections::HashMap, fs, path::Path, path::PathBuf};

use clap::Parser;
use client_core::{DetailViewState, LatencyProfile, ListViewState};
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::domain::{Category, CelestialObject, ImageRef};

mod backend_bridge;
mod controller;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use controller::orchestration::dispatch_backend_command;

#[derive(Parser, Debug)]
#[command(name = "desktop_gui", about = "Desktop browser for the celestial catalog")]
struct Args {
    /// Skip the simulated retrieval latency entirely.
    #[arg(long)]
    no_delay: bool,

    /// Scale the simulated latency (1.0 is the shipped profile).
    #[arg(long, default_value_t = 1.0)]
    latency_scale: f64,

    /// Directory holding the bundled object images as <key>.png.
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppView {
    List,
    Detail,
}

fn asset_path(assets_dir: &Path, image_ref: &ImageRef) -> PathBuf {
    assets_dir.join(format!("{}.png", image_ref.key()))
}

fn chip_label(filter: Option<Category>) -> &'static str {
    match filter {
        None => "All",
        Some(category) => category.label(),
    }
}

struct ExplorerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    list_state: ListViewState,
    selected_filter: Option<Category>,
    detail_state: DetailViewState,

    view: AppView,
    status: String,

    assets_dir: PathBuf,
    // Keyed by image ref; None records a failed resolution so the glyph
    // fallback is not retried every frame.
    textures: HashMap<String, Option<TextureHandle>>,
}

impl ExplorerApp {
    fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, assets_dir: PathBuf) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            list_state: ListViewState::Loading,
            selected_filter: None,
            detail_state: DetailViewState::default(),
            view: AppView::List,
            status: "Starting backend worker".to_string(),
            assets_dir,
            textures: HashMap::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ListState(state) => {
                    self.status = match &state {
                        ListViewState::Loading => "Loading celestial objects...".to_string(),
                        ListViewState::Success(objects) => {
                            format!("{} object(s)", objects.len())
                        }
                        ListViewState::Error(message) => format!("Error: {message}"),
                    };
                    self.list_state = state;
                }
                UiEvent::FilterChanged(filter) => {
                    self.selected_filter = filter;
                }
                UiEvent::DetailState(state) => {
                    self.detail_state = state;
                }
                UiEvent::BackendFailed(message) => {
                    self.status = message;
                }
            }
        }
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        image_ref: &ImageRef,
    ) -> Option<TextureHandle> {
        if let Some(cached) = self.textures.get(image_ref.key()) {
            return cached.clone();
        }

        let path = asset_path(&self.assets_dir, image_ref);
        let loaded = fs::read(&path)
            .ok()
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
            .map(|decoded| {
                let rgba = decoded.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                ctx.load_texture(
                    format!("asset:{}", image_ref.key()),
                    color_image,
                    egui::TextureOptions::LINEAR,
                )
            });
        if loaded.is_none() {
            tracing::debug!(key = image_ref.key(), "image asset unresolved, using glyph");
        }
        self.textures
            .insert(image_ref.key().to_string(), loaded.clone());
        loaded
    }

    fn render_visual(&mut self, ui: &mut egui::Ui, object: &CelestialObject, side: f32) {
        match self.texture_for(ui.ctx(), &object.image_ref) {
            Some(texture) => {
                ui.add(egui::Image::new(&texture).fit_to_exact_size(egui::vec2(side, side)));
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(object.category.glyph()).size(side * 0.5));
                    ui.small(object.category.label());
                });
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.heading("🌌 Space Explorer");
        ui.weak("Discover the wonders of the universe");
        ui.add_space(4.0);

        if self.view == AppView::List {
            let mut clicked = None;
            ui.horizontal_wrapped(|ui| {
                if ui
                    .selectable_label(self.selected_filter.is_none(), chip_label(None))
                    .clicked()
                {
                    clicked = Some(None);
                }
                for category in Category::ALL {
                    let selected = self.selected_filter == Some(category);
                    if ui
                        .selectable_label(selected, chip_label(Some(category)))
                        .clicked()
                    {
                        clicked = Some(Some(category));
                    }
                }
            });
            if let Some(category) = clicked {
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SetFilter { category },
                    &mut self.status,
                );
            }
            ui.add_space(6.0);
        }
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        match self.list_state.clone() {
            ListViewState::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.add(egui::Spinner::new().size(28.0));
                    ui.add_space(8.0);
                    ui.label("Loading celestial objects...");
                });
            }
            ListViewState::Success(objects) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for object in &objects {
                        self.render_card(ui, object);
                        ui.add_space(6.0);
                    }
                });
            }
            ListViewState::Error(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(egui::RichText::new("⚠").size(42.0));
                    ui.strong("Oops! Something went wrong");
                    ui.weak(&message);
                    ui.add_space(10.0);
                    if ui.button("⟳ Retry").clicked() {
                        dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::Reload,
                            &mut self.status,
                        );
                    }
                });
            }
        }
    }

    fn render_card(&mut self, ui: &mut egui::Ui, object: &CelestialObject) {
        let response = ui
            .group(|ui| {
                ui.horizontal(|ui| {
                    self.render_visual(ui, object, 72.0);
                    ui.vertical(|ui| {
                        ui.strong(&object.name);
                        ui.small(object.category.label());
                        ui.label(&object.description);
                        ui.small(format!("🌍 {}", object.distance_from_earth));
                    });
                });
            })
            .response;

        if response.interact(egui::Sense::click()).clicked() {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::OpenDetail { id: object.id },
                &mut self.status,
            );
            self.view = AppView::Detail;
        }
    }

    fn render_detail(&mut self, ui: &mut egui::Ui) {
        if ui.button("← Back").clicked() {
            self.view = AppView::List;
            return;
        }
        ui.add_space(8.0);

        if self.detail_state.is_loading {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.add(egui::Spinner::new().size(28.0));
            });
            return;
        }

        let Some(object) = self.detail_state.object.clone() else {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.weak("Object not found");
            });
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                self.render_visual(ui, &object, 180.0);
            });
            ui.add_space(8.0);
            ui.heading(&object.name);
            ui.small(object.category.label());
            ui.add_space(6.0);
            ui.label(&object.description);
            ui.add_space(6.0);
            ui.label(format!("🌍 Distance from Earth: {}", object.distance_from_earth));
            ui.label(format!("🔭 Discovered: {}", object.discovery_label()));
            ui.add_space(8.0);
            ui.strong("Interesting Facts");
            for (index, fact) in object.facts.iter().enumerate() {
                ui.label(format!("{}. {fact}", index + 1));
            }
        });
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.small(&self.status);
        });
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            AppView::List => self.render_list(ui),
            AppView::Detail => self.render_detail(ui),
        });

        // Backend events arrive on their own thread; keep polling.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let latency = if args.no_delay {
        LatencyProfile::ZERO
    } else {
        LatencyProfile::default().scaled(args.latency_scale)
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, latency);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Space Explorer")
            .with_inner_size([480.0, 840.0])
            .with_min_inner_size([400.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Space Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new(cmd_tx, ui_rx, args.assets_dir)))),
    )
}
