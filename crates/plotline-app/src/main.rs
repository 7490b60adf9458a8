mod config;
mod painter;

use clap::Parser;
use eframe::egui::{self, Color32, RichText};
use plotline_lang::{
    check_syntax, CommandKind, FileStore, Interpreter, ProgramStore, Recorder,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use config::{Args, Config};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_args(Args::parse());
    info!(?config, "starting");

    let (w, h) = config.canvas_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([w + 520.0, (h + 120.0).max(600.0)]),
        ..Default::default()
    };
    eframe::run_native("Plotline", options, Box::new(|_cc| Ok(Box::new(App::new(config)))))
}

// ─── App state ────────────────────────────────────────────────────────────────

#[derive(PartialEq)]
enum Tab { Canvas, Commands, Messages }

#[derive(Clone, Copy, PartialEq)]
enum Level { Info, Error }

struct Message {
    level: Level,
    text: String,
}

struct App {
    config: Config,
    source: String,
    command: String,
    path: String,
    tab: Tab,
    /// Owns the canvas for the whole session; dropped when the window closes.
    interp: Interpreter<Recorder>,
    messages: Vec<Message>,
}

impl App {
    fn new(config: Config) -> Self {
        let mut app = Self {
            path: config.program_path.display().to_string(),
            config,
            source: String::from(
"moveto 100 100
color blue
drawto 300 100
fill on
color orange
circle 40
fill off
rectangle 350 60 120 80
triangle 100 300 200 200 300 300
"),
            command: String::new(),
            tab: Tab::Canvas,
            interp: Interpreter::new(Recorder::new()),
            messages: Vec::new(),
        };

        if app.config.program_path.exists() {
            app.load();
            if app.config.run_on_start {
                app.run();
            }
        }
        app
    }

    fn info(&mut self, text: impl Into<String>) {
        self.messages.push(Message { level: Level::Info, text: text.into() });
    }

    fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        error!("{text}");
        self.messages.push(Message { level: Level::Error, text });
    }

    fn last_error(&self) -> Option<&Message> {
        self.messages.last().filter(|m| m.level == Level::Error)
    }

    // ─── Actions ──────────────────────────────────────────────────────────────

    fn run(&mut self) {
        match self.interp.execute(&self.source) {
            Ok(()) => self.info("run ok"),
            Err(e) => self.error(e.to_string()),
        }
        self.drop_hidden();
    }

    fn clear_canvas(&mut self) {
        self.interp.execute_one("clear").ok();
        self.drop_hidden();
    }

    /// Commands behind the last `clear` are never painted again; keep the history bounded.
    fn drop_hidden(&mut self) {
        let dropped = self.interp.canvas_mut().trim_hidden();
        if dropped > 0 {
            debug!(dropped, "trimmed canvas history");
        }
    }

    fn check(&mut self) {
        let report = check_syntax(&self.source);
        if report.is_valid() {
            self.info(report.to_string());
        } else {
            for v in &report.violations {
                self.messages.push(Message { level: Level::Error, text: v.to_string() });
            }
            self.tab = Tab::Messages;
        }
    }

    fn run_command(&mut self) {
        let line = std::mem::take(&mut self.command);
        if let Err(e) = self.interp.execute_one(&line) {
            self.error(format!("`{}`: {}", line.trim(), e.kind));
        }
        self.drop_hidden();
    }

    fn load(&mut self) {
        match FileStore::new(&self.path).load_text() {
            Ok(text) => {
                self.source = text;
                self.info(format!("loaded {}", self.path));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn save(&mut self) {
        match FileStore::new(&self.path).save_text(&self.source) {
            Ok(()) => self.info(format!("saved {}", self.path)),
            Err(e) => self.error(e.to_string()),
        }
    }
}

// ─── UI ───────────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("editor").resizable(true).default_width(420.0).show(ctx, |ui| {
            // ── File row ──────────────────────────────────────────────────────
            ui.horizontal(|ui| {
                ui.label("File");
                ui.add(egui::TextEdit::singleline(&mut self.path).desired_width(220.0));
                if ui.button("Load").clicked() { self.load(); }
                if ui.button("Save").clicked() { self.save(); }
            });

            ui.separator();

            // ── Program editor ────────────────────────────────────────────────
            ui.label("Program");
            ui.add(
                egui::TextEdit::multiline(&mut self.source)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(28),
            );

            ui.horizontal(|ui| {
                if ui.button("Run").clicked() { self.run(); }
                if ui.button("Syntax").clicked() { self.check(); }
                if ui.button("Clear canvas").clicked() { self.clear_canvas(); }
            });

            ui.separator();

            // ── Interactive command ───────────────────────────────────────────
            ui.label("Command");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.command)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .hint_text("e.g. drawto 50 50"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.run_command();
                response.request_focus();
            }

            ui.add_space(6.0);
            let usage: Vec<&str> = CommandKind::ALL.iter().map(|k| k.usage()).collect();
            ui.label(RichText::new(usage.join("\n")).monospace().small().color(Color32::GRAY));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // ── Status bar ────────────────────────────────────────────────────
            ui.horizontal(|ui| {
                match self.last_error() {
                    None => {
                        ui.label(RichText::new("✓  ok").color(Color32::from_rgb(80, 200, 80)));
                    }
                    Some(m) => {
                        ui.label(RichText::new(format!("✗  {}", m.text)).color(Color32::from_rgb(220, 80, 80)));
                    }
                }
                let st = self.interp.state();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!(
                        "cursor ({}, {})  pen {}  fill {}",
                        st.cursor.x, st.cursor.y, st.pen, if st.fill { "on" } else { "off" },
                    )).monospace());
                });
            });

            ui.separator();

            // ── Tab bar ───────────────────────────────────────────────────────
            ui.horizontal(|ui| {
                let errors = self.messages.iter().filter(|m| m.level == Level::Error).count();
                let msg_label = if errors == 0 { "Messages".into() } else { format!("Messages ({errors})") };
                ui.selectable_value(&mut self.tab, Tab::Canvas, "Canvas");
                ui.selectable_value(&mut self.tab, Tab::Commands, "Commands");
                ui.selectable_value(&mut self.tab, Tab::Messages, msg_label);
            });

            ui.separator();

            match self.tab {
                Tab::Canvas   => self.show_canvas(ui),
                Tab::Commands => { egui::ScrollArea::vertical().show(ui, |ui| self.show_commands(ui)); }
                Tab::Messages => { egui::ScrollArea::vertical().show(ui, |ui| self.show_messages(ui)); }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        info!(commands = self.interp.canvas().len(), "closing, releasing canvas");
    }
}

impl App {
    fn show_canvas(&self, ui: &mut egui::Ui) {
        let (w, h) = self.config.canvas_size;
        let (area, _response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::hover());
        painter::paint(ui, area, self.config.background, self.interp.canvas().visible());
    }

    fn show_commands(&self, ui: &mut egui::Ui) {
        let commands = self.interp.canvas().commands();
        if commands.is_empty() {
            ui.label(RichText::new("Nothing drawn yet.").color(Color32::GRAY));
            return;
        }
        for (i, cmd) in commands.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("[{}]", i + 1)).monospace().color(Color32::GRAY));
                let color = cmd.color().map(painter::color32).unwrap_or(Color32::from_rgb(180, 140, 255));
                ui.label(RichText::new(cmd.to_string()).monospace().color(color));
            });
        }
    }

    fn show_messages(&self, ui: &mut egui::Ui) {
        if self.messages.is_empty() {
            ui.label(RichText::new("No messages.").color(Color32::GRAY));
            return;
        }
        for m in self.messages.iter().rev() {
            let color = match m.level {
                Level::Info  => Color32::from_rgb(170, 170, 170),
                Level::Error => Color32::from_rgb(220, 80, 80),
            };
            ui.label(RichText::new(&m.text).monospace().color(color));
        }
    }
}
