use counter::{Action, Delta, GameOptions, GameState, Player, TITLE};
use eframe::egui::{self, Align, CentralPanel, Layout, RichText, Ui};
use eframe::epi::{App, Frame};
use eframe::NativeOptions;
use strum::{EnumCount, IntoEnumIterator};

use crate::game::GameStateExt;

const SCORE_SIZE: f32 = 48.0;

pub fn run(options: GameOptions) -> ! {
    let window_options = NativeOptions {
        initial_window_size: Some(egui::vec2(420., 320.)),
        ..Default::default()
    };
    eframe::run_native(Box::new(GuiApp::new(options)), window_options)
}

struct GuiApp {
    game: GameState,
}

impl GuiApp {
    fn new(options: GameOptions) -> Self {
        Self {
            game: GameState::new(options),
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _: &Frame) {
        let mut actions = Vec::new();

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(TITLE);
            });
            ui.separator();

            ui.columns(Player::COUNT, |columns| {
                for (ui, player) in columns.iter_mut().zip(Player::iter()) {
                    player_column(ui, &self.game, player, &mut actions);
                }
            });

            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("Start Game").clicked() {
                    actions.push(Action::StartGame);
                }
            });
        });

        self.game.process(actions);
    }

    fn name(&self) -> &str {
        TITLE
    }
}

fn player_column(ui: &mut Ui, game: &GameState, player: Player, actions: &mut Vec<Action>) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(
            RichText::new(game.points(player).to_string())
                .size(SCORE_SIZE)
                .color(player.color())
                .strong(),
        );

        ui.horizontal(|ui| {
            for delta in [Delta::Plus, Delta::Minus] {
                if ui.button(delta.to_string()).clicked() {
                    actions.push(Action::Adjust(player, delta));
                }
            }
        });

        if let Some(banner) = game.banner(player) {
            ui.heading(RichText::new(banner).color(player.color()));
        }
    });
}
