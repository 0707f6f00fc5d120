use super::navigation;
use super::*;

impl ShellApp {
    pub(super) fn new(gateway: Gateway) -> Self {
        let first_tab = navigation::open_tab(&gateway);
        let mut app = Self {
            gateway,
            tabs: vec![first_tab],
            active: 0,
            address_input: String::new(),
        };
        app.pump_all();
        app.refresh_address_bar();
        app
    }

    /// Processes pending engine events for every tab; background tabs keep
    /// receiving load and title notifications while inactive.
    pub(super) fn pump_all(&mut self) {
        let gateway = &self.gateway;
        for tab in &mut self.tabs {
            navigation::pump_engine(gateway, tab);
        }
    }

    pub(super) fn add_tab(&mut self) {
        let tab = navigation::open_tab(&self.gateway);
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        self.pump_all();
        self.refresh_address_bar();
    }

    /// Closes a tab unless it is the last one; at least one view always
    /// exists.
    pub(super) fn close_tab(&mut self, index: usize) {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return;
        }

        self.tabs.remove(index);
        if index < self.active || self.active >= self.tabs.len() {
            self.active = self.active.saturating_sub(1);
        }
        self.refresh_address_bar();
    }

    pub(super) fn select_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }

        self.active = index;
        self.refresh_address_bar();
    }

    pub(super) fn submit(&mut self) {
        let input = self.address_input.trim().to_owned();
        let gateway = &self.gateway;
        if let Some(tab) = self.tabs.get_mut(self.active) {
            navigation::submit_address(gateway, tab, &input);
        }
        self.pump_all();
    }

    /// The address bar shows the active view's virtual address, never the
    /// true resource location.
    fn refresh_address_bar(&mut self) {
        self.address_input = self
            .tabs
            .get(self.active)
            .map(|tab| tab.view.virtual_address().to_owned())
            .unwrap_or_default();
    }

    fn can_go_back(&self) -> bool {
        self.tabs
            .get(self.active)
            .is_some_and(|tab| tab.view.can_go_back())
    }

    fn can_go_forward(&self) -> bool {
        self.tabs
            .get(self.active)
            .is_some_and(|tab| tab.view.can_go_forward())
    }

    fn navigate_back(&mut self) {
        if let Some(tab) = self.tabs.get_mut(self.active) {
            navigation::navigate_back(tab);
        }
        self.pump_all();
    }

    fn navigate_forward(&mut self) {
        if let Some(tab) = self.tabs.get_mut(self.active) {
            navigation::navigate_forward(tab);
        }
        self.pump_all();
    }

    fn reload(&mut self) {
        if let Some(tab) = self.tabs.get_mut(self.active) {
            navigation::reload(tab);
        }
        self.pump_all();
    }

    fn render_viewport(&self, ui: &mut egui::Ui) {
        let Some(tab) = self.tabs.get(self.active) else {
            return;
        };

        let virtual_address = tab.view.virtual_address();
        if !virtual_address.is_empty() {
            ui.heading(virtual_address);
        }
        ui.label(format!("Location: {}", tab.engine.location()));
        ui.separator();

        match tab.engine.document() {
            Some(document) => {
                egui::ScrollArea::vertical()
                    .id_salt("viewport_document_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(document).monospace().size(12.0));
                    });
            }
            None => {
                ui.label("Content is rendered by the embedded engine surface.");
            }
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_all();

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.can_go_back(), egui::Button::new("Back"))
                    .clicked()
                {
                    self.navigate_back();
                }
                if ui
                    .add_enabled(self.can_go_forward(), egui::Button::new("Forward"))
                    .clicked()
                {
                    self.navigate_forward();
                }
                if ui.button("Reload").clicked() {
                    self.reload();
                }

                // Cosmetic only; nothing behind it validates certificates.
                ui.colored_label(egui::Color32::from_rgb(46, 160, 67), "🔒");

                let width = (ui.available_width() - 90.0).max(200.0);
                let response = ui.add_sized(
                    [width, 28.0],
                    egui::TextEdit::singleline(&mut self.address_input).hint_text("Enter domain"),
                );

                let pressed_enter =
                    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if pressed_enter || ui.button("Go").clicked() {
                    self.submit();
                }
            });

            ui.horizontal(|ui| {
                let mut selected = None;
                let mut closed = None;

                for (index, tab) in self.tabs.iter().enumerate() {
                    if ui
                        .selectable_label(index == self.active, tab.view.tab_label())
                        .clicked()
                    {
                        selected = Some(index);
                    }
                    if self.tabs.len() > 1 && ui.small_button("x").clicked() {
                        closed = Some(index);
                    }
                }

                if ui.button("+").clicked() {
                    self.add_tab();
                }
                if let Some(index) = selected {
                    self.select_tab(index);
                }
                if let Some(index) = closed {
                    self.close_tab(index);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_viewport(ui);
        });
    }
}
