//! Dashboard - hosts the sections as docked tabs

use std::collections::HashMap;

use egui::{ScrollArea, Ui};
use egui_dock::{DockArea, DockState, TabViewer};
use hx_core::Tab;

use crate::sections::{all_sections, Section};
use crate::ViewerContext;

/// The tab strip holding the four sections
pub struct Dashboard {
    dock_state: DockState<Tab>,
    sections: HashMap<Tab, Box<dyn Section>>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        let sections: HashMap<Tab, Box<dyn Section>> = all_sections()
            .into_iter()
            .map(|section| (section.tab(), section))
            .collect();

        Self {
            dock_state: DockState::new(Tab::ALL.to_vec()),
            sections,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, viewer_context: &ViewerContext) {
        DockArea::new(&mut self.dock_state)
            .show_close_buttons(false)
            .draggable_tabs(false)
            .show_inside(
                ui,
                &mut DashboardTabViewer {
                    sections: &mut self.sections,
                    viewer_context,
                },
            );
    }
}

struct DashboardTabViewer<'a> {
    sections: &'a mut HashMap<Tab, Box<dyn Section>>,
    viewer_context: &'a ViewerContext,
}

impl<'a> TabViewer for DashboardTabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match self.sections.get(tab) {
            Some(section) => section.title().into(),
            None => tab.title().into(),
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        let Some(section) = self.sections.get_mut(tab) else {
            return;
        };
        ScrollArea::vertical()
            .id_source(tab.title())
            .auto_shrink([false, false])
            .show(ui, |ui| section.ui(self.viewer_context, ui));
    }
}
