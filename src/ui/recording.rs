//! 测试用宿主：把所有副作用按顺序记录下来

use std::sync::Mutex;

use super::{AnalyticsPanel, ModalView, Notification, NotificationKind, UiHost};
use crate::models::assignments::entities::AssignmentCard;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Loading(bool),
    Notify(NotificationKind, String),
    Navigate(String),
    OpenUrl(String),
    Modal(Option<ModalView>),
    Card(AssignmentCard),
    Board(Vec<String>),
    Analytics(AnalyticsPanel),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Notify(kind, message) => Some((kind, message)),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Navigate(route) => Some(route),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl UiHost for RecordingHost {
    fn set_loading(&self, visible: bool) {
        self.push(HostEvent::Loading(visible));
    }

    fn notify(&self, notification: &Notification) {
        self.push(HostEvent::Notify(
            notification.kind,
            notification.message.clone(),
        ));
    }

    fn navigate(&self, route: &str) {
        self.push(HostEvent::Navigate(route.to_string()));
    }

    fn open_url(&self, url: &str) {
        self.push(HostEvent::OpenUrl(url.to_string()));
    }

    fn render_modal(&self, view: Option<&ModalView>) {
        self.push(HostEvent::Modal(view.cloned()));
    }

    fn render_card(&self, card: &AssignmentCard) {
        self.push(HostEvent::Card(card.clone()));
    }

    fn render_board(&self, visible: &[&AssignmentCard]) {
        self.push(HostEvent::Board(
            visible.iter().map(|card| card.id.clone()).collect(),
        ));
    }

    fn render_analytics(&self, panel: &AnalyticsPanel) {
        self.push(HostEvent::Analytics(panel.clone()));
    }
}
