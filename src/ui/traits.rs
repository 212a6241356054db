use async_trait::async_trait;
use ratatui::{Frame, layout::Rect};

use crate::{
    ui::{context::AppContext, state::AppState},
    util::task::TaskManager,
};

#[async_trait]
pub trait View: Send {
    /// Called once, before the first frame.
    async fn on_mount(&mut self, _ctx: &AppContext, _tasks: &mut TaskManager) {}

    /// Draws `state`. Views keep only presentation details such as scroll offsets.
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState);
}
