use std::{sync::Arc, time::Duration};

use flume::{Receiver, Sender};

use ratatui::Frame;
use tracing::info;

use crate::{config::Config, event::events::Event, http::ApiService, util::task::TaskManager};

use super::{
    context::AppContext,
    message::AppMessage,
    state::AppState,
    traits::View,
    tui::Tui,
    util::handler::EventHandler,
    views::ChartView,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub view: Box<dyn View>,
    pub task_manager: TaskManager,
    pub tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(config)?);
        Ok(Self::with_api(api, config.tick_rate))
    }

    pub fn with_api(api: Arc<ApiService>, tick_rate: Duration) -> Self {
        let (event_tx, event_rx): (Sender<Event>, Receiver<Event>) = flume::unbounded();

        Self {
            event_rx,
            ctx: AppContext { api, event_tx },
            state: AppState::default(),
            view: Box::new(ChartView::new()),
            task_manager: TaskManager::new(),
            tick_rate,
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        self.state = std::mem::take(&mut self.state).reduce(msg);
    }

    /// Mounts the view, which starts the chart fetch.
    pub async fn mount(&mut self) {
        self.view.on_mount(&self.ctx, &mut self.task_manager).await;
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        info!("Starting with chart source {}", self.ctx.api.url());

        let mut tui = Tui::new(self.tick_rate)?;
        tui.enter()?;

        self.mount().await;
        let mut should_render = true;
        while !self.state.should_quit {
            if should_render {
                tui.draw(|f| self.ui(f))?;
            }
            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        info!("Exited");
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.view.render(frame, area, &self.state);
    }
}
