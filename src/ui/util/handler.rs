use tracing::{info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains background events.
    /// Returns whether a redraw is needed.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key, &app.state) {
                    app.update(msg);
                }
            }
            TerminalEvent::Resize(_, _) => tui.clear()?,
            TerminalEvent::Tick => {
                // Only the spinner animates on its own.
                return Ok(app.state.is_loading());
            }
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match &evt {
            Event::ChartFetched(chart) => info!(
                "Chart for {} ready with {} songs",
                chart.chart_date,
                chart.songs.len()
            ),
            Event::FetchError(e) => warn!("Chart unavailable: {}", e),
        }
        app.update(AppMessage::from(evt));
    }
}
