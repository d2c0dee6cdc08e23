use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::api::WatchlistApi;
use crate::config::Config;
use crate::render::{DirtyFlags, RenderState};
use crate::screen::{
    Envelope, MountId, Navigation, Response, Tasks, ViewStatus, WatchlistScreen,
};
use crate::views;
use crate::widgets::{Loading, Terminal};

/// What currently owns the terminal
enum Route {
    Watchlist {
        screen: WatchlistScreen,
        /// Dropped together with the screen, aborting its requests
        tasks: Tasks,
    },
    /// A destination outside this terminal; any key comes back
    Away(Navigation),
}

impl Route {
    /// Hand a response to the mounted screen, if it is the one that asked
    ///
    /// Returns the areas to repaint, or `None` when the response was dropped.
    fn deliver(&mut self, envelope: Envelope, now: Instant) -> Option<DirtyFlags> {
        let Route::Watchlist { screen, tasks } = self else {
            tracing::debug!(mount = envelope.mount.get(), "response for unmounted screen dropped");
            return None;
        };
        if !screen.accepts(envelope.mount) {
            tracing::debug!(
                mount = envelope.mount.get(),
                current = screen.mount_id().get(),
                "stale response dropped"
            );
            return None;
        }
        let dirty = match &envelope.response {
            Response::Fetched(_) => DirtyFlags::ALL,
            Response::Removed { .. } => DirtyFlags::NONE.mark_collection_change().mark_removal_change(),
            Response::Price { .. } => DirtyFlags::WATCHLIST,
        };
        for effect in screen.on_response(envelope.response, now) {
            tasks.spawn(effect);
        }
        Some(dirty)
    }
}

struct Shell {
    config: Config,
    api: Arc<dyn WatchlistApi>,
    tx: mpsc::UnboundedSender<Envelope>,
    mount: MountId,
    columns: usize,
}

impl Shell {
    /// A fresh mount: default view state, new id, initial fetch in flight
    fn mount(&mut self) -> Route {
        self.mount = self.mount.next();
        let (mut screen, effects) = WatchlistScreen::mount(
            self.mount,
            self.config.plan,
            self.config.notice_for,
            self.api.has_price_source(),
        );
        screen.set_grid_columns(self.columns);
        let mut tasks = Tasks::new(
            self.mount,
            Arc::clone(&self.api),
            self.config.user_id.clone(),
            self.tx.clone(),
        );
        for effect in effects {
            tasks.spawn(effect);
        }
        Route::Watchlist { screen, tasks }
    }
}

#[allow(clippy::too_many_lines)]
pub async fn run(config: Config, api: Arc<dyn WatchlistApi>) -> anyhow::Result<()> {
    let mut terminal = Terminal::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let columns = terminal
        .size()
        .map_or(1, |size| views::grid_columns(size.width));
    let mut shell = Shell {
        config,
        api,
        tx,
        mount: MountId::new(0),
        columns,
    };
    let mut route = shell.mount();

    // FPS-based rendering: 30 FPS for smooth UI updates
    let render_interval = Duration::from_millis(33);
    let mut render_tick = tokio::time::interval(render_interval);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let loading = Loading::default();
    let mut events = crossterm::event::EventStream::new();
    let mut render_state = RenderState::new();
    render_state.mark_all_dirty();

    loop {
        tokio::select! {
            _ = render_tick.tick() => {
                if let Route::Watchlist { screen, .. } = &mut route {
                    render_state.mark_dirty(screen.tick(Instant::now()));
                    if screen.status() == ViewStatus::Loading {
                        render_state.mark_dirty(DirtyFlags::LOADING);
                    }
                }
                if render_state.needs_render() {
                    let web_url = shell.config.web_url.as_deref();
                    terminal.draw(|frame| match &route {
                        Route::Watchlist { screen, .. } => views::render(frame, screen, &loading),
                        Route::Away(navigation) => views::away::render(frame, navigation, web_url),
                    })?;
                    render_state.clear();
                } else {
                    render_state.skip();
                }
            }
            Some(envelope) = rx.recv() => {
                if let Some(dirty) = route.deliver(envelope, Instant::now()) {
                    render_state.mark_dirty(dirty);
                }
            }
            Some(event) = tokio_stream::StreamExt::next(&mut events) => {
                let event = match event {
                    Ok(Event::Key(event)) if event.kind == KeyEventKind::Press => event,
                    Ok(Event::Resize(width, _)) => {
                        shell.columns = views::grid_columns(width);
                        if let Route::Watchlist { screen, .. } = &mut route {
                            screen.set_grid_columns(shell.columns);
                        }
                        render_state.mark_all_dirty();
                        continue;
                    }
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event stream failed");
                        return Err(err.into());
                    }
                };

                if matches!(event, ctrl!('c')) {
                    break;
                }

                match &mut route {
                    Route::Away(_) => {
                        route = shell.mount();
                        render_state.mark_all_dirty();
                    }
                    Route::Watchlist { screen, tasks } => {
                        let reaction = screen.handle_key(event);
                        for effect in reaction.effects {
                            tasks.spawn(effect);
                        }
                        render_state.mark_dirty(reaction.dirty);
                        match reaction.navigation {
                            None => {}
                            Some(Navigation::Back) => break,
                            Some(navigation) => {
                                tracing::info!(?navigation, "leaving watchlist");
                                route = Route::Away(navigation);
                                render_state.mark_all_dirty();
                            }
                        }
                    }
                }
            }
        }
    }

    tracing::info!(stats = %render_state.stats(), "render loop finished");
    Ok(())
}
