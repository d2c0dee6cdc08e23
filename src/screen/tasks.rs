use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::watchlist::{Effect, Response};
use super::MountId;
use crate::api::WatchlistApi;

/// Price lookups in flight at once
const PRICE_CONCURRENCY: usize = 4;

/// A response tagged with the mount that asked for it
#[derive(Debug)]
pub struct Envelope {
    pub mount: MountId,
    pub response: Response,
}

/// Background requests owned by one mounted screen
///
/// Dropping it aborts whatever is still running, so a torn-down screen
/// never hears back from its requests.
pub struct Tasks {
    mount: MountId,
    api: Arc<dyn WatchlistApi>,
    user_id: String,
    tx: mpsc::UnboundedSender<Envelope>,
    handles: Vec<JoinHandle<()>>,
    /// Price lookups of the current load, cancelled by the next fetch
    prices: Vec<JoinHandle<()>>,
}

impl Tasks {
    pub fn new(
        mount: MountId,
        api: Arc<dyn WatchlistApi>,
        user_id: impl Into<String>,
        tx: mpsc::UnboundedSender<Envelope>,
    ) -> Self {
        Self {
            mount,
            api,
            user_id: user_id.into(),
            tx,
            handles: vec![],
            prices: vec![],
        }
    }

    pub fn in_flight(&self) -> usize {
        self.handles
            .iter()
            .chain(&self.prices)
            .filter(|h| !h.is_finished())
            .count()
    }

    fn abort_prices(&mut self) {
        let pending = self.prices.iter().filter(|h| !h.is_finished()).count();
        if pending > 0 {
            tracing::debug!(mount = self.mount.get(), pending, "cancelling price lookups of the previous load");
        }
        for handle in self.prices.drain(..) {
            handle.abort();
        }
    }

    pub fn spawn(&mut self, effect: Effect) {
        self.handles.retain(|h| !h.is_finished());
        self.prices.retain(|h| !h.is_finished());

        let mount = self.mount;
        let tx = self.tx.clone();
        let handle = match effect {
            Effect::Fetch => {
                self.abort_prices();
                let fetch = self.api.fetch(&self.user_id);
                tokio::spawn(async move {
                    let response = Response::Fetched(fetch.await);
                    _ = tx.send(Envelope { mount, response });
                })
            }
            Effect::Remove(symbol) => {
                let remove = self.api.remove(&self.user_id, &symbol);
                tokio::spawn(async move {
                    let response = Response::Removed {
                        symbol,
                        result: remove.await,
                    };
                    _ = tx.send(Envelope { mount, response });
                })
            }
            Effect::Prices { load, symbols } => {
                let lookups: Vec<_> = symbols
                    .into_iter()
                    .map(|symbol| {
                        let details = self.api.company_details(&symbol);
                        async move { (symbol, details.await) }
                    })
                    .collect();
                let handle = tokio::spawn(async move {
                    let mut results =
                        futures::stream::iter(lookups).buffer_unordered(PRICE_CONCURRENCY);
                    while let Some((symbol, result)) = results.next().await {
                        match result {
                            Ok(Some(snapshot)) => {
                                let response = Response::Price {
                                    load,
                                    symbol,
                                    snapshot,
                                };
                                if tx.send(Envelope { mount, response }).is_err() {
                                    break;
                                }
                            }
                            Ok(None) => tracing::debug!(symbol = %symbol, "no price snapshot"),
                            Err(err) => {
                                tracing::warn!(symbol = %symbol, error = %err, "price lookup failed");
                            }
                        }
                    }
                });
                self.prices.push(handle);
                return;
            }
        };
        self.handles.push(handle);
    }
}

impl Drop for Tasks {
    fn drop(&mut self) {
        let pending = self.in_flight();
        if pending > 0 {
            tracing::debug!(mount = self.mount.get(), pending, "aborting in-flight requests");
        }
        for handle in self.handles.iter().chain(&self.prices) {
            handle.abort();
        }
    }
}
