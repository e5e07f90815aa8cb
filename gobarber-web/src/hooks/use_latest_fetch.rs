use std::fmt::Debug;
use std::future::Future;

use shared::dashboard::LatestRequest;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, hook, use_effect_with, use_memo};

use crate::api::ApiError;

/// Runs `fetch` whenever `query` changes and hands the query with its result
/// to `on_loaded`, unless a newer query was issued in the meantime.
///
/// The consumer still receives the query so it can drop a result that
/// resolved between a state change and the effect issuing the next fetch.
/// A `None` query fetches nothing. Failures are logged and leave the
/// consumer's state as it was.
#[hook]
pub fn use_latest_fetch<Q, T, F, Fut>(query: Option<Q>, fetch: F, on_loaded: Callback<(Q, T)>)
where
    Q: Clone + Debug + PartialEq + 'static,
    T: 'static,
    F: FnOnce(Q) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let requests = use_memo((), |_| LatestRequest::new());

    use_effect_with(query, move |query| {
        if let Some(query) = query.clone() {
            let ticket = requests.issue();
            let pending = fetch(query.clone());
            spawn_local(async move {
                match pending.await {
                    Ok(value) => {
                        if let Some(value) = requests.accept(ticket, value) {
                            on_loaded.emit((query, value));
                        }
                    }
                    Err(err) => log::warn!("fetch for {query:?} failed: {err}"),
                }
            });
        }
        || ()
    });
}
