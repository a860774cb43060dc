//! Thin HTTP layer over the backend APIs.
//!
//! Every backend response is wrapped in the shared [`Envelope`]. This
//! module unwraps it, enforces the per-request deadline and routes
//! failures to the notification channel of the current device class.
//! Callers get a typed [`ApiError`] instead of a raw transport error.

pub mod ad;
pub mod movie;

use cine_api::{CODE_OK, Envelope};
use gloo_net::http::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::notify;
use crate::state::device::DeviceClass;

/// Base path of the movie API. The trunk dev server proxies it to the
/// upstream origin; production deployments may override it at build
/// time.
pub fn api_base() -> &'static str {
    option_env!("CINE_API_BASE").unwrap_or("/api")
}

/// Base path of the ad API. Same proxy arrangement as [`api_base`], but
/// pointing at the ad origin.
pub fn ad_base() -> &'static str {
    option_env!("CINE_AD_BASE").unwrap_or("/ad")
}

/// Milliseconds before an in-flight request is aborted.
const REQUEST_TIMEOUT_MS: i32 = 30_000;

const TRANSPORT_FALLBACK: &str = "Network error";
const API_FALLBACK: &str = "Request failed";

/// Outcome of a backend call, split by failure origin.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success envelope code.
    #[error("{message} (code {code})")]
    Api { code: i32, message: String },
    /// The response body did not match the documented schema.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Sends a body-less request and unwraps the response envelope.
pub(crate) async fn fetch<T>(builder: RequestBuilder) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned,
{
    let deadline = Deadline::arm();
    let request = builder
        .abort_signal(deadline.signal().as_ref())
        .build()
        .map_err(|error| ApiError::Transport(error.to_string()))?;
    let response = request.send().await.map_err(transport_error)?;
    unwrap_envelope(response).await
}

/// Sends a request with a JSON body and unwraps the response envelope.
pub(crate) async fn fetch_with_body<T, B>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let deadline = Deadline::arm();
    let request = builder
        .abort_signal(deadline.signal().as_ref())
        .json(body)
        .map_err(|error| ApiError::Transport(error.to_string()))?;
    let response = request.send().await.map_err(transport_error)?;
    unwrap_envelope(response).await
}

async fn unwrap_envelope<T>(response: gloo_net::http::Response) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|error| ApiError::Decode(error.to_string()))?;

    if envelope.code == CODE_OK {
        return Ok(envelope.data);
    }

    let message = envelope
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| API_FALLBACK.to_string());
    notify::error(current_device_class(), &message);
    Err(ApiError::Api {
        code: envelope.code,
        message,
    })
}

fn transport_error(error: gloo_net::Error) -> ApiError {
    let mut message = error.to_string();
    if message.trim().is_empty() {
        message = TRANSPORT_FALLBACK.to_string();
    }
    notify::error(current_device_class(), &message);
    ApiError::Transport(message)
}

/// Device class at the moment a notification is raised, derived from the
/// live viewport width rather than any stored state.
fn current_device_class() -> DeviceClass {
    DeviceClass::from_width(dom::viewport_width())
}

/// Aborts the associated request once the deadline elapses. Dropping the
/// guard, which happens as soon as the call completes, clears the timer.
struct Deadline {
    controller: Option<web_sys::AbortController>,
    timer: Option<(i32, Closure<dyn FnMut()>)>,
}

impl Deadline {
    fn arm() -> Self {
        let Ok(controller) = web_sys::AbortController::new() else {
            return Self {
                controller: None,
                timer: None,
            };
        };

        let abort = {
            let controller = controller.clone();
            Closure::<dyn FnMut()>::new(move || controller.abort())
        };
        let timer = dom::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                abort.as_ref().unchecked_ref(),
                REQUEST_TIMEOUT_MS,
            )
            .ok()
            .map(|handle| (handle, abort));

        Self {
            controller: Some(controller),
            timer,
        }
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        if let Some((handle, _)) = &self.timer {
            dom::window().clear_timeout_with_handle(*handle);
        }
    }
}
