use std::{fmt::Display, future::Future};

use hrpc::{
    exports::futures_util::future::{FutureExt, LocalBoxFuture},
    Response,
};

use crate::{
    error::CallFailure,
    greet::v1::{GreetRequest, GreetResponse},
};

/// Id of the text input the name is read from.
pub const NAME_INPUT_ID: &str = "name-input";
/// Id of the button that triggers a call.
pub const GREET_BUTTON_ID: &str = "greet-btn";
/// Id of the element outcomes are written to.
pub const RESPONSE_TEXT_ID: &str = "response-text";

/// Future returned by a [`Greet`] call.
pub type GreetFuture = LocalBoxFuture<'static, Result<GreetResponse, CallFailure>>;

/// Something that can call the greet RPC.
///
/// Implemented for any `Fn(GreetRequest) -> GreetFuture`, see [`caller`] for
/// turning a generated client into one.
pub trait Greet {
    /// Issue a greet call.
    fn greet(&self, request: GreetRequest) -> GreetFuture;
}

impl<F> Greet for F
where
    F: Fn(GreetRequest) -> GreetFuture,
{
    fn greet(&self, request: GreetRequest) -> GreetFuture {
        (self)(request)
    }
}

/// Adapt a function that issues a call with a generated client into a
/// [`Greet`] implementation.
///
/// The response message is decoded and every error along the way is turned
/// into a [`CallFailure`].
///
/// ```rust,ignore
/// let client = RefCell::new(GreetServiceClient::new_transport(transport));
/// let caller = caller(move |request| client.borrow_mut().greet(request));
/// ```
pub fn caller<F, Fut, E>(call: F) -> impl Fn(GreetRequest) -> GreetFuture
where
    F: Fn(GreetRequest) -> Fut,
    Fut: Future<Output = Result<Response<GreetResponse>, E>> + 'static,
    E: Display + 'static,
{
    move |request| {
        let pending = call(request);
        async move {
            match pending.await {
                Ok(response) => response.into_message().await.map_err(CallFailure::new),
                Err(err) => Err(CallFailure::new(err)),
            }
        }
        .boxed_local()
    }
}

/// Color of the output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Used for successful calls.
    Green,
    /// Used for failed calls.
    Red,
}

impl Color {
    /// The CSS name of this color.
    pub fn as_css(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// What a resolved call puts in the output element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    text: String,
    color: Color,
}

impl Outcome {
    /// Outcome of a successful call.
    pub fn success(response: &GreetResponse) -> Self {
        Self {
            text: format!("Server says: {}", response.greeting),
            color: Color::Green,
        }
    }

    /// Outcome of a failed call.
    pub fn failure(failure: &CallFailure) -> Self {
        Self {
            text: format!("Error: {}", failure),
            color: Color::Red,
        }
    }

    /// Text to display.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Color to display the text with.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// The output element's displayed state.
///
/// Every write replaces what was there, so with overlapping calls the last
/// one to resolve is what stays on screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputElement {
    current: Option<Outcome>,
}

impl OutputElement {
    /// Replace the displayed outcome.
    pub fn write(&mut self, outcome: Outcome) {
        self.current = Some(outcome);
    }

    /// Currently displayed text, empty if nothing was written yet.
    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", Outcome::text)
    }

    /// Currently displayed color, if anything was written yet.
    pub fn color(&self) -> Option<Color> {
        self.current.as_ref().map(Outcome::color)
    }

    /// Inline CSS for the element, empty until something was written.
    pub fn style(&self) -> String {
        self.color()
            .map(|color| format!("color: {}", color.as_css()))
            .unwrap_or_default()
    }
}

/// Handles greet button clicks.
pub struct GreetController {
    client: Box<dyn Greet>,
}

impl GreetController {
    /// Create a new controller that will use the given client for every call.
    pub fn new(client: impl Greet + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Handle a click with the current input value.
    ///
    /// Returns `None` without calling anything if `input` is empty. Otherwise
    /// the call is issued right away and the returned future resolves to the
    /// outcome that should be written to the output element. Failures are
    /// logged before they are turned into an outcome.
    pub fn on_click(&self, input: &str) -> Option<LocalBoxFuture<'static, Outcome>> {
        if input.is_empty() {
            return None;
        }

        tracing::debug!(name = %input, "calling greet");
        let call = self.client.greet(GreetRequest {
            name: input.to_string(),
        });

        let fut = async move {
            match call.await {
                Ok(response) => Outcome::success(&response),
                Err(err) => {
                    tracing::error!(error = err.message(), "greet call failed");
                    Outcome::failure(&err)
                }
            }
        };

        Some(fut.boxed_local())
    }
}
