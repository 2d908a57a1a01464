use std::{cell::RefCell, rc::Rc};

use web_sys::HtmlInputElement as InputElement;
use yew::prelude::*;

use greet_common::{
    config::DEFAULT_BASE_URL,
    controller::{self, GREET_BUTTON_ID, NAME_INPUT_ID, RESPONSE_TEXT_ID},
    greet::v1::greet_service_client::GreetServiceClient,
    BoxError, GreetController, Outcome, OutputElement, TransportConfig,
};
use hrpc::{client::transport::http::Wasm, exports::futures_util::FutureExt};

enum Msg {
    Greet,
    Resolved(Outcome),
}

struct Model {
    input: NodeRef,
    output: OutputElement,
}

#[derive(Clone)]
struct Props {
    controller: Rc<GreetController>,
}

impl PartialEq for Props {
    fn eq(&self, _other: &Self) -> bool {
        // The controller is built once in `main` and never replaced
        true
    }
}

impl Properties for Props {
    type Builder = ();

    fn builder() -> Self::Builder {}
}

impl Component for Model {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Model>) -> Self {
        Self {
            input: NodeRef::default(),
            output: OutputElement::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Model>, msg: Self::Message) -> bool {
        match msg {
            Msg::Greet => {
                let value = self
                    .input
                    .cast::<InputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();

                // Every click gets its own task, nothing in flight is cancelled
                if let Some(fut) = ctx.props().controller.on_click(&value) {
                    ctx.link().send_future(fut.map(Msg::Resolved));
                }
                false
            }
            Msg::Resolved(outcome) => {
                self.output.write(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Model>) -> Html {
        let on_click = ctx.link().callback(|_: MouseEvent| Msg::Greet);

        html! {
            <div>
                <h1>{ "hRPC Web Client" }</h1>
                <div class="card">
                    <input id={NAME_INPUT_ID} type="text" placeholder="Enter your name" value="World" ref={self.input.clone()}/>
                    <button id={GREET_BUTTON_ID} type="button" onclick={on_click}>{ "Greet Server" }</button>
                </div>
                <p id={RESPONSE_TEXT_ID} class="read-the-docs" style={self.output.style()}>{ self.output.text() }</p>
            </div>
        }
    }
}

fn main() -> Result<(), BoxError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)?;

    let config = TransportConfig::new(option_env!("GREET_SERVER_URL").unwrap_or(DEFAULT_BASE_URL))?;
    let transport =
        Wasm::new(config.base_url().clone())?.check_spec_version(config.checks_spec_version());

    let client = RefCell::new(GreetServiceClient::new_transport(transport));
    let controller =
        GreetController::new(controller::caller(move |request| client.borrow_mut().greet(request)));

    yew::start_app_with_props::<Model>(Props {
        controller: Rc::new(controller),
    });

    Ok(())
}
