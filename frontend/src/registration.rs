use gloo_console::log;
use gloo_net::http::Request;
use shared_data::{Field, FormState, RegistrationInput, SubmissionResult, SubmissionStatus, CLASSES};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const REGISTER_URL: &str = "/api/register";

const STYLE: &str = "
#registration-card {
	max-width: 32rem;
	margin: 0 auto;
	padding: 32px;
	border-radius: 16px;
	background-color: var(--panel-background);
	border: 1px solid var(--border-color);
	box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
	position: relative;
	overflow: hidden;
}
#registration-card::before {
	content: \"\";
	position: absolute;
	top: 0;
	left: 0;
	width: 100%;
	height: 4px;
	background: linear-gradient(to right, #3b82f6, #6366f1, #a855f7);
}
.form-field {
	margin-bottom: 16px;
}
.form-field label {
	display: block;
	font-size: 14px;
	font-weight: 500;
	color: var(--secondary-text);
	margin-bottom: 4px;
}
.field-error {
	color: var(--error);
	font-size: 12px;
	margin-top: 4px;
}
#submit-error {
	padding: 12px;
	border-radius: 8px;
	background-color: rgba(239, 68, 68, 0.1);
	border: 1px solid rgba(239, 68, 68, 0.2);
	color: var(--error);
	font-size: 14px;
	margin-bottom: 16px;
}
#submit-button {
	width: 100%;
	padding: 16px;
	border-radius: 12px;
	border: none;
	background: linear-gradient(to right, #4f46e5, #2563eb);
	font-size: 18px;
	font-weight: 700;
}
#submit-button:disabled {
	opacity: 0.5;
	cursor: default;
}
#registration-success {
	padding: 48px 0;
	text-align: center;
}
#registration-success h3 {
	font-size: 24px;
}
#registration-success p {
	color: var(--secondary-text);
}
";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registration(FormState);

#[derive(Debug)]
pub enum FormMsg {
	Edit(Field, String),
	Submit,
	Resolved(SubmissionResult),
	NetworkFailed,
	Reset
}

impl Reducible for Registration {
	type Action = FormMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut state = self.0.clone();

		match action {
			FormMsg::Edit(field, value) => state.set_field(field, value),
			FormMsg::Submit => if let Err(e) = state.begin_submit() {
				log!(format!("Not submitting: {e}"));
			},
			FormMsg::Resolved(result) => state.resolve(result),
			FormMsg::NetworkFailed => state.fail_network(),
			FormMsg::Reset => state.reset(),
		}

		Self(state).into()
	}
}

// Ok means the server answered with something we can show; Err means we never got that far
async fn send_registration(input: &RegistrationInput) -> Result<SubmissionResult, String> {
	let response = Request::post(REGISTER_URL)
		.json(input)
		.map_err(|e| format!("Couldn't encode registration: {e:?}"))?
		.send()
		.await
		.map_err(|e| format!("{e:?}"))?;

	if response.status() == 200 {
		return response.json::<SubmissionResult>()
			.await
			.map_err(|e| format!("There was an error while decoding: {e:?}"));
	}

	// mostly a 422 if the server's validation disagreed with ours. Nothing the user can act on
	// beyond trying again, so it gets the generic message
	let text = response.text().await.unwrap_or_else(|e| format!("{e:?}"));
	log!(format!("Registration request returned {}: {text}", response.status()));
	Ok(SubmissionResult { success: false, error: None })
}

fn text_field(
	form: &UseReducerHandle<Registration>,
	field: Field,
	label: &'static str,
	kind: &'static str,
	placeholder: &'static str,
	autocomplete: &'static str
) -> Html {
	let handle = form.clone();
	let oninput = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				handle.dispatch(FormMsg::Edit(field, input.value()));
			}
	);

	let error = form.0.field_error(field);

	html! {
		<div class="form-field">
			<label for={ field.key() }>{ label }</label>
			<input
				id={ field.key() }
				name={ field.key() }
				type={ kind }
				class={ classes!(error.is_some().then_some("invalid")) }
				placeholder={ placeholder }
				autocomplete={ autocomplete }
				value={ form.0.input().get(field).to_string() }
				{ oninput }
			/>
			if let Some(msg) = error {
				<p class="field-error">{ msg }</p>
			}
		</div>
	}
}

fn class_field(form: &UseReducerHandle<Registration>) -> Html {
	let handle = form.clone();
	let onchange = Callback::from(move |e: Event|
		if let Some(select) = e.target()
			.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
				handle.dispatch(FormMsg::Edit(Field::Classe, select.value()));
			}
	);

	let error = form.0.field_error(Field::Classe);
	let selected = form.0.input().classe.as_str();

	html! {
		<div class="form-field">
			<label for="classe">{ "Class" }</label>
			<select
				id="classe"
				name="classe"
				class={ classes!(error.is_some().then_some("invalid")) }
				{ onchange }
			>
				<option value="" selected={ selected.is_empty() }>{ "Select your class" }</option>
				{
					CLASSES.iter().map(|cls| html! {
						<option key={ *cls } value={ *cls } selected={ selected == *cls }>{ *cls }</option>
					}).collect::<Html>()
				}
			</select>
			if let Some(msg) = error {
				<p class="field-error">{ msg }</p>
			}
		</div>
	}
}

#[function_component(RegistrationForm)]
pub fn registration_form() -> Html {
	let form = use_reducer_eq(Registration::default);

	// Whenever a new snapshot gets handed off, send it. Retries after an error produce a fresh
	// snapshot (it goes back to None when resolved), so each one is sent exactly once.
	{
		let handle = form.clone();
		use_effect_with(form.0.in_flight().cloned(), move |in_flight: &Option<RegistrationInput>| {
			if let Some(input) = in_flight.clone() {
				wasm_bindgen_futures::spawn_local(async move {
					match send_registration(&input).await {
						Ok(result) => handle.dispatch(FormMsg::Resolved(result)),
						Err(err) => {
							log!(format!("Couldn't reach the server: {err}"));
							handle.dispatch(FormMsg::NetworkFailed);
						}
					}
				});
			}

			|| { }
		});
	}

	let status = form.0.status();

	let content = if status == SubmissionStatus::Success {
		let handle = form.clone();
		let submit_another = Callback::from(move |_| handle.dispatch(FormMsg::Reset));

		html! {
			<div id="registration-success">
				<h3>{ "Registration Complete!" }</h3>
				<p>{ "We've received your info. See you at STARTUP MINDS!" }</p>
				<button onclick={ submit_another }>{ "Submit another" }</button>
			</div>
		}
	} else {
		let handle = form.clone();
		let onsubmit = Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			handle.dispatch(FormMsg::Submit);
		});

		let loading = status == SubmissionStatus::Loading;

		html! {
			<form { onsubmit } novalidate={ true }>
				{ text_field(&form, Field::FullName, "Full Name", "text", "John Doe", "name") }
				{ text_field(&form, Field::Phone, "Phone Number", "tel", "+212 600 000 000", "tel") }
				{ text_field(&form, Field::Email, "Email Address", "email", "john@example.com", "email") }
				{ class_field(&form) }

				if status == SubmissionStatus::Error {
					<div id="submit-error">{ form.0.error_message().unwrap_or_default() }</div>
				}

				<button type="submit" id="submit-button" disabled={ loading }>
					{ if loading { "Sending..." } else { "Join the Event" } }
				</button>
			</form>
		}
	};

	html! {
		<>
			<style>{ STYLE }</style>
			<div id="registration-card">
				{ content }
			</div>
		</>
	}
}
