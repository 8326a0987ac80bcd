use gloo_console::log;
use registration::RegistrationForm;

mod registration;

// The landing page is rendered by the backend; all we do is fill in its `#register` section
const MOUNT_ID: &str = "register";

fn main() {
	let root = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.get_element_by_id(MOUNT_ID));

	match root {
		Some(root) => {
			yew::Renderer::<RegistrationForm>::with_root(root).render();
		},
		None => log!(format!("No #{MOUNT_ID} element on this page; not mounting the registration form")),
	}
}
