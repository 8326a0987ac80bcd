use axum::response::Html;
use build_info::{VersionControl, GitInfo};
use const_format::concatcp;
use horrorshow::{html, Raw, helper::doctype, RenderOnce, TemplateBuffer, Template};
use http::StatusCode;

/// Where the wasm-bindgen output for the form is served from
pub const DIST_PREFIX: &str = "/dist";

// `wasm-bindgen --target web` output; `init()` finds frontend_bg.wasm next to the js file
const MOUNT_SCRIPT: &str = concatcp!("import init from \"", DIST_PREFIX, "/frontend.js\"; init();");

const STYLE: &str = r#"
main {
	max-width: 1024px;
	margin: 0 auto;
	padding: 64px 16px;
}
#hero {
	max-width: 56rem;
	margin: 0 auto 64px auto;
	text-align: center;
}
#badge {
	display: inline-block;
	padding: 4px 12px;
	border-radius: 999px;
	border: 1px solid rgba(99, 102, 241, 0.3);
	background-color: var(--accent-soft);
	color: #818cf8;
	font-size: 14px;
	font-weight: 500;
}
#hero h1 {
	font-size: 72px;
	font-weight: 800;
	letter-spacing: -0.025em;
	margin: 24px 0;
}
.gradient-text {
	background: linear-gradient(to right, #60a5fa, #818cf8, #c084fc);
	-webkit-background-clip: text;
	background-clip: text;
	color: transparent;
}
#tagline {
	font-size: 20px;
	line-height: 1.6;
	color: var(--secondary-text);
	max-width: 42rem;
	margin: 0 auto;
}
#info-items {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 32px;
	padding-top: 16px;
}
.info-item {
	padding: 8px 16px;
	border-radius: 999px;
	border: 1px solid var(--border-color);
	background-color: rgba(24, 24, 27, 0.4);
	color: var(--secondary-text);
	font-size: 14px;
	font-weight: 500;
}
noscript {
	display: block;
	text-align: center;
	color: var(--secondary-text);
}
footer {
	margin-top: 96px;
	text-align: center;
	color: var(--muted-text);
	font-size: 14px;
}
footer a {
	color: var(--muted-text);
}
"#;

build_info::build_info!(pub fn build);

pub async fn landing_page() -> Result<Html<String>, StatusCode> {
	LandingPage.into_string()
		.map(Html)
		.map_err(|e| {
			tracing::error!("Couldn't render landing page: {e}");
			StatusCode::INTERNAL_SERVER_ERROR
		})
}

struct LandingPage;

impl RenderOnce for LandingPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let build_info = build();
		let compiler_info = &build_info.compiler;
		let commit = match build_info.version_control {
			Some(VersionControl::Git(GitInfo { ref commit_short_id, .. })) => commit_short_id.as_str(),
			_ => "?????"
		};

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					title : "STARTUP MINDS";
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					meta(name = "description", content = "Register for STARTUP MINDS, the ultimate gathering for tomorrow's innovators.");
					style : Raw(shared_data::BASE_STYLE);
					style : Raw(STYLE);
				}
				body {
					main {
						div(id = "hero") {
							span(id = "badge") : "Next Big Thing In Tech";
							h1 {
								: "STARTUP ";
								span(class = "gradient-text") : "MINDS";
							}
							p(id = "tagline") {
								: "The ultimate gathering for tomorrow's innovators. Join us for a day of networking, ";
								: "inspiration, and the future of technology.";
							}
							div(id = "info-items") {
								@ for item in ["Coming Soon", "OFPPT Campus", "Limited Seats"] {
									span(class = "info-item") : item;
								}
							}
						}
						section(id = "register") {
							noscript : "Registration needs javascript enabled, sorry about that!";
						}
						footer {
							p : "© 2026 STARTUP MINDS. Powered by OFPPT Innovation Hub.";
							p : format!(
								"Built at {} with rustc {} {}, commit #{commit}, using axum, tokio, horrorshow, and yew",
								build_info.timestamp, compiler_info.channel, compiler_info.version
							);
						}
					}
					script(type = "module") : Raw(MOUNT_SCRIPT);
				}
			}
		};
	}
}
