//! Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use gloo_timers::future::TimeoutFuture;
use login_fx::components::form_guard;
use login_fx::components::particle_field::{KEYFRAMES_ATTR, generate_particles_with};
use login_fx::config::{FxConfig, KeyframePolicy};
use login_fx::listeners::ListenerRegistry;
use login_fx::{
	animate_form_elements, current_config, initialize, is_listening, keyframe_count, set_config,
	show_error, teardown, toggle_visibility,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn fixture(html: &str) -> Element {
	let document = document();
	let root = document.create_element("div").unwrap();
	root.set_inner_html(html);
	document.body().unwrap().append_child(&root).unwrap();
	root
}

fn count(selector: &str) -> u32 {
	document().query_selector_all(selector).unwrap().length()
}

fn px(element: &Element, property: &str) -> f64 {
	let value = element
		.dyn_ref::<HtmlElement>()
		.unwrap()
		.style()
		.get_property_value(property)
		.unwrap();
	value.trim_end_matches("px").parse().unwrap()
}

fn input(id: &str) -> HtmlInputElement {
	document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn submit(form: &Element) -> Event {
	let init = EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = Event::new_with_event_init_dict("submit", &init).unwrap();
	form.dispatch_event(&event).unwrap();
	event
}

fn styled(configure: impl FnOnce(&mut FxConfig)) -> FxConfig {
	let mut config = FxConfig::default();
	configure(&mut config);
	set_config(config.clone()).unwrap();
	config
}

#[wasm_bindgen_test]
fn accumulating_passes_keep_every_rule() {
	fixture(r#"<div id="acc-field"></div>"#);
	styled(|c| {
		c.particles.count = 7;
		c.particles.keyframes = KeyframePolicy::Accumulate;
	});
	let rule_selector = format!("style[{}]", KEYFRAMES_ATTR);
	let before = count(&rule_selector);
	let mut rng = StdRng::seed_from_u64(11);

	generate_particles_with("acc-field", &mut rng);
	assert_eq!(count("#acc-field > .particle"), 7);
	assert_eq!(count(&rule_selector), before + 7);

	generate_particles_with("acc-field", &mut rng);
	assert_eq!(count("#acc-field > .particle"), 7);
	assert_eq!(count(&rule_selector), before + 14);
}

#[wasm_bindgen_test]
fn particles_are_square_and_inside_viewport() {
	fixture(r#"<div id="geo-field"></div>"#);
	styled(|c| c.particles.count = 25);
	generate_particles_with("geo-field", &mut StdRng::seed_from_u64(5));

	let window = web_sys::window().unwrap();
	let width = window.inner_width().unwrap().as_f64().unwrap();
	let height = window.inner_height().unwrap().as_f64().unwrap();
	let particles = document().query_selector_all("#geo-field > .particle").unwrap();
	assert_eq!(particles.length(), 25);
	for i in 0..particles.length() {
		let p: Element = particles.item(i).unwrap().dyn_into().unwrap();
		let w = px(&p, "width");
		assert_eq!(w, px(&p, "height"));
		assert!((50.0..250.0).contains(&w));
		let left = px(&p, "left");
		let top = px(&p, "top");
		assert!(left >= 0.0 && left < width);
		assert!(top >= 0.0 && top < height);
		let name = p
			.dyn_ref::<HtmlElement>()
			.unwrap()
			.style()
			.get_property_value("animation-name")
			.unwrap();
		assert_eq!(name, format!("float-{}", i));
	}
}

#[wasm_bindgen_test]
fn replace_policy_caps_rules_at_count() {
	fixture(r#"<div id="rep-field"></div>"#);
	styled(|c| {
		c.particles.count = 5;
		c.particles.keyframes = KeyframePolicy::Replace;
	});
	let mut rng = StdRng::seed_from_u64(2);
	for _ in 0..3 {
		generate_particles_with("rep-field", &mut rng);
	}
	assert_eq!(keyframe_count(), 5);
	assert_eq!(count(&format!("style[{}]", KEYFRAMES_ATTR)), 5);
	assert_eq!(count("#rep-field > .particle"), 5);
}

#[wasm_bindgen_test]
fn missing_container_changes_nothing() {
	styled(|_| {});
	let before = keyframe_count();
	generate_particles_with("no-such-field", &mut StdRng::seed_from_u64(1));
	assert_eq!(keyframe_count(), before);
}

#[wasm_bindgen_test]
fn toggle_round_trip() {
	fixture(
		r#"<input id="tg-token" type="password">
		<button id="tg-button" aria-label="Mostrar token"><i class="fas fa-eye"></i></button>"#,
	);
	styled(|c| {
		c.dom.token_input_id = "tg-token".into();
		c.dom.toggle_button_id = "tg-button".into();
	});
	let button = document().get_element_by_id("tg-button").unwrap();
	let icon = button.query_selector("i").unwrap().unwrap();

	toggle_visibility();
	assert_eq!(input("tg-token").type_(), "text");
	assert!(icon.class_list().contains("fa-eye-slash"));
	assert!(!icon.class_list().contains("fa-eye"));
	assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Ocultar token"));

	toggle_visibility();
	assert_eq!(input("tg-token").type_(), "password");
	assert!(icon.class_list().contains("fa-eye"));
	assert!(!icon.class_list().contains("fa-eye-slash"));
	assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Mostrar token"));
}

#[wasm_bindgen_test]
fn toggle_without_icon_leaves_input_alone() {
	fixture(r#"<input id="ni-token" type="password"><button id="ni-button"></button>"#);
	styled(|c| {
		c.dom.token_input_id = "ni-token".into();
		c.dom.toggle_button_id = "ni-button".into();
	});
	toggle_visibility();
	assert_eq!(input("ni-token").type_(), "password");
}

#[wasm_bindgen_test]
fn toggle_without_token_input_is_harmless() {
	fixture(r#"<button id="nt-button" aria-label="Mostrar token"><i class="fas fa-eye"></i></button>"#);
	styled(|c| {
		c.dom.token_input_id = "nt-token".into();
		c.dom.toggle_button_id = "nt-button".into();
	});
	toggle_visibility();
	let button = document().get_element_by_id("nt-button").unwrap();
	let icon = button.query_selector("i").unwrap().unwrap();
	assert!(icon.class_list().contains("fa-eye"));
	assert!(!icon.class_list().contains("fa-eye-slash"));
	assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Mostrar token"));
}

#[wasm_bindgen_test]
fn toggle_without_button_leaves_input_alone() {
	fixture(r#"<input id="nb-token" type="password">"#);
	styled(|c| {
		c.dom.token_input_id = "nb-token".into();
		c.dom.toggle_button_id = "nb-button".into();
	});
	toggle_visibility();
	assert_eq!(input("nb-token").type_(), "password");
}

#[wasm_bindgen_test]
fn entrance_delays_stagger_in_document_order() {
	fixture(
		r#"<div class="en-header"></div>
		<div class="en-group"></div>
		<div class="en-group"></div>
		<div class="en-links"></div>"#,
	);
	styled(|c| {
		c.entrance.section_selectors = vec![".en-header".into(), ".en-group".into(), ".en-links".into()];
	});
	animate_form_elements();

	let sections = document()
		.query_selector_all(".en-header, .en-group, .en-links")
		.unwrap();
	let expected = ["0.1s", "0.2s", "0.3s", "0.4s"];
	assert_eq!(sections.length(), 4);
	for i in 0..sections.length() {
		let section: HtmlElement = sections.item(i).unwrap().dyn_into().unwrap();
		assert!(section.class_list().contains("fade-in-up"));
		assert_eq!(
			section.style().get_property_value("animation-delay").unwrap(),
			expected[i as usize]
		);
	}
}

#[wasm_bindgen_test]
fn entrance_without_sections_is_harmless() {
	styled(|c| c.entrance.section_selectors = vec![".nothing-here".into()]);
	animate_form_elements();
	assert_eq!(count(".fade-in-up.nothing-here"), 0);
}

#[wasm_bindgen_test]
fn second_banner_replaces_first() {
	fixture(r#"<div><div class="bn-anchor"></div></div>"#);
	styled(|c| {
		c.dom.banner_anchor_selector = ".bn-anchor".into();
		c.banner.class_name = "bn-banner".into();
	});
	show_error("first");
	show_error("second");

	let banners = document().query_selector_all(".bn-banner").unwrap();
	assert_eq!(banners.length(), 1);
	let banner: Element = banners.item(0).unwrap().dyn_into().unwrap();
	assert_eq!(banner.text_content().as_deref(), Some("second"));
	assert_eq!(banner.get_attribute("role").as_deref(), Some("alert"));
	assert_eq!(banner.get_attribute("aria-live").as_deref(), Some("assertive"));
	let anchor = document().query_selector(".bn-anchor").unwrap().unwrap();
	assert_eq!(
		anchor.next_element_sibling().map(|e| e.class_name()).as_deref(),
		Some("bn-banner")
	);
}

#[wasm_bindgen_test]
fn banner_without_anchor_is_not_inserted() {
	styled(|c| {
		c.dom.banner_anchor_selector = ".no-anchor".into();
		c.banner.class_name = "na-banner".into();
	});
	show_error("dropped");
	assert_eq!(count(".na-banner"), 0);
}

#[wasm_bindgen_test]
async fn blank_token_blocks_submit_and_banner_expires() {
	let root = fixture(
		r#"<form class="bl-form">
			<div class="bl-anchor"><input id="bl-token" type="password" value="   "></div>
		</form>"#,
	);
	let config = styled(|c| {
		c.dom.form_selector = ".bl-form".into();
		c.dom.token_input_id = "bl-token".into();
		c.dom.banner_anchor_selector = ".bl-anchor".into();
		c.banner.class_name = "bl-banner".into();
		c.banner.dismiss_after_ms = 50;
	});
	let mut registry = ListenerRegistry::default();
	assert!(form_guard::install(&config, &mut registry).unwrap());

	let form = root.query_selector(".bl-form").unwrap().unwrap();
	let event = submit(&form);
	assert!(event.default_prevented());
	let banners = document().query_selector_all(".bl-banner").unwrap();
	assert_eq!(banners.length(), 1);
	assert_eq!(
		banners.item(0).unwrap().text_content().as_deref(),
		Some(current_config().banner.blank_token_message.as_str())
	);

	TimeoutFuture::new(150).await;
	assert_eq!(count(".bl-banner"), 0);
}

#[wasm_bindgen_test]
fn filled_token_submits_untouched() {
	let root = fixture(
		r#"<form class="ok-form">
			<div class="ok-anchor"><input id="ok-token" type="password" value="abc.def"></div>
		</form>"#,
	);
	let config = styled(|c| {
		c.dom.form_selector = ".ok-form".into();
		c.dom.token_input_id = "ok-token".into();
		c.dom.banner_anchor_selector = ".ok-anchor".into();
		c.banner.class_name = "ok-banner".into();
	});
	let mut registry = ListenerRegistry::default();
	form_guard::install(&config, &mut registry).unwrap();

	let form = root.query_selector(".ok-form").unwrap().unwrap();
	assert!(!submit(&form).default_prevented());
	assert_eq!(count(".ok-banner"), 0);
}

#[wasm_bindgen_test]
fn detached_guard_no_longer_blocks() {
	let root = fixture(
		r#"<form class="dt-form"><div class="dt-anchor"><input id="dt-token" value=""></div></form>"#,
	);
	let config = styled(|c| {
		c.dom.form_selector = ".dt-form".into();
		c.dom.token_input_id = "dt-token".into();
		c.dom.banner_anchor_selector = ".dt-anchor".into();
	});
	let mut registry = ListenerRegistry::default();
	form_guard::install(&config, &mut registry).unwrap();
	assert!(registry.detach(&form_guard::submit_key(&config)).unwrap());
	assert!(registry.is_empty());

	let form = root.query_selector(".dt-form").unwrap().unwrap();
	assert!(!submit(&form).default_prevented());
}

// `initialize` runs once per page, so this is the only test that calls it.
#[wasm_bindgen_test]
fn initialize_without_login_form_still_wires_toggle() {
	fixture(
		r#"<div id="it-field"></div>
		<div class="it-box">
			<input id="it-token" type="password" value="">
			<button id="it-button" type="button"><i class="fa-eye"></i></button>
		</div>"#,
	);
	styled(|c| {
		c.dom.particle_container_id = "it-field".into();
		c.dom.form_selector = ".it-form".into();
		c.dom.token_input_id = "it-token".into();
		c.dom.toggle_button_id = "it-button".into();
		c.particles.count = 3;
	});

	initialize();
	assert_eq!(count("#it-field > .particle"), 3);
	assert!(is_listening("it-button", "click"));
	assert!(!is_listening(".it-form", "submit"));
	let button: HtmlElement = document().get_element_by_id("it-button").unwrap().dyn_into().unwrap();
	assert_eq!(button.get_attribute("aria-label").as_deref(), Some("Mostrar token"));

	// second call is a no-op
	initialize();
	assert_eq!(count("#it-field > .particle"), 3);

	button.click();
	assert_eq!(input("it-token").type_(), "text");

	teardown();
	assert!(!is_listening("it-button", "click"));
	button.click();
	assert_eq!(input("it-token").type_(), "text");
}

#[wasm_bindgen_test]
fn guard_install_reports_missing_form() {
	styled(|c| c.dom.form_selector = ".mf-form".into());
	let mut registry = ListenerRegistry::default();
	assert!(!form_guard::install(&current_config(), &mut registry).unwrap());
	assert!(registry.is_empty());
}
