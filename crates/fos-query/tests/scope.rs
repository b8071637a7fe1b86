use std::rc::Rc;

use fos_dom::{Document, NodeRef};
use fos_html::parse;
use fos_query::{
    AriaRole, ByH1, ByName, ByRole, ByTag, DETACHED_ROOT, PanicReporter, QueryError,
    RecordingReporter, Scope, UNKNOWN_PREDICATE, predicate_fn,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn scope(doc: &Document) -> Scope<NodeRef> {
    init_tracing();
    Scope::document(Rc::new(PanicReporter), doc)
}

const LOGIN: &str = r#"
<main>
  <h1>Sign in</h1>
  <form aria-label="Login">
    <label for="email">Email</label>
    <input id="email" type="email" aria-describedby="email-hint">
    <p id="email-hint">We never share it</p>
    <label for="password">Password</label>
    <input id="password" type="password">
    <input id="remember" type="checkbox" aria-label="Remember me" checked>
    <button>Sign in</button>
  </form>
</main>
"#;

#[test]
fn test_login_form() {
    let doc = parse(LOGIN);
    let scope = scope(&doc);

    let email = scope.textbox(&[&ByName::new("Email")]);
    assert_eq!(email.element().get_attribute("id").as_deref(), Some("email"));
    assert_eq!(email.description(), "We never share it");
    email.write("jane@example.com");
    assert_eq!(email.value(), "jane@example.com");

    let password = scope.password_text(&[&ByName::new("Password")]);
    password.write("hunter2");
    assert_eq!(doc.get_element_by_id("password").unwrap().get_attribute("value").as_deref(), Some("hunter2"));

    let remember = scope.checkbox(&[&ByName::new("Remember me")]);
    assert_eq!(*remember.element(), doc.get_element_by_id("remember").unwrap());
    assert!(remember.is_checked());
    remember.uncheck();
    assert!(!remember.is_checked());

    let button = scope.get(&[&ByRole(AriaRole::Button), &ByName::new("Sign in")]);
    assert_eq!(button.outer_html(), "<button>Sign in</button>");
    assert_eq!(scope.get(&[&ByH1]).text_content(), "Sign in");
}

#[test]
fn test_password_field_is_not_a_textbox() {
    let doc = parse(LOGIN);
    let scope = scope(&doc);
    let textboxes: Vec<String> = scope
        .find_all(&[&ByRole(AriaRole::TextBox)])
        .filter_map(|n| n.get_attribute("id"))
        .collect();
    assert_eq!(textboxes, ["email"]);
}

#[test]
fn test_links_in_document_order() {
    let doc = parse(r#"<a href="/1">Link 1</a><div>Not link</div><a href="/2">Link 2</a>"#);
    let links: Vec<String> = scope(&doc)
        .find_all(&[&ByRole(AriaRole::Link)])
        .map(|n| n.text_content())
        .collect();
    assert_eq!(links, ["Link 1", "Link 2"]);
}

#[test]
fn test_subscope_narrows_search() {
    let doc = parse(
        r#"
        <form aria-label="Shipping"><button>Continue</button></form>
        <form aria-label="Billing"><button>Continue</button></form>
        "#,
    );
    let scope = scope(&doc);
    let continue_button = ByName::new("Continue");
    assert!(scope.try_find(&[&continue_button]).is_err());

    let billing = scope.subscope(&[&ByRole(AriaRole::Form), &ByName::new("Billing")]);
    assert_eq!(billing.container().get_attribute("aria-label").as_deref(), Some("Billing"));

    let button = billing.get(&[&continue_button]);
    assert_eq!(button.parent().unwrap(), *billing.container());
}

#[test]
fn test_subscope_yields_container_first() {
    let doc = parse(r#"<section id="outer"><div id="a"><p id="a1"></p></div><div id="b"></div></section>"#);
    let section = scope(&doc).subscope(&[&ByTag::new("section")]);
    let ids: Vec<String> = section.all().filter_map(|n| n.get_attribute("id")).collect();
    assert_eq!(ids, ["outer", "a", "a1", "b"]);
}

#[test]
fn test_query_presence() {
    let doc = parse(r#"<div role="alert">Saved</div>"#);
    let scope = scope(&doc);
    assert!(scope.query(&[&ByRole(AriaRole::Alert)]).is_some());
    assert!(scope.query(&[&ByRole(AriaRole::Banner)]).is_none());
}

#[test]
#[should_panic(expected = "No elements matching options: By role: button, By accessibility name: Delete")]
fn test_get_without_match_is_fatal() {
    let doc = parse(LOGIN);
    scope(&doc).get(&[&ByRole(AriaRole::Button), &ByName::new("Delete")]);
}

#[test]
#[should_panic(expected = "At least two elements match options: By tag: label\n1st match: <label for=\"email\">Email</label>\n2nd match: <label for=\"password\">Password</label>")]
fn test_get_with_two_matches_is_fatal() {
    let doc = parse(LOGIN);
    scope(&doc).get(&[&ByTag::new("label")]);
}

#[test]
#[should_panic(expected = "CheckboxRole::check: only input elements are supported, got <div>")]
fn test_checkbox_without_native_state_is_fatal() {
    let doc = parse(r#"<div role="checkbox" aria-label="Agree"></div>"#);
    scope(&doc).checkbox(&[&ByName::new("Agree")]).check();
}

#[test]
fn test_custom_predicate_has_no_description() {
    let doc = parse(r#"<p data-testid="x">Hi</p>"#);
    let scope = scope(&doc);
    let by_test_id = predicate_fn(|n: &NodeRef| n.get_attribute("data-testid").as_deref() == Some("x"));
    assert_eq!(scope.get(&[&by_test_id]).text_content(), "Hi");

    let missing = predicate_fn(|n: &NodeRef| n.has_attribute("data-missing"));
    assert_eq!(
        scope.try_get(&[&missing]),
        Err(QueryError::NoMatch {
            predicate: UNKNOWN_PREDICATE.to_string()
        })
    );
}

#[test]
fn test_document_scope_follows_root_replacement() {
    let doc = parse("<h1>Old</h1>");
    let scope = scope(&doc);
    assert_eq!(scope.get(&[&ByH1]).text_content(), "Old");

    let html = doc.create_element("html");
    html.append_element("body")
        .and_then(|body| body.append_element("h1"))
        .and_then(|h1| h1.set_text_content("New"))
        .unwrap();
    doc.replace_document_element(&html).unwrap();

    assert_eq!(scope.get(&[&ByH1]).text_content(), "New");
}

#[test]
fn test_detached_root_warns() {
    init_tracing();
    let doc = parse(r#"<nav><a href="/">Home</a></nav>"#);
    let nav = doc.body().unwrap().children().remove(0);
    nav.remove();
    assert!(!nav.is_connected());

    let reporter = Rc::new(RecordingReporter::new());
    let scope = Scope::new(reporter.clone(), nav);
    assert_eq!(scope.get(&[&ByName::new("Home")]).get_attribute("href").as_deref(), Some("/"));
    assert_eq!(reporter.warnings(), [DETACHED_ROOT]);
}

#[test]
fn test_try_api_with_anyhow() -> anyhow::Result<()> {
    let doc = parse(LOGIN);
    let scope = scope(&doc);

    let form = scope.try_get(&[&ByRole(AriaRole::Form)])?;
    assert_eq!(form.get_attribute("aria-label").as_deref(), Some("Login"));

    let missing = scope.try_get(&[&ByRole(AriaRole::Link)]);
    assert!(matches!(missing, Err(QueryError::NoMatch { .. })));
    Ok(())
}

#[test]
fn test_name_keeps_whitespace_between_inline_children() {
    let doc = parse(r#"<button id="b"><span>Sign</span> <span>in</span></button>"#);
    let scope = scope(&doc);
    let button = scope.query(&[&ByRole(AriaRole::Button), &ByName::new("Sign in")]);
    assert_eq!(button, doc.get_element_by_id("b"));
}

#[test]
fn test_panicking_scope_over_element() {
    init_tracing();
    let doc = parse(r#"<header><a href="/">Home</a></header><main><a href="/docs">Docs</a></main>"#);
    let main = doc.body().unwrap().children().remove(1);
    let scope = Scope::panicking(main);
    let link = scope.get(&[&ByRole(AriaRole::Link)]);
    assert_eq!(link.get_attribute("href").as_deref(), Some("/docs"));
}

#[test]
#[should_panic(expected = "No elements matching options: By role: form, By accessibility name: Billing")]
fn test_subscope_without_match_is_fatal() {
    let doc = parse(LOGIN);
    scope(&doc).subscope(&[&ByRole(AriaRole::Form), &ByName::new("Billing")]);
}

#[test]
#[should_panic(expected = "At least two elements match options: By role: textbox, By tag: input\n1st match: <input id=\"email\" type=\"email\" aria-describedby=\"email-hint\">")]
fn test_find_with_two_matches_is_fatal() {
    let doc = parse(r#"<input id="email" type="email" aria-describedby="email-hint"><input id="other">"#);
    scope(&doc).find(&[&ByRole(AriaRole::TextBox), &ByTag::new("input")]);
}
