use http::Method;
use reqwest::Url;

use crate::output::print::PrintOutputter;
use crate::runtime::{build_request, parse_method, select_config, Runtime};
use crate::{
    ClientConfig, HttpClient, ReqwestHttpClient, DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL,
};

#[test]
fn mode_flag_overrides_the_environment() {
    assert_eq!(
        select_config(Some("development"), false).unwrap(),
        ClientConfig::new(DEVELOPMENT_BASE_URL)
    );
    assert_eq!(
        select_config(Some("staging"), false).unwrap().base_url,
        PRODUCTION_BASE_URL
    );
}

#[test]
fn accepting_invalid_certs_clears_ssl_check() {
    assert!(select_config(Some("development"), false).unwrap().ssl_check);
    let config = select_config(Some("development"), true).unwrap();
    assert!(!config.ssl_check);
    assert!(ReqwestHttpClient::create(config).is_ok());
}

#[test]
fn no_path_prints_the_base_url() {
    let mut buf = Vec::new();
    let mut outputter = PrintOutputter::new(&mut buf, false);
    let config = select_config(Some("development"), true).unwrap();

    let mut runtime = Runtime::new(config, &mut outputter);
    assert!(!runtime.config().ssl_check);
    runtime.execute(&Method::GET, None, None).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "http://localhost:5001/api\n"
    );
}

#[test]
fn methods() {
    assert_eq!(parse_method("GET").unwrap(), Method::GET);
    assert_eq!(parse_method("POST").unwrap(), Method::POST);
    assert_eq!(parse_method("PUT").unwrap(), Method::PUT);
    assert_eq!(parse_method("DELETE").unwrap(), Method::DELETE);
    assert!(parse_method("PATCH").is_err());
    assert!(parse_method("get").is_err());
}

#[test]
fn bodies_only_go_with_post_and_put() {
    let url = Url::parse("http://localhost:5001/api/notes").unwrap();

    assert!(build_request(&Method::GET, &url, Some("{}")).is_err());
    assert!(build_request(&Method::DELETE, &url, Some("{}")).is_err());

    let request = build_request(&Method::POST, &url, Some(r#"{"title":"a"}"#)).unwrap();
    assert_eq!(*request.method(), Method::POST);
    assert_eq!(request.uri(), "http://localhost:5001/api/notes");
    assert_eq!(request.headers()["content-type"], "application/json");
    assert_eq!(request.body().as_deref(), Some(r#"{"title":"a"}"#));

    let request = build_request(&Method::DELETE, &url, None).unwrap();
    assert_eq!(request.body(), &None);
}
