use reqwest::blocking::Client;

/// Client that ignores proxy settings from the environment so requests reach the mock server
pub fn client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// Encodes a feed document the way JMA publishes it
pub fn shift_jis(text: &str) -> Vec<u8> {
    let (body, _, had_errors) = encoding_rs::SHIFT_JIS.encode(text);
    assert!(!had_errors);
    body.into_owned()
}
