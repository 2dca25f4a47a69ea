use serde::Serialize;

#[derive(Serialize)]
pub struct SlackPayload<'a> {
    pub text: &'a str,
}
