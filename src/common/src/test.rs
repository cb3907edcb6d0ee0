use std::{collections::VecDeque, fmt::Debug, fs};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Anything that answers requests with zero or more responses, in order.
pub trait RequestHandler<RQ, RS> {
    fn open(&mut self) -> Vec<RS>;
    fn handle(&mut self, request: RQ) -> Vec<RS>;
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum Event<RQ, RS> {
    Open,
    Send { request: RQ },
    Receive { response: RS },
    Comment { text: String },
}

/// A scripted conversation loaded from JSON, replayed against a [`RequestHandler`].
#[derive(Serialize, Deserialize)]
pub struct TestCase<RQ, RS> {
    sequence: Vec<Event<RQ, RS>>,
}

impl<RQ, RS> TestCase<RQ, RS>
where
    RQ: Serialize + for<'de> Deserialize<'de> + Debug + Clone,
    RS: Serialize + for<'de> Deserialize<'de> + Debug + PartialEq,
{
    pub fn load(file_path: String) -> Self {
        let text = fs::read_to_string(&file_path)
            .unwrap_or_else(|e| panic!("Unable to read {}: {}", file_path, e));
        serde_json::from_str(&text).expect("Could not parse test case")
    }

    pub fn run<H>(&self, handler: &mut H)
    where
        H: RequestHandler<RQ, RS>,
    {
        let mut pending: VecDeque<RS> = VecDeque::new();
        for event in self.sequence.iter() {
            match event {
                Event::Open => {
                    Self::expect_drained(&pending, "Open");
                    pending.extend(handler.open());
                }
                Event::Send { request } => {
                    Self::expect_drained(&pending, request);
                    debug!("Sending {:?}", request);
                    pending.extend(handler.handle(request.clone()));
                }
                Event::Receive { response: expected } => {
                    let response = pending
                        .pop_front()
                        .unwrap_or_else(|| panic!("No response waiting for {:?}", expected));
                    assert_eq!(expected, &response);
                }
                Event::Comment { text } => {
                    info!("Comment: {:}", text)
                }
            }
        }
        Self::expect_drained(&pending, "end of script");
    }

    fn expect_drained(pending: &VecDeque<RS>, before: impl Debug) {
        if let Some(response) = pending.front() {
            panic!(
                "Expected no unread response before {:?}, got {:?}",
                before, response
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo {
        opened: bool,
    }
    impl RequestHandler<String, String> for Echo {
        fn open(&mut self) -> Vec<String> {
            self.opened = true;
            vec!["hello".to_owned()]
        }
        fn handle(&mut self, request: String) -> Vec<String> {
            vec![request.clone(), request]
        }
    }

    fn case(json: &str) -> TestCase<String, String> {
        serde_json::from_str(json).expect("bad script")
    }

    #[test]
    fn replays_script() {
        let mut echo = Echo { opened: false };
        case(
            r#"{"sequence": [
                {"type": "Open"},
                {"type": "Receive", "response": "hello"},
                {"type": "Comment", "text": "echoes twice"},
                {"type": "Send", "request": "hi"},
                {"type": "Receive", "response": "hi"},
                {"type": "Receive", "response": "hi"}
            ]}"#,
        )
        .run(&mut echo);
        assert!(echo.opened);
    }

    #[test]
    #[should_panic(expected = "Expected no unread response")]
    fn unread_response_fails() {
        let mut echo = Echo { opened: false };
        case(
            r#"{"sequence": [
                {"type": "Send", "request": "hi"},
                {"type": "Receive", "response": "hi"}
            ]}"#,
        )
        .run(&mut echo);
    }

    #[test]
    #[should_panic]
    fn mismatched_response_fails() {
        let mut echo = Echo { opened: false };
        case(
            r#"{"sequence": [
                {"type": "Open"},
                {"type": "Receive", "response": "goodbye"}
            ]}"#,
        )
        .run(&mut echo);
    }
}
