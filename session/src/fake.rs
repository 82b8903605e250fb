//! In-memory transports for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::transport::{Request, Response, Transport, TransportError};

type Reply = Result<Response, TransportError>;

/// Answers requests from a fixed queue and records what was sent.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            requests: RefCell::default(),
        }
    }

    pub(crate) fn json(bodies: impl IntoIterator<Item = Value>) -> Self {
        Self::new(bodies.into_iter().map(|body| Ok(Response::ok(body))))
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Reply {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

/// Holds each request open until the test releases the gate for its
/// `username`, so responses can be made to arrive in any order.
pub(crate) struct GatedTransport {
    gates: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
}

impl GatedTransport {
    pub(crate) fn new<'a>(usernames: impl IntoIterator<Item = &'a str>) -> (Self, HashMap<String, oneshot::Sender<Reply>>) {
        let mut senders = HashMap::new();
        let mut receivers = HashMap::new();
        for username in usernames {
            let (tx, rx) = oneshot::channel();
            senders.insert(username.to_owned(), tx);
            receivers.insert(username.to_owned(), rx);
        }
        (Self { gates: RefCell::new(receivers) }, senders)
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: Request) -> Reply {
        let username = request
            .body
            .as_ref()
            .and_then(|body| body.get("username"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let gate = self.gates.borrow_mut().remove(&username);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(TransportError::Network("gate dropped".to_owned()))),
            None => Err(TransportError::Network(format!("no gate for {username:?}"))),
        }
    }
}
