//! Test doubles shared by the client tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use snowjson_client::{Error, ErrorKind, Request, Response, Result, Transport};

/// Transport that replays canned outcomes and records every request.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    outcomes: RefCell<VecDeque<std::result::Result<Response, ErrorKind>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(Response::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub(crate) fn fail(self, kind: ErrorKind) -> Self {
        self.outcomes.borrow_mut().push_back(Err(kind));
        self
    }

    /// Requests received so far, in order.
    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// Number of queued outcomes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.outcomes.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: Request) -> Result<Response> {
        self.requests.borrow_mut().push(request);
        match self.outcomes.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(kind)) => Err(Error::new(kind)),
            None => Err(Error::new(ErrorKind::Other(
                "scripted transport exhausted".to_string(),
            ))),
        }
    }
}

/// Runs blocking client code off the async test thread.
pub(crate) async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
