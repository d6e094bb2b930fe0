//! The transport seam between record operations and the network.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;

/// Anything that can perform one authenticated HTTP round-trip.
///
/// Implementations return every response they receive, whatever its status;
/// status checking belongs to the caller. Authentication, timeouts and
/// connection reuse are the implementation's business.
///
/// [`HttpSession`](crate::HttpSession) is the reqwest-backed implementation.
/// Mocks and custom transports implement this trait directly:
///
/// ```rust
/// use snowjson_client::{Request, Response, Result, Transport};
///
/// struct Canned(&'static str);
///
/// impl Transport for Canned {
///     fn execute(&self, _request: Request) -> Result<Response> {
///         Ok(Response::new(200, self.0))
///     }
/// }
///
/// let response = Canned(r#"{"result": {}}"#)
///     .execute(Request::new(snowjson_client::RequestMethod::Get, "https://example.com"))
///     .unwrap();
/// assert!(response.is_success());
/// ```
pub trait Transport {
    /// Send the request and wait for the complete response.
    fn execute(&self, request: Request) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Rc<T> {
    fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestMethod;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<u32>,
    }

    impl Transport for Counting {
        fn execute(&self, request: Request) -> Result<Response> {
            self.calls.set(self.calls.get() + 1);
            Ok(Response::new(200, request.url))
        }
    }

    #[test]
    fn test_shared_transport_impls() {
        let counting = Counting { calls: Cell::new(0) };
        let request = || Request::new(RequestMethod::Get, "https://example.com/incident.do");

        let by_ref: &Counting = &counting;
        by_ref.execute(request()).unwrap();

        let boxed: Box<dyn Transport + '_> = Box::new(&counting);
        let response = boxed.execute(request()).unwrap();

        assert_eq!(response.body, "https://example.com/incident.do");
        assert_eq!(counting.calls.get(), 2);

        let shared = Rc::new(Counting { calls: Cell::new(0) });
        Rc::clone(&shared).execute(request()).unwrap();
        assert_eq!(shared.calls.get(), 1);
    }
}
