use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use msal_rpc::{RequestArgs, RpcChannel, RpcFailure};
use serde_json::Value;

/// A single recorded call to [`FakeChannel::invoke`].
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Method name that was invoked.
    pub method: String,
    /// Argument mapping that was sent.
    pub args: RequestArgs,
}

/// A scripted in-memory RPC channel.
///
/// Every invocation is recorded. Responses are returned in the order they
/// were queued; when the queue is empty the channel echoes the argument
/// mapping back, which lets tests assert on the exact payload a client sends.
/// Clones share state with the original.
#[derive(Debug, Clone, Default)]
pub struct FakeChannel {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    responses: Arc<Mutex<VecDeque<Result<Value, RpcFailure>>>>,
}

impl FakeChannel {
    /// Creates a channel with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn push_ok(&self, value: Value) {
        self.responses
            .lock()
            .expect("response queue poisoned")
            .push_back(Ok(value));
    }

    /// Queues a structured backend failure.
    pub fn push_err(&self, failure: RpcFailure) {
        self.responses
            .lock()
            .expect("response queue poisoned")
            .push_back(Err(failure));
    }

    /// All calls recorded so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .expect("invocation log poisoned")
            .clone()
    }
}

impl RpcChannel for FakeChannel {
    // Resolution is synchronous; the returned future only delivers the result.
    fn invoke(
        &self,
        method: &str,
        args: RequestArgs,
    ) -> impl std::future::Future<Output = Result<Value, RpcFailure>> {
        self.invocations
            .lock()
            .expect("invocation log poisoned")
            .push(Invocation {
                method: method.to_owned(),
                args: args.clone(),
            });

        let scripted = self
            .responses
            .lock()
            .expect("response queue poisoned")
            .pop_front();
        std::future::ready(match scripted {
            Some(response) => response,
            None => Ok(Value::Object(args)),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn args(value: Value) -> RequestArgs {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[tokio::test]
    async fn scripted_responses_are_returned_in_order() {
        let channel = FakeChannel::new();
        channel.push_ok(json!(1));
        channel.push_err(RpcFailure::new("code", "message"));

        assert_eq!(channel.invoke("first", RequestArgs::new()).await, Ok(json!(1)));
        assert_eq!(
            channel.invoke("second", RequestArgs::new()).await,
            Err(RpcFailure::new("code", "message"))
        );

        let methods: Vec<_> = channel
            .invocations()
            .into_iter()
            .map(|call| call.method)
            .collect();
        assert_eq!(methods, ["first", "second"]);
    }

    #[tokio::test]
    async fn an_empty_queue_echoes_the_arguments() {
        let channel = FakeChannel::new();
        let sent = args(json!({"a": 1}));

        let response = channel.invoke("echo", sent.clone()).await;

        assert_eq!(response, Ok(Value::Object(sent)));
    }
}
