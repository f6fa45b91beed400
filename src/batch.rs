//! The batch accumulator and its typed result map.

use {
    crate::{
        correlate,
        error::Error,
        json_rpc::{Id, Params, Request},
        transport::Transport,
    },
    log::debug,
    serde::de::DeserializeOwned,
    serde_json::Value,
    std::{any::Any, collections::HashMap, fmt},
};

/// The type-descriptor capability bound to an id: decodes a raw result
/// value into whatever type the caller registered, boxed for storage.
type Decoder = Box<dyn Fn(&Value) -> Result<Box<dyn Any>, serde_json::Error>>;

/// The return-type registry: one decoder per id, last binding wins.
#[derive(Default)]
pub(crate) struct ReturnTypes {
    bindings: HashMap<Id, Decoder>,
}

impl ReturnTypes {
    pub(crate) fn bind<T>(&mut self, id: Id)
    where
        T: DeserializeOwned + Any,
    {
        self.bindings.insert(
            id,
            Box::new(|value| T::deserialize(value).map(|decoded| Box::new(decoded) as Box<dyn Any>)),
        );
    }

    pub(crate) fn decoder(&self, id: &Id) -> Option<&Decoder> {
        self.bindings.get(id)
    }
}

/// Accumulates calls for one wire-level batch.
///
/// All methods take the builder by value and hand it back, so calls chain.
/// [execute](BatchRequest::execute) consumes the builder: one instance is
/// one round trip, and reuse after sending is unrepresentable.
pub struct BatchRequest<'a> {
    transport: &'a dyn Transport,
    requests: Vec<Request>,
    return_types: ReturnTypes,
}

impl<'a> BatchRequest<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            transport,
            requests: Vec::new(),
            return_types: ReturnTypes::default(),
        }
    }

    /// Appends a call whose response will be correlated under `id`.
    pub fn add(mut self, id: impl Into<Id>, method: impl Into<String>, params: impl Into<Params>) -> Self {
        self.requests
            .push(Request::new_call(method.into(), params.into(), id.into()));
        self
    }

    /// [add](BatchRequest::add) plus a return-type binding for the same id.
    pub fn add_typed<T>(self, id: impl Into<Id>, method: impl Into<String>, params: impl Into<Params>) -> Self
    where
        T: DeserializeOwned + Any,
    {
        let id = id.into();
        self.add(id.clone(), method, params).return_type::<T>(id)
    }

    /// Appends a notification. It carries no id, so no response is
    /// expected and nothing will appear in the result map for it.
    pub fn add_notification(mut self, method: impl Into<String>, params: impl Into<Params>) -> Self {
        self.requests
            .push(Request::new_notif(method.into(), params.into()));
        self
    }

    /// Declares the type the result for `id` decodes as. Rebinding an id
    /// overwrites the previous binding; binding an id that was never
    /// added is legal and simply unused.
    pub fn return_type<T>(mut self, id: impl Into<Id>) -> Self
    where
        T: DeserializeOwned + Any,
    {
        self.return_types.bind::<T>(id.into());
        self
    }

    /// Serializes the accumulated calls as one JSON array (an empty batch
    /// still goes out on the wire), makes the single blocking transport
    /// round trip, and correlates the reply.
    pub fn execute(self) -> crate::Result<BatchResults> {
        let text = serde_json::to_string(&self.requests).map_err(Error::Serialization)?;
        debug!("sending a batch of {} requests", self.requests.len());
        let reply = self.transport.send(&text).map_err(Error::Transport)?;
        correlate::correlate(&reply, &self.return_types)
    }
}

/// Decoded results of one batch, keyed by call id.
pub struct BatchResults {
    results: HashMap<Id, Box<dyn Any>>,
}

impl BatchResults {
    pub(crate) fn new(results: HashMap<Id, Box<dyn Any>>) -> Self {
        Self { results }
    }

    /// The result correlated under `id`, if the batch carried one and it
    /// was registered as `T`.
    pub fn get<T: Any>(&self, id: impl Into<Id>) -> Option<&T> {
        self.results.get(&id.into()).and_then(|result| result.downcast_ref())
    }

    pub fn contains(&self, id: impl Into<Id>) -> bool {
        self.results.contains_key(&id.into())
    }

    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.results.keys()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl fmt::Debug for BatchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchResults")
            .field("ids", &self.results.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json, std::io};

    struct NoTransport;

    impl Transport for NoTransport {
        fn send(&self, _request: &str) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotConnected, "no transport"))
        }
    }

    #[test]
    fn requests_serialize_in_insertion_order() {
        let transport = NoTransport;
        let batch = BatchRequest::new(&transport)
            .add(1, "first", vec![json!(true)])
            .add_notification("second", vec![json!(2)])
            .add("three", "third", vec![]);
        assert_eq!(
            serde_json::to_string(&batch.requests).unwrap(),
            concat!(
                r#"[{"jsonrpc":"2.0","method":"first","params":[true],"id":1},"#,
                r#"{"jsonrpc":"2.0","method":"second","params":[2]},"#,
                r#"{"jsonrpc":"2.0","method":"third","id":"three"}]"#
            )
        );
    }

    #[test]
    fn last_return_type_binding_wins() {
        let mut types = ReturnTypes::default();
        types.bind::<i64>(Id::from(1));
        types.bind::<String>(Id::from(1));

        let decoded = types.decoder(&Id::from(1)).unwrap()(&json!("text")).unwrap();
        assert_eq!(decoded.downcast_ref::<String>(), Some(&"text".to_owned()));
    }

    #[test]
    fn transport_failures_surface_as_transport_errors() {
        let transport = NoTransport;
        let err = BatchRequest::new(&transport)
            .add_typed::<i64>(1, "sum", vec![json!(2), json!(3)])
            .execute()
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
