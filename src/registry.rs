//! Extension points: a process-wide registry of named operations.
//!
//! Instead of dynamic method interception, extensions are plain closures
//! stored under a name with a fixed signature, looked up through an explicit
//! invoke call. Registration is expected during single-threaded setup; the
//! registry is shared by every [`Collection`] in the process and entries
//! persist for the process lifetime.

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// Signature every extension implements: the receiving collection plus
/// positional arguments, producing a value or a typed error.
pub type ExtensionFn = dyn Fn(&Collection, &[Value]) -> Result<Value> + Send + Sync;

/// A named-operation registry.
///
/// `Registry::global()` is the instance all collections share; a dedicated
/// instance can be constructed and threaded explicitly where global state is
/// unwanted.
#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<String, Arc<ExtensionFn>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry shared by all collections.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Register `f` under `name`, replacing any previous entry.
    pub fn register(
        &self,
        name: impl Into<String>,
        f: impl Fn(&Collection, &[Value]) -> Result<Value> + Send + Sync + 'static,
    ) {
        self.entries
            .write()
            .expect("extension registry lock poisoned")
            .insert(name.into(), Arc::new(f));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .expect("extension registry lock poisoned")
            .contains_key(name)
    }

    /// Invoke the extension registered under `name` with `receiver` bound.
    pub fn invoke(&self, name: &str, receiver: &Collection, args: &[Value]) -> Result<Value> {
        let f = {
            let entries = self
                .entries
                .read()
                .expect("extension registry lock poisoned");
            entries.get(name).cloned()
        };
        match f {
            Some(f) => f(receiver, args),
            None => Err(Error::UnknownOperation {
                name: name.to_string(),
            }),
        }
    }

    /// Static-form invocation: no particular receiver. The extension runs
    /// against an empty collection.
    pub fn invoke_unbound(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.invoke(name, &Collection::new(), args)
    }
}

impl Collection {
    /// Register an extension in the global registry. All collections can
    /// then [`call`](Collection::call) it by name.
    pub fn extend(
        name: impl Into<String>,
        f: impl Fn(&Collection, &[Value]) -> Result<Value> + Send + Sync + 'static,
    ) {
        Registry::global().register(name, f);
    }

    /// True iff an extension is registered under `name` globally.
    pub fn has_extension(name: &str) -> bool {
        Registry::global().contains(name)
    }

    /// Invoke a globally registered extension with this collection bound as
    /// the receiver. Fails with [`Error::UnknownOperation`] for names never
    /// registered.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        Registry::global().invoke(name, self, args)
    }
}
