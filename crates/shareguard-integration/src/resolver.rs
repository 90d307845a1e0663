//! Contract binding resolver.

use std::any::Any;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::info;

use shareguard_core::error::AppError;
use shareguard_core::result::AppResult;
use shareguard_core::traits::locator::ServiceLocation;

/// How a contract was bound at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingKind {
    /// Served by an in-process provider.
    Local,
    /// Served by a network-bound client against the given endpoint.
    Remote {
        /// Base URL the client was built against.
        endpoint: String,
    },
}

impl std::fmt::Display for BindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingKind::Local => write!(f, "local"),
            BindingKind::Remote { endpoint } => write!(f, "remote({endpoint})"),
        }
    }
}

type ErasedProvider = Box<dyn Any + Send + Sync>;
type RemoteFactory = Box<dyn FnOnce(&str) -> AppResult<ErasedProvider> + Send>;

struct Binding {
    provider: ErasedProvider,
    kind: BindingKind,
}

/// Builder collecting providers during the startup window.
///
/// Selection runs once, in [`build`](Self::build): a local provider always
/// wins its contract; a contract with only a remote factory needs the
/// locator to yield an endpoint; anything else fails the build so a
/// misconfigured process never accepts traffic.
pub struct IntegrationResolverBuilder {
    locator: Arc<dyn ServiceLocation>,
    locals: HashMap<String, ErasedProvider>,
    remotes: HashMap<String, RemoteFactory>,
}

impl IntegrationResolverBuilder {
    /// Create a builder using the given locator for remote contracts.
    pub fn new(locator: Arc<dyn ServiceLocation>) -> Self {
        Self {
            locator,
            locals: HashMap::new(),
            remotes: HashMap::new(),
        }
    }

    /// Register an in-process provider for a contract.
    ///
    /// The provider must be registered as the contract's trait object
    /// (`Arc<dyn Contract>`), the exact type callers later resolve.
    pub fn provide_local<C>(mut self, contract_id: impl Into<String>, provider: Arc<C>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.locals.insert(contract_id.into(), Box::new(provider));
        self
    }

    /// Register a factory building a network-bound client for a contract.
    ///
    /// The factory receives the endpoint resolved by the locator and runs
    /// only when no local provider claimed the contract.
    pub fn provide_remote<C, F>(mut self, contract_id: impl Into<String>, factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: FnOnce(&str) -> AppResult<Arc<C>> + Send + 'static,
    {
        let factory: RemoteFactory = Box::new(move |endpoint| {
            factory(endpoint).map(|client| Box::new(client) as ErasedProvider)
        });
        self.remotes.insert(contract_id.into(), factory);
        self
    }

    /// Bind every registered contract and freeze the resolver.
    ///
    /// Fails with `UnresolvableContract` when a contract has neither a
    /// local provider nor a configured endpoint for its remote factory.
    pub async fn build(mut self) -> AppResult<IntegrationResolver> {
        let mut contract_ids: BTreeSet<String> = self.locals.keys().cloned().collect();
        contract_ids.extend(self.remotes.keys().cloned());

        let mut bindings = HashMap::new();
        for contract_id in contract_ids {
            if let Some(provider) = self.locals.remove(&contract_id) {
                info!(contract_id = %contract_id, binding = "local", "Contract bound");
                bindings.insert(
                    contract_id,
                    Binding {
                        provider,
                        kind: BindingKind::Local,
                    },
                );
            } else if let Some(factory) = self.remotes.remove(&contract_id) {
                let endpoint = self
                    .locator
                    .resolve_endpoint(&contract_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::unresolvable_contract(format!(
                            "Contract '{contract_id}' has no local provider and no endpoint \
                             is configured"
                        ))
                    })?;

                let provider = factory(&endpoint)?;
                info!(
                    contract_id = %contract_id,
                    binding = "remote",
                    endpoint = %endpoint,
                    "Contract bound"
                );
                bindings.insert(
                    contract_id,
                    Binding {
                        provider,
                        kind: BindingKind::Remote { endpoint },
                    },
                );
            }
        }

        Ok(IntegrationResolver {
            bindings: Arc::new(bindings),
        })
    }
}

impl std::fmt::Debug for IntegrationResolverBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrationResolverBuilder")
            .field("locals", &self.locals.keys().collect::<Vec<_>>())
            .field("remotes", &self.remotes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Frozen contract bindings.
///
/// Each resolve hands out a cheap clone of the `Arc` chosen at build time.
/// There is no rebinding: topology changes require a restart.
#[derive(Clone)]
pub struct IntegrationResolver {
    bindings: Arc<HashMap<String, Binding>>,
}

impl IntegrationResolver {
    /// Start building a resolver.
    pub fn builder(locator: Arc<dyn ServiceLocation>) -> IntegrationResolverBuilder {
        IntegrationResolverBuilder::new(locator)
    }

    /// Resolve a contract to its bound implementation.
    pub fn resolve<C>(&self, contract_id: &str) -> AppResult<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let binding = self.bindings.get(contract_id).ok_or_else(|| {
            AppError::unresolvable_contract(format!("No binding for contract '{contract_id}'"))
        })?;

        binding
            .provider
            .downcast_ref::<Arc<C>>()
            .cloned()
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Contract '{contract_id}' is bound to a different interface type"
                ))
            })
    }

    /// How a contract was bound, for diagnostics.
    pub fn binding(&self, contract_id: &str) -> Option<&BindingKind> {
        self.bindings.get(contract_id).map(|binding| &binding.kind)
    }

    /// All bound contract identifiers, sorted.
    pub fn contract_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.bindings.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl std::fmt::Debug for IntegrationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrationResolver")
            .field("contracts", &self.contract_ids())
            .finish()
    }
}
