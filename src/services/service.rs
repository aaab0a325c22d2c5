#![allow(clippy::used_underscore_binding)]

use derive_more::{Display, Error};
use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// A reference-counted pointer holding a service.
pub type Svc<T> = Arc<T>;

/// A reference-counted service pointer holding an instance of `dyn Any`.
pub type DynSvc = Arc<dyn Any + Send + Sync>;

/// A result from attempting to inject dependencies into a service and
/// construct an instance of it.
pub type InjectResult<T> = Result<T, InjectError>;

/// Implemented automatically on types that are capable of being a service.
pub trait Service: Any + Send + Sync {}
impl<T: ?Sized + Any + Send + Sync> Service for T {}

/// Type information about a service. This is the runtime token used to
/// identify a service type, both by the injector and by generic providers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ServiceInfo {
    id: TypeId,
    name: &'static str,
}

impl ServiceInfo {
    /// Creates a [`ServiceInfo`] for the given type.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        ServiceInfo {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Gets the [`TypeId`] for this service.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Gets the type name of this service.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An error that has occurred during creation of a service.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum InjectError {
    /// Failed to find a provider for the requested type.
    #[display(fmt = "{} has no provider", "service_info.name()")]
    MissingProvider {
        /// The service that was requested.
        service_info: ServiceInfo,
    },

    /// A provider for a dependency of the requested service is missing.
    #[display(
        fmt = "{} has no provider (required by {})",
        "dependency_info.name()",
        "service_info.name()"
    )]
    MissingDependency {
        /// The service that was requested.
        service_info: ServiceInfo,

        /// The dependency that is missing a provider.
        dependency_info: ServiceInfo,
    },

    /// A cycle was detected during activation of a service.
    #[display(
        fmt = "a cycle was detected during activation of {} [{}]",
        "service_info.name()",
        "fmt_cycle(cycle)"
    )]
    CycleDetected {
        /// The service that was requested.
        service_info: ServiceInfo,

        /// The chain of services that were requested during resolution of
        /// this service.
        cycle: Vec<ServiceInfo>,
    },

    /// The requested implementer is not valid for the requested service.
    #[display(
        fmt = "{} is not registered as an implementer of {}",
        "implementation.name()",
        "service_info.name()"
    )]
    InvalidImplementation {
        /// The service that was requested.
        service_info: ServiceInfo,

        /// The implementation that was requested for this service.
        implementation: ServiceInfo,
    },

    /// The registered provider returned the wrong service type.
    #[display(
        fmt = "the registered provider for {} returned the wrong type",
        "service_info.name()"
    )]
    InvalidProvider {
        /// The service that was requested.
        service_info: ServiceInfo,
    },

    /// The requested service has too many providers registered.
    #[display(
        fmt = "the requested service {} has multiple providers registered",
        "service_info.name()"
    )]
    MultipleProviders {
        /// The service that was requested.
        service_info: ServiceInfo,
    },

    /// An error occurred during activation of a service.
    #[display(
        fmt = "an error occurred during activation of {}: {}",
        "service_info.name()",
        inner
    )]
    ActivationFailed {
        /// The service that was requested.
        service_info: ServiceInfo,

        /// The error that was returned during service creation.
        #[error(ignore)]
        inner: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An unexpected error has occurred. This is usually caused by a bug in
    /// the library itself.
    #[display(fmt = "an unexpected error occurred (please report this): {}", _0)]
    InternalError(#[error(ignore)] String),
}

impl InjectError {
    /// Wraps an error returned while creating an instance of `T`.
    pub fn activation_failed<T, E>(inner: E) -> Self
    where
        T: ?Sized + Any,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        InjectError::ActivationFailed {
            service_info: ServiceInfo::of::<T>(),
            inner: inner.into(),
        }
    }
}

fn fmt_cycle(cycle: &[ServiceInfo]) -> String {
    let mut joined = String::new();
    for item in cycle {
        if !joined.is_empty() {
            joined.push_str(" -> ");
        }
        joined.push_str(item.name());
    }
    joined
}
