//! Binding services to generic providers.
//!
//! A [`GenericProvider`] can produce an instance of any service it is asked
//! for, given that service's [`ServiceInfo`](crate::ServiceInfo). Use
//! [`bind`] to bind a service to one:
//!
//! ```
//! # use generic_injector::{generic, DynSvc, GenericProvider, InjectResult, ServiceInfo, Svc, Injector};
//! struct Foo;
//!
//! # #[derive(Default)]
//! # struct FooProvider;
//! # impl GenericProvider for FooProvider {
//! #     fn get(&self, _: ServiceInfo) -> InjectResult<DynSvc> { Ok(Svc::new(Foo)) }
//! # }
//! // An instance of a generic provider
//! let instance_module = generic::bind::<Foo>().to_provider(FooProvider);
//!
//! // A generic provider type, constructed (and injected) by the injector
//! let type_module = generic::bind::<Foo>().to_provider_type(FooProvider::default);
//! # let mut builder = Injector::builder();
//! # builder.add_module(type_module);
//! # let _foo: Svc<Foo> = builder.build().get().unwrap();
//! # drop(instance_module);
//! ```

mod adapters;
mod builder;
mod provider;

pub use builder::*;
pub use provider::*;

use crate::Interface;

/// Begins binding the service `I` to a generic provider. `I` may be a sized
/// service type or a `dyn Trait` interface declared with
/// [`interface!`](crate::interface).
#[must_use]
pub fn bind<I: ?Sized + Interface>() -> GenericProviderBuilder<I> {
    GenericProviderBuilder::new()
}
