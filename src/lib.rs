//! Runtime dependency injection with generic providers.
//!
//! Many libraries offer a factory function that can build an instance of
//! almost any type as long as it is told which type to build. Mock
//! generators are the typical example. The injector's own providers are
//! always tied to a single service type, so adapting such a factory normally
//! takes one hand-written provider per service, with the type repeated in
//! each one.
//!
//! A [`GenericProvider`] instead declares that it can produce any requested
//! service, given the [`ServiceInfo`] of that service. [`generic::bind`]
//! then binds a service to it in a single line:
//!
//! ```
//! use generic_injector::{
//!     generic, interface, DynSvc, GenericProvider, InjectError, InjectResult,
//!     Injector, Service, ServiceInfo, Svc,
//! };
//!
//! trait Greeter: Service {
//!     fn greet(&self) -> String;
//! }
//!
//! struct StubGreeter;
//! impl Greeter for StubGreeter {
//!     fn greet(&self) -> String {
//!         "stub".to_owned()
//!     }
//! }
//!
//! interface!(Greeter = [StubGreeter]);
//!
//! // Produces a stub for every service it knows about.
//! #[derive(Default)]
//! struct Stubs;
//!
//! impl GenericProvider for Stubs {
//!     fn get(&self, service_info: ServiceInfo) -> InjectResult<DynSvc> {
//!         if service_info == ServiceInfo::of::<dyn Greeter>() {
//!             Ok(Svc::new(StubGreeter))
//!         } else {
//!             Err(InjectError::MissingProvider { service_info })
//!         }
//!     }
//! }
//!
//! let mut builder = Injector::builder();
//! builder.add_module(generic::bind::<dyn Greeter>().to_provider_type(Stubs::default));
//!
//! let injector = builder.build();
//! let greeter: Svc<dyn Greeter> = injector.get().unwrap();
//! assert_eq!("stub", greeter.greet());
//! ```
//!
//! # Service lifetimes
//!
//! Lifetimes of services created by the [`Injector`] are controlled by the
//! provider used to construct those lifetimes:
//!
//! - Singleton: A service is created only the first time it is requested and
//!   that single instance is reused for each future request.
//! - Transient: A service is created each time it is requested.
//! - Constant: Used for services that are not created using a factory
//!   function and instead can have their instance provided to the container
//!   directly.
//!
//! Services bound to a generic provider are created each time they are
//! requested.
//!
//! # Private modules
//!
//! A [`PrivateModule`] keeps its services to itself and exposes only the
//! ones it names. Binding a service to a generic provider type uses one to
//! hide the provider: only the bound service is visible to the rest of the
//! injector.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

mod builder;
pub mod generic;
mod injector;
mod module;
mod registry;
mod request;
mod services;

pub use builder::*;
pub use generic::GenericProvider;
pub use injector::*;
pub use module::*;
pub(crate) use registry::*;
pub use request::*;
pub use services::*;

#[cfg(test)]
mod tests;
