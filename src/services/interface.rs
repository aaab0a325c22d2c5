use crate::{DynSvc, InjectError, InjectResult, Service, ServiceInfo, Svc};

/// Indicates that a type can be resolved from a type-erased service. The most
/// basic implementation of this trait is that each sized service type can be
/// resolved from a service pointer holding exactly that type. The injector
/// cannot do the same for dynamic types (`dyn Trait`), so any interfaces using
/// traits must be declared explicitly before use. This trait should usually
/// be implemented automatically by the [`interface!`](crate::interface)
/// macro.
pub trait Interface: Service {
    /// Attempts to convert a type-erased service into a service pointer of
    /// this interface. If the service holds a type this interface does not
    /// know about, an [`InjectError::InvalidProvider`] is returned.
    fn downcast(service: DynSvc) -> InjectResult<Svc<Self>>;
}

impl<T: Service> Interface for T {
    fn downcast(service: DynSvc) -> InjectResult<Svc<Self>> {
        service
            .downcast::<T>()
            .map_err(|_| InjectError::InvalidProvider {
                service_info: ServiceInfo::of::<Self>(),
            })
    }
}

/// Marker trait that indicates that a type is an interface for another type.
/// Each sized type is an interface for itself, and each `dyn Trait` is an
/// interface for the types that it can resolve. This trait should usually be
/// implemented automatically by the [`interface!`](crate::interface) macro,
/// and is strictly used to enforce stronger type checking when assigning
/// implementations for interfaces.
pub trait InterfaceFor<T: Service>: Interface {}
impl<T: Service> InterfaceFor<T> for T {}

/// Marks a trait as being an interface for many other types. This means that
/// a request for the given trait can resolve to any of the types indicated by
/// this macro invocation.
///
/// The trait must have [`Service`](crate::Service) (or `Send + Sync`) as a
/// supertrait.
///
/// # Example
///
/// ```
/// use generic_injector::{interface, Service};
///
/// struct Bar;
/// #[cfg(test)]
/// struct MockBar;
///
/// trait Foo: Service {}
/// impl Foo for Bar {}
/// #[cfg(test)]
/// impl Foo for MockBar {}
///
/// // Requests for `dyn Foo` can resolve to either `Bar` or, in a test run,
/// // `MockBar`. Note that attributes are allowed on each of the listed types.
/// interface!(
///     Foo = [
///         Bar,
///         #[cfg(test)]
///         MockBar,
///     ]
/// );
/// ```
#[macro_export]
macro_rules! interface {
    ($trait:tt = [$($(#[$attr:meta])* $impl:ty),* $(,)?]) => {
        impl $crate::Interface for dyn $trait {
            #[allow(unused_mut)]
            fn downcast(
                service: $crate::DynSvc,
            ) -> $crate::InjectResult<$crate::Svc<Self>> {
                let mut service = service;
                $(
                    $(#[$attr])*
                    {
                        service = match service.downcast::<$impl>() {
                            Ok(service) => return Ok(service as $crate::Svc<Self>),
                            Err(service) => service,
                        };
                    }
                )*

                drop(service);
                Err($crate::InjectError::InvalidProvider {
                    service_info: $crate::ServiceInfo::of::<Self>(),
                })
            }
        }

        $(
            $(#[$attr])*
            impl $crate::InterfaceFor<$impl> for dyn $trait {}
        )*
    };
}
