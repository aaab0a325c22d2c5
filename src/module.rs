use crate::{Interface, Provider, ServiceInfo};

/// A collection of providers that can be added all at once to an
/// [`InjectorBuilder`](crate::InjectorBuilder). Modules can be used to group
/// together related services and configure the injector in pieces rather than
/// all at once.
///
/// For creating a module easily via a domain specific language, see
/// [`define_module!`].
#[derive(Default)]
pub struct Module {
    pub(crate) providers: Vec<Box<dyn Provider>>,
    pub(crate) private_modules: Vec<PrivateModule>,
}

impl Module {
    /// Assigns the provider for a service type. Multiple providers can be
    /// registered for a service.
    pub fn provide<P: Provider>(&mut self, provider: P) {
        self.add_provider(Box::new(provider));
    }

    /// Adds a provider to the module.
    pub fn add_provider(&mut self, provider: Box<dyn Provider>) {
        self.providers.push(provider);
    }

    /// Adds all the providers and private modules of another module to this
    /// one.
    pub fn install(&mut self, mut module: Module) {
        self.providers.append(&mut module.providers);
        self.private_modules.append(&mut module.private_modules);
    }

    /// Adds a private module. Only the services the private module exposes
    /// are visible to the rest of this module.
    pub fn install_private(&mut self, module: PrivateModule) {
        self.private_modules.push(module);
    }
}

impl From<PrivateModule> for Module {
    fn from(private_module: PrivateModule) -> Self {
        let mut module = Module::default();
        module.install_private(private_module);
        module
    }
}

/// A module whose services are hidden from the rest of the injector, except
/// for the ones it explicitly exposes. Services inside of a private module
/// can still request anything visible to the module it is installed into.
///
/// ```
/// use generic_injector::{
///     Injector, IntoSingleton, IntoTransient, Module, PrivateModule, Svc,
/// };
///
/// struct Connection(u16);
/// struct Repository(Svc<Connection>);
///
/// let mut private_module = PrivateModule::default();
/// private_module.provide((|| Connection(5432)).singleton());
/// private_module.provide(Repository.transient());
/// private_module.expose::<Repository>();
///
/// let mut builder = Injector::builder();
/// builder.add_module(Module::from(private_module));
///
/// let injector = builder.build();
/// let repository: Svc<Repository> = injector.get().unwrap();
/// assert_eq!(5432, repository.0 .0);
///
/// // The connection is only visible inside the private module.
/// assert!(injector.get::<Svc<Connection>>().is_err());
/// ```
#[derive(Default)]
pub struct PrivateModule {
    pub(crate) module: Module,
    pub(crate) exposed: Vec<ServiceInfo>,
}

impl PrivateModule {
    /// Assigns the provider for a service type inside of this private module.
    pub fn provide<P: Provider>(&mut self, provider: P) {
        self.module.provide(provider);
    }

    /// Adds a provider to the private module.
    pub fn add_provider(&mut self, provider: Box<dyn Provider>) {
        self.module.add_provider(provider);
    }

    /// Adds all the providers and private modules of a module to this private
    /// module.
    pub fn install(&mut self, module: Module) {
        self.module.install(module);
    }

    /// Adds a private module nested inside of this one.
    pub fn install_private(&mut self, module: PrivateModule) {
        self.module.install_private(module);
    }

    /// Makes a service provided by this module visible to the module it is
    /// installed into.
    pub fn expose<I: ?Sized + Interface>(&mut self) {
        let service_info = ServiceInfo::of::<I>();
        if !self.exposed.contains(&service_info) {
            self.exposed.push(service_info);
        }
    }
}

/// Defines a new module using a domain specific language.
///
/// ## Example
///
/// ```
/// use generic_injector::{
///     define_module, interface, Injector, IntoSingleton, Service, Svc,
/// };
///
/// struct Foo;
/// struct Bar(Svc<dyn Fooable>);
/// struct Baz(Svc<Bar>);
///
/// trait Fooable: Service {}
/// impl Fooable for Foo {}
/// interface!(Fooable = [Foo]);
///
/// let bar_module = define_module! {
///     services = [Bar.singleton()],
/// };
///
/// let module = define_module! {
///     services = [
///         Baz.singleton(),
///     ],
///     interfaces = {
///         dyn Fooable = [
///             (|| Foo).singleton(),
///         ],
///     },
///     modules = [bar_module],
/// };
///
/// let mut builder = Injector::builder();
/// builder.add_module(module);
///
/// let injector = builder.build();
/// let _baz: Svc<Baz> = injector.get().unwrap();
/// ```
#[macro_export]
macro_rules! define_module {
    {
        $(
            $(#[$($attr:meta),*])*
            $key:ident = $value:tt
        ),*
        $(,)?
    } => {
        {
            #[allow(unused_mut)]
            let mut module = <$crate::Module as ::std::default::Default>::default();
            $(
                $(#[$($attr),*])*
                $crate::define_module!(@provide &mut module, $key = $value);
            )*
            module
        }
    };
    (
        @provide $module:expr,
        services = [
            $($service:expr),*
            $(,)?
        ]
    ) => {
        $($module.provide($service);)*
    };
    (
        @provide $module:expr,
        interfaces = {
            $($interface:ty = [
                $($implementation:expr),*
                $(,)?
            ]),*
            $(,)?
        }
    ) => {
        $(
            $($module.provide($crate::TypedProvider::with_interface::<$interface>($implementation));)*
        )*
    };
    (
        @provide $module:expr,
        modules = [
            $($submodule:expr),*
            $(,)?
        ]
    ) => {
        $($module.install($submodule);)*
    };
}
