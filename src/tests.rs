#![allow(clippy::disallowed_names)]

use crate::{
    constant, define_module, interface, InjectError, InjectResult, Injector,
    IntoSingleton, IntoTransient, Module, PrivateModule, Service, ServiceInfo,
    Svc, TypedProvider,
};
use std::sync::Mutex;

#[derive(Default)]
struct Svc1(pub i32);

struct Svc2 {
    pub dep1: Svc<Svc1>,
}

impl Svc2 {
    pub fn new(dep1: Svc<Svc1>) -> Self {
        Svc2 { dep1 }
    }
}

struct Svc3 {
    pub dep1: Svc<Svc1>,
    pub dep2: Svc<Svc2>,
}

impl Svc3 {
    pub fn new(dep1: Svc<Svc1>, dep2: Svc<Svc2>) -> Self {
        Svc3 { dep1, dep2 }
    }
}

#[test]
fn can_make_svc1() {
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.transient());

    let injector = builder.build();
    let _service: Svc<Svc1> = injector.get().unwrap();
}

#[test]
fn cant_make_svc1_when_no_provider() {
    let injector = Injector::builder().build();
    let svc: InjectResult<Svc<Svc1>> = injector.get();
    match svc {
        Err(InjectError::MissingProvider { service_info })
            if service_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => unreachable!(),
    }

    let svc: Option<Svc<Svc1>> = injector.get().unwrap();
    match svc {
        None => {}
        Some(_) => panic!("service should not have been created"),
    }
}

#[test]
fn can_make_svc3() {
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.transient());
    builder.provide(Svc2::new.transient());
    builder.provide(Svc3::new.transient());

    let injector = builder.build();
    let _service: Svc<Svc3> = injector.get().unwrap();
}

#[test]
fn cant_make_svc3_when_no_provider_for_dependency() {
    let mut builder = Injector::builder();
    builder.provide(Svc2::new.transient());
    builder.provide(Svc3::new.transient());

    let injector = builder.build();
    match injector.get::<Svc<Svc3>>() {
        Err(InjectError::MissingDependency {
            dependency_info, ..
        }) if dependency_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => unreachable!("service should not be able to be activated"),
    }
}

#[test]
fn singleton() {
    type Counter = Mutex<i32>;

    fn make_svc1(counter: Svc<Counter>) -> Svc1 {
        let mut counter = counter.lock().unwrap();
        *counter += 1;
        Svc1(*counter)
    }

    let mut builder = Injector::builder();
    builder.provide((|| Mutex::new(0)).singleton());
    builder.provide(make_svc1.transient());
    builder.provide(Svc2::new.transient());
    builder.provide(Svc3::new.transient());

    let injector = builder.build();
    let svc1: Svc<Svc1> = injector.get().unwrap();
    let svc2: Svc<Svc2> = injector.get().unwrap();
    let svc3: Svc<Svc3> = injector.get().unwrap();

    assert_ne!(svc1.0, svc2.dep1.0);
    assert_ne!(svc1.0, svc3.dep1.0);
    assert_ne!(svc2.dep1.0, svc3.dep1.0);
}

#[test]
fn constants() {
    type Counter = Mutex<i32>;

    fn make_svc1(counter: Svc<Counter>) -> Svc1 {
        let mut counter = counter.lock().unwrap();
        *counter += 1;
        Svc1(*counter)
    }

    let mut builder = Injector::builder();
    builder.provide(constant(Mutex::new(0)));
    builder.provide(make_svc1.transient());
    builder.provide(Svc2::new.transient());
    builder.provide(Svc3::new.transient());

    let injector = builder.build();
    let svc1: Svc<Svc1> = injector.get().unwrap();
    let svc2: Svc<Svc2> = injector.get().unwrap();
    let svc3: Svc<Svc3> = injector.get().unwrap();

    assert_ne!(svc1.0, svc2.dep1.0);
    assert_ne!(svc1.0, svc3.dep1.0);
    assert_ne!(svc2.dep1.0, svc3.dep1.0);
}

#[test]
fn interfaces() {
    pub trait Foo: Service {
        fn bar(&self) -> i32;
    }

    interface!(
        Foo = [
            Svc1,
            #[cfg(test)]
            Svc2,
            #[cfg(not(test))]
            Svc3,
        ]
    );

    impl Foo for Svc1 {
        fn bar(&self) -> i32 {
            4
        }
    }

    impl Foo for Svc2 {
        fn bar(&self) -> i32 {
            5
        }
    }

    struct Svc4 {
        pub foo: Svc<dyn Foo>,
    }

    impl Svc4 {
        pub fn new(foo: Svc<dyn Foo>) -> Self {
            Svc4 { foo }
        }
    }

    // Svc1
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.transient().with_interface::<dyn Foo>());

    let injector = builder.build();
    let svc: Svc<dyn Foo> = injector.get().unwrap();

    assert_eq!(4, svc.bar());

    // Svc2
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.transient());
    builder.provide(Svc2::new.transient().with_interface::<dyn Foo>());

    let injector = builder.build();
    let svc: Svc<dyn Foo> = injector.get().unwrap();

    assert_eq!(5, svc.bar());

    // Svc4
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.transient());
    builder.provide(Svc2::new.transient().with_interface::<dyn Foo>());
    builder.provide(Svc4::new.transient());

    let injector = builder.build();
    let svc: Svc<Svc4> = injector.get().unwrap();

    assert_eq!(5, svc.foo.bar());
}

#[test]
fn injector_returns_error_on_cycles() {
    struct Foo(Svc<Bar>);
    impl Foo {
        fn new(bar: Svc<Bar>) -> Self {
            Foo(bar)
        }
    }

    struct Bar(Svc<Foo>);
    impl Bar {
        fn new(foo: Svc<Foo>) -> Self {
            Bar(foo)
        }
    }

    let mut builder = Injector::builder();
    builder.provide(Foo::new.singleton());
    builder.provide(Bar::new.singleton());

    let injector = builder.build();
    match injector.get::<Svc<Foo>>() {
        Err(InjectError::CycleDetected {
            service_info,
            cycle,
        }) if service_info == ServiceInfo::of::<Foo>() => {
            assert_eq!(3, cycle.len());
            assert_eq!(ServiceInfo::of::<Foo>(), cycle[0]);
            assert_eq!(ServiceInfo::of::<Bar>(), cycle[1]);
            assert_eq!(ServiceInfo::of::<Foo>(), cycle[2]);
        }
        Ok(_) => panic!("somehow created a Foo with a cyclic dependency"),
        Err(error) => Err(error).unwrap(),
    }
}

#[test]
fn singleton_is_shared_and_transient_is_not() {
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.singleton());
    builder.provide(Svc2::new.transient());

    let injector = builder.build();
    let svc1: Svc<Svc1> = injector.get().unwrap();
    let first: Svc<Svc2> = injector.get().unwrap();
    let second: Svc<Svc2> = injector.get().unwrap();

    assert!(!Svc::ptr_eq(&first, &second));
    assert!(Svc::ptr_eq(&first.dep1, &second.dep1));
    assert!(Svc::ptr_eq(&svc1, &first.dep1));
}

#[test]
fn optional_dependency_is_none_when_missing() {
    struct MaybeSvc1(Option<Svc<Svc1>>);

    let mut builder = Injector::builder();
    builder.provide(MaybeSvc1.transient());

    let injector = builder.build();
    let service: Svc<MaybeSvc1> = injector.get().unwrap();
    assert!(service.0.is_none());
}

#[test]
fn optional_dependency_still_reports_missing_transitive_dependency() {
    struct MaybeSvc2(Option<Svc<Svc2>>);

    let mut builder = Injector::builder();
    builder.provide(Svc2::new.transient());
    builder.provide(MaybeSvc2.transient());

    // Svc2 is bound but cannot be activated without Svc1
    let injector = builder.build();
    match injector.get::<Svc<MaybeSvc2>>() {
        Err(InjectError::MissingDependency {
            service_info,
            dependency_info,
        }) if service_info == ServiceInfo::of::<Svc2>()
            && dependency_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => panic!("Svc2 should not have been activated"),
    }
}

#[test]
fn duplicate_bindings_are_rejected_on_request() {
    let mut builder = Injector::builder();
    builder.provide(Svc1::default.singleton());
    builder.provide(constant(Svc1(2)));

    let injector = builder.build();
    match injector.get::<Svc<Svc1>>() {
        Err(InjectError::MultipleProviders { service_info })
            if service_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => panic!("a single Svc1 was resolved from two bindings"),
    }
}

#[test]
fn private_module_hides_unexposed_services() {
    let mut private_module = PrivateModule::default();
    private_module.provide(constant(Svc1(7)));
    private_module.provide(Svc2::new.singleton());
    private_module.expose::<Svc2>();

    let mut builder = Injector::builder();
    builder.add_module(private_module.into());

    let injector = builder.build();
    let svc2: Svc<Svc2> = injector.get().unwrap();
    assert_eq!(7, svc2.dep1.0);

    match injector.get::<Svc<Svc1>>() {
        Err(InjectError::MissingProvider { service_info })
            if service_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => panic!("Svc1 should be private"),
    }
}

#[test]
fn private_module_sees_enclosing_services() {
    let mut private_module = PrivateModule::default();
    private_module.provide(Svc2::new.transient());
    private_module.expose::<Svc2>();

    let mut builder = Injector::builder();
    builder.provide(constant(Svc1(3)));
    builder.add_module(private_module.into());

    let injector = builder.build();
    let svc2: Svc<Svc2> = injector.get().unwrap();
    let svc1: Svc<Svc1> = injector.get().unwrap();
    assert!(Svc::ptr_eq(&svc1, &svc2.dep1));
}

#[test]
fn enclosing_services_do_not_see_private_services() {
    let mut private_module = PrivateModule::default();
    private_module.provide(constant(Svc1(3)));

    let mut builder = Injector::builder();
    builder.provide(Svc2::new.transient());
    builder.add_module(private_module.into());

    let injector = builder.build();
    match injector.get::<Svc<Svc2>>() {
        Err(InjectError::MissingDependency {
            dependency_info, ..
        }) if dependency_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => panic!("Svc2 resolved a private dependency"),
    }
}

#[test]
fn sibling_private_modules_may_bind_the_same_service() {
    struct Left(Svc<Svc1>);
    struct Right(Svc<Svc1>);

    let mut left = PrivateModule::default();
    left.provide(constant(Svc1(1)));
    left.provide(Left.singleton());
    left.expose::<Left>();

    let mut right = PrivateModule::default();
    right.provide(constant(Svc1(2)));
    right.provide(Right.singleton());
    right.expose::<Right>();

    let mut module = Module::default();
    module.install_private(left);
    module.install_private(right);

    let mut builder = Injector::builder();
    builder.add_module(module);

    let injector = builder.build();
    let left: Svc<Left> = injector.get().unwrap();
    let right: Svc<Right> = injector.get().unwrap();
    assert_eq!(1, left.0 .0);
    assert_eq!(2, right.0 .0);
}

#[test]
fn nested_private_modules_expose_through_each_level() {
    let mut inner = PrivateModule::default();
    inner.provide(Svc2::new.singleton());
    inner.expose::<Svc2>();

    let mut outer = PrivateModule::default();
    outer.provide(constant(Svc1(9)));
    outer.provide(Svc3::new.singleton());
    outer.install_private(inner);
    outer.expose::<Svc3>();

    let mut builder = Injector::builder();
    builder.add_module(outer.into());

    let injector = builder.build();
    let svc3: Svc<Svc3> = injector.get().unwrap();
    assert_eq!(9, svc3.dep2.dep1.0);
    assert!(Svc::ptr_eq(&svc3.dep1, &svc3.dep2.dep1));

    // Only exposed one level up
    assert!(injector.get::<Option<Svc<Svc2>>>().unwrap().is_none());
}

#[test]
fn exposing_an_unbound_service_is_a_missing_provider() {
    let mut private_module = PrivateModule::default();
    private_module.expose::<Svc1>();

    let mut builder = Injector::builder();
    builder.add_module(private_module.into());

    let injector = builder.build();
    match injector.get::<Svc<Svc1>>() {
        Err(InjectError::MissingProvider { service_info })
            if service_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => panic!("Svc1 is not bound anywhere"),
    }
}

#[test]
fn requested_injector_is_scoped_to_its_module() {
    struct Locator(Injector);

    let mut private_module = PrivateModule::default();
    private_module.provide(constant(Svc1(4)));
    private_module.provide(Locator.singleton());
    private_module.expose::<Locator>();

    let mut builder = Injector::builder();
    builder.add_module(private_module.into());

    let injector = builder.build();
    let locator: Svc<Locator> = injector.get().unwrap();
    let svc1: Svc<Svc1> = locator.0.get().unwrap();
    assert_eq!(4, svc1.0);
    assert!(injector.get::<Svc<Svc1>>().is_err());
}

#[test]
fn modules_can_be_installed_into_modules() {
    let inner = define_module! {
        services = [Svc1::default.singleton()],
    };
    let module = define_module! {
        services = [Svc2::new.transient()],
        modules = [inner],
    };

    let mut builder = Injector::builder();
    builder.add_module(module);

    let injector = builder.build();
    let _svc2: Svc<Svc2> = injector.get().unwrap();
}
